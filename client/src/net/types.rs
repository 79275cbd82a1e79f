//! Wire DTOs for the RMS REST API.
//!
//! DESIGN
//! ======
//! The API owns both entities; these structs are transient copies. Optional
//! text fields accept `null`, and unknown fields the backend adds (owners,
//! update timestamps, reference links) are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the nine Navarasa categories.
///
/// Sent upper-case (`"SHRINGARA"`). Parsed case-insensitively because the
/// backend echoes its stored enum values in lower case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rasa {
    #[default]
    Shringara,
    Hasya,
    Karuna,
    Veera,
    Bhayanaka,
    Adbhuta,
    Shanta,
    Bibhatsa,
    Raudra,
}

impl Rasa {
    /// All categories in canonical order.
    pub const ALL: [Rasa; 9] = [
        Rasa::Shringara,
        Rasa::Hasya,
        Rasa::Karuna,
        Rasa::Veera,
        Rasa::Bhayanaka,
        Rasa::Adbhuta,
        Rasa::Shanta,
        Rasa::Bibhatsa,
        Rasa::Raudra,
    ];

    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Rasa::Shringara => "SHRINGARA",
            Rasa::Hasya => "HASYA",
            Rasa::Karuna => "KARUNA",
            Rasa::Veera => "VEERA",
            Rasa::Bhayanaka => "BHAYANAKA",
            Rasa::Adbhuta => "ADBHUTA",
            Rasa::Shanta => "SHANTA",
            Rasa::Bibhatsa => "BIBHATSA",
            Rasa::Raudra => "RAUDRA",
        }
    }

    /// Title-case display name.
    pub fn label(self) -> &'static str {
        match self {
            Rasa::Shringara => "Shringara",
            Rasa::Hasya => "Hasya",
            Rasa::Karuna => "Karuna",
            Rasa::Veera => "Veera",
            Rasa::Bhayanaka => "Bhayanaka",
            Rasa::Adbhuta => "Adbhuta",
            Rasa::Shanta => "Shanta",
            Rasa::Bibhatsa => "Bibhatsa",
            Rasa::Raudra => "Raudra",
        }
    }

    /// English gloss of the emotional essence.
    pub fn meaning(self) -> &'static str {
        match self {
            Rasa::Shringara => "Aesthetic Pleasure",
            Rasa::Hasya => "Joy",
            Rasa::Karuna => "Empathy",
            Rasa::Veera => "Heroic",
            Rasa::Bhayanaka => "Horrific",
            Rasa::Adbhuta => "Wonder",
            Rasa::Shanta => "Serene",
            Rasa::Bibhatsa => "Disgust",
            Rasa::Raudra => "Fiery",
        }
    }

    /// Label for `<select>` options, e.g. `Shringara (Aesthetic Pleasure)`.
    pub fn option_label(self) -> String {
        format!("{} ({})", self.label(), self.meaning())
    }

    /// First letter of the display name, used by the dashboard badges.
    pub fn initial(self) -> char {
        self.label().chars().next().unwrap_or('?')
    }
}

impl fmt::Display for Rasa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a name outside the nine categories.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown rasa: {0}")]
pub struct UnknownRasa(pub String);

impl FromStr for Rasa {
    type Err = UnknownRasa;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Rasa::ALL
            .into_iter()
            .find(|rasa| rasa.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownRasa(raw.to_owned()))
    }
}

impl Serialize for Rasa {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rasa {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// A project as returned by `GET /projects/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned identifier.
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Emotional category the project aims for.
    pub expected_rasa: Rasa,
    /// Server-assigned creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: String,
}

/// A rating as returned by `GET /ratings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    /// Project this rating evaluates.
    pub project_id: i64,
    /// Category rated; independent of the project's `expected_rasa`.
    pub rasa: Rasa,
    /// Score on the 1-10 scale, as stored by the server.
    pub rating_value: i64,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /projects/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub expected_rasa: Rasa,
}

/// Body of `POST /ratings`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewRating {
    pub project_id: i64,
    pub rasa: Rasa,
    pub rating_value: u8,
    pub feedback: String,
}
