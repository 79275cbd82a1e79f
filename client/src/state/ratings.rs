//! Rating list page state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The rating page shows ratings alongside the titles of the projects they
//! reference, so it holds its own copy of the project list next to the
//! generic rating list. Both are loaded together and replaced together.

#[cfg(test)]
#[path = "ratings_test.rs"]
mod ratings_test;

use super::resource::{DraftError, ResourceList};
use crate::net::types::{NewRating, Project, Rasa, Rating};

/// Shown once a successful fetch returns no ratings.
pub const EMPTY_MESSAGE: &str = "No ratings found. Add your first rating!";

/// Shown in place of the list while the last fetch has failed.
pub const LOAD_FAILED_MESSAGE: &str = "Ratings could not be loaded.";

/// Card heading when a rating references a project that is not loaded.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;
pub const DEFAULT_RATING: u8 = 5;

/// Query parameter carrying a project to preselect in the rating form.
pub const PROJECT_QUERY_KEY: &str = "project";

/// Creation form input. `project_id` stays a string because it comes from a
/// `<select>` whose placeholder option is `""`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatingDraft {
    pub project_id: String,
    pub rasa: Rasa,
    pub rating_value: u8,
    pub feedback: String,
}

impl Default for RatingDraft {
    fn default() -> Self {
        Self { project_id: String::new(), rasa: Rasa::default(), rating_value: DEFAULT_RATING, feedback: String::new() }
    }
}

impl RatingDraft {
    /// Apply the slider's string value. Unparseable input is ignored.
    pub fn set_rating_from_input(&mut self, raw: &str) {
        if let Ok(value) = raw.trim().parse::<i64>() {
            self.rating_value = clamp_rating_value(value);
        }
    }

    /// Whether the `<select>` option for `project_id` should show as chosen.
    pub fn is_project_selected(&self, project_id: i64) -> bool {
        self.project_id.trim().parse::<i64>() == Ok(project_id)
    }

    /// Build the `POST` body, resolving `project_id` against the loaded
    /// projects.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::MissingProject`] when nothing is selected and
    /// [`DraftError::UnknownProject`] when the id matches no loaded project.
    pub fn to_payload(&self, projects: &[Project]) -> Result<NewRating, DraftError> {
        let raw = self.project_id.trim();
        if raw.is_empty() {
            return Err(DraftError::MissingProject);
        }
        let project_id = raw.parse::<i64>().map_err(|_| DraftError::UnknownProject)?;
        if !projects.iter().any(|p| p.id == project_id) {
            return Err(DraftError::UnknownProject);
        }
        Ok(NewRating {
            project_id,
            rasa: self.rasa,
            rating_value: clamp_rating_value(i64::from(self.rating_value)),
            feedback: self.feedback.clone(),
        })
    }
}

/// Clamp any integer onto the 1-10 scale.
pub fn clamp_rating_value(value: i64) -> u8 {
    let clamped = value.clamp(i64::from(RATING_MIN), i64::from(RATING_MAX));
    u8::try_from(clamped).unwrap_or(DEFAULT_RATING)
}

/// Title of the project with `project_id`, or [`UNKNOWN_PROJECT`].
pub fn project_title(projects: &[Project], project_id: i64) -> &str {
    projects
        .iter()
        .find(|p| p.id == project_id)
        .map_or(UNKNOWN_PROJECT, |p| p.title.as_str())
}

/// Link from a project card to the rating page with that project preselected.
pub fn add_rating_href(project_id: i64) -> String {
    format!("/ratings?{PROJECT_QUERY_KEY}={project_id}")
}

/// Score on the fixed ten-point scale, e.g. `7/10`.
pub fn format_rating_value(value: i64) -> String {
    format!("{value}/{RATING_MAX}")
}

/// Ratings, the projects they reference, and the rating form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatingsState {
    pub list: ResourceList<Rating, RatingDraft>,
    pub projects: Vec<Project>,
}

impl RatingsState {
    pub fn loading() -> Self {
        Self { list: ResourceList::loading(), projects: Vec::new() }
    }

    /// Apply the joined ratings + projects fetch. On failure neither list
    /// changes, so the page never shows one dataset without the other.
    pub fn finish_load(&mut self, result: Result<(Vec<Rating>, Vec<Project>), String>) {
        match result {
            Ok((ratings, projects)) => {
                self.projects = projects;
                self.list.finish_load(Ok(ratings));
            }
            Err(message) => self.list.finish_load(Err(message)),
        }
    }

    pub fn project_title(&self, project_id: i64) -> &str {
        project_title(&self.projects, project_id)
    }

    /// Each rating paired with the title its card is headed by.
    pub fn titled_ratings(&self) -> Vec<(Rating, String)> {
        self.list
            .items
            .iter()
            .map(|r| (r.clone(), self.project_title(r.project_id).to_owned()))
            .collect()
    }

    /// Open the form on `raw` (a project id from the page URL). Ids that do
    /// not parse are ignored; unknown ones are caught on submit.
    pub fn preselect_project(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.parse::<i64>().is_err() {
            return;
        }
        self.list.form.draft.project_id = raw.to_owned();
        self.list.open_form();
    }
}
