//! Project list page state.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use super::resource::{DraftError, ResourceList};
use crate::net::types::{NewProject, Project, Rasa};

/// Shown once a successful fetch returns no projects.
pub const EMPTY_MESSAGE: &str = "No projects found. Create your first project!";

/// Shown in place of the grid while the last fetch has failed.
pub const LOAD_FAILED_MESSAGE: &str = "Projects could not be loaded.";

/// Creation form input. `Default` is the reset state after a successful create.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub expected_rasa: Rasa,
}

impl ProjectDraft {
    /// Build the `POST` body. A title is required; nothing else is checked
    /// here since the server owns validation.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::MissingTitle`] for a blank title.
    pub fn to_payload(&self) -> Result<NewProject, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        Ok(NewProject {
            title: title.to_owned(),
            description: self.description.clone(),
            expected_rasa: self.expected_rasa,
        })
    }
}

pub type ProjectsState = ResourceList<Project, ProjectDraft>;
