//! REST client for the RMS projects and ratings collections.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! lists are only fetched once the page is live in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Pages turn an error into one
//! banner line with [`ApiError::user_message`]; the full error is logged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{NewProject, NewRating, Project, Rating};
use crate::config::ApiConfig;

/// The operation a request belongs to; picks the fallback banner text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiAction {
    FetchProjects,
    CreateProject,
    FetchRatings,
    CreateRating,
}

impl ApiAction {
    /// Banner text used when the server gives no `detail`.
    pub fn failure_message(self) -> &'static str {
        match self {
            ApiAction::FetchProjects => "Failed to fetch projects",
            ApiAction::CreateProject => "Failed to create project",
            ApiAction::FetchRatings => "Failed to fetch ratings",
            ApiAction::CreateRating => "Failed to create rating",
        }
    }
}

impl fmt::Display for ApiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("{action}: {message}")]
    Transport { action: ApiAction, message: String },
    /// The server answered with a non-2xx status.
    #[error("{action}: HTTP {status}")]
    Status {
        action: ApiAction,
        status: u16,
        detail: Option<String>,
    },
    /// The response body did not match the expected shape.
    #[error("{action}: malformed response: {message}")]
    Decode { action: ApiAction, message: String },
    /// Called while rendering on the server.
    #[error("{action}: not available on server")]
    Unavailable { action: ApiAction },
}

impl ApiError {
    pub fn action(&self) -> ApiAction {
        match self {
            ApiError::Transport { action, .. }
            | ApiError::Status { action, .. }
            | ApiError::Decode { action, .. }
            | ApiError::Unavailable { action } => *action,
        }
    }

    /// Single line shown to the user: server `detail` when present, else the
    /// action's fixed failure message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { detail: Some(detail), .. } => detail.clone(),
            other => other.action().failure_message().to_owned(),
        }
    }
}

/// Extract the `detail` field from an error body.
///
/// Accepts the string form (`{"detail": "title already exists"}`) and the
/// validation-error list form (`{"detail": [{"msg": "..."}, ...]}`), whose
/// messages are joined with `"; "`.
#[cfg(any(test, feature = "hydrate"))]
fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(action: ApiAction, status: u16, body: Option<&str>) -> ApiError {
    ApiError::Status { action, status, detail: body.and_then(detail_from_body) }
}

/// `GET` a JSON array from a collection endpoint.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status, or a body that is
/// not an array of `T`.
pub async fn fetch_collection<T>(url: &str, action: ApiAction) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport { action, message: e.to_string() })?;
        if !resp.ok() {
            return Err(status_error(action, resp.status(), None));
        }
        resp.json::<Vec<T>>()
            .await
            .map_err(|e| ApiError::Decode { action, message: e.to_string() })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable { action })
    }
}

/// `POST` a JSON body to a collection endpoint.
///
/// The created record in the response is not decoded; callers refetch the
/// collection instead.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx status. For the latter
/// the response body's `detail` is captured when present.
pub async fn create_in_collection<P>(url: &str, payload: &P, action: ApiAction) -> Result<(), ApiError>
where
    P: Serialize,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(payload)
            .map_err(|e| ApiError::Decode { action, message: e.to_string() })?
            .send()
            .await
            .map_err(|e| ApiError::Transport { action, message: e.to_string() })?;
        if !resp.ok() {
            let body = resp.text().await.ok();
            return Err(status_error(action, resp.status(), body.as_deref()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, payload);
        Err(ApiError::Unavailable { action })
    }
}

/// Fetch all projects.
///
/// # Errors
///
/// See [`fetch_collection`].
pub async fn fetch_projects(config: &ApiConfig) -> Result<Vec<Project>, ApiError> {
    fetch_collection(&config.projects_url(), ApiAction::FetchProjects).await
}

/// Create a project.
///
/// # Errors
///
/// See [`create_in_collection`].
pub async fn create_project(config: &ApiConfig, project: &NewProject) -> Result<(), ApiError> {
    create_in_collection(&config.projects_url(), project, ApiAction::CreateProject).await
}

/// Fetch all ratings.
///
/// # Errors
///
/// See [`fetch_collection`].
pub async fn fetch_ratings(config: &ApiConfig) -> Result<Vec<Rating>, ApiError> {
    fetch_collection(&config.ratings_url(), ApiAction::FetchRatings).await
}

/// Create a rating.
///
/// # Errors
///
/// See [`create_in_collection`].
pub async fn create_rating(config: &ApiConfig, rating: &NewRating) -> Result<(), ApiError> {
    create_in_collection(&config.ratings_url(), rating, ApiAction::CreateRating).await
}

/// Fetch ratings and projects concurrently.
///
/// Both requests are in flight at once. The first failure short-circuits the
/// join; if both fail, which error is returned depends on which settles first.
///
/// # Errors
///
/// Returns the first error from either request.
pub async fn fetch_ratings_with_projects(config: &ApiConfig) -> Result<(Vec<Rating>, Vec<Project>), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        futures::future::try_join(fetch_ratings(config), fetch_projects(config)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable { action: ApiAction::FetchRatings })
    }
}
