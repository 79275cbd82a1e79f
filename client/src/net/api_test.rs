use super::*;

#[test]
fn detail_from_body_reads_string_detail() {
    assert_eq!(
        detail_from_body(r#"{"detail":"title already exists"}"#),
        Some("title already exists".to_owned())
    );
}

#[test]
fn detail_from_body_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required"},{"loc":["body","rasa"],"msg":"bad rasa"}]}"#;
    assert_eq!(detail_from_body(body), Some("field required; bad rasa".to_owned()));
}

#[test]
fn detail_from_body_ignores_missing_blank_or_malformed() {
    assert_eq!(detail_from_body(r#"{"error":"nope"}"#), None);
    assert_eq!(detail_from_body(r#"{"detail":"   "}"#), None);
    assert_eq!(detail_from_body(r#"{"detail":42}"#), None);
    assert_eq!(detail_from_body("<html>502 Bad Gateway</html>"), None);
    assert_eq!(detail_from_body(""), None);
}

#[test]
fn status_error_captures_detail() {
    let err = status_error(ApiAction::CreateProject, 400, Some(r#"{"detail":"title already exists"}"#));
    assert_eq!(
        err,
        ApiError::Status {
            action: ApiAction::CreateProject,
            status: 400,
            detail: Some("title already exists".to_owned()),
        }
    );
    assert_eq!(err.user_message(), "title already exists");
}

#[test]
fn user_message_falls_back_per_action() {
    let err = status_error(ApiAction::CreateProject, 500, None);
    assert_eq!(err.user_message(), "Failed to create project");

    let err = ApiError::Transport { action: ApiAction::FetchProjects, message: "Failed to fetch".to_owned() };
    assert_eq!(err.user_message(), "Failed to fetch projects");

    let err = ApiError::Decode { action: ApiAction::FetchRatings, message: "expected array".to_owned() };
    assert_eq!(err.user_message(), "Failed to fetch ratings");
}

#[test]
fn rating_create_uses_detail_like_project_create() {
    let err = status_error(ApiAction::CreateRating, 404, Some(r#"{"detail":"Project with id 9 not found"}"#));
    assert_eq!(err.user_message(), "Project with id 9 not found");

    let err = status_error(ApiAction::CreateRating, 500, Some("oops"));
    assert_eq!(err.user_message(), "Failed to create rating");
}

#[test]
fn display_includes_action_and_status() {
    let err = status_error(ApiAction::FetchRatings, 503, None);
    assert_eq!(err.to_string(), "Failed to fetch ratings: HTTP 503");
    assert_eq!(err.action(), ApiAction::FetchRatings);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_are_unavailable() {
    let config = ApiConfig::default();
    let result = futures::executor::block_on(fetch_projects(&config));
    assert_eq!(result, Err(ApiError::Unavailable { action: ApiAction::FetchProjects }));

    let result = futures::executor::block_on(fetch_ratings_with_projects(&config));
    assert_eq!(result, Err(ApiError::Unavailable { action: ApiAction::FetchRatings }));
}
