use super::*;

fn project(id: i64, title: &str) -> Project {
    Project {
        id,
        title: title.to_owned(),
        description: None,
        expected_rasa: Rasa::Shringara,
        created_at: "2024-01-05T09:30:00".to_owned(),
    }
}

fn rating(id: i64, project_id: i64, value: i64) -> Rating {
    Rating {
        id,
        project_id,
        rasa: Rasa::Hasya,
        rating_value: value,
        feedback: None,
        created_at: "2024-01-06T09:30:00".to_owned(),
    }
}

// =============================================================
// Draft
// =============================================================

#[test]
fn default_draft_matches_reset_values() {
    let draft = RatingDraft::default();
    assert_eq!(draft.project_id, "");
    assert_eq!(draft.rasa, Rasa::Shringara);
    assert_eq!(draft.rating_value, 5);
    assert_eq!(draft.feedback, "");
}

#[test]
fn to_payload_coerces_project_id() {
    let projects = vec![project(12, "Harikathe")];
    let draft = RatingDraft {
        project_id: "12".to_owned(),
        rasa: Rasa::Adbhuta,
        rating_value: 8,
        feedback: "Moving".to_owned(),
    };
    assert_eq!(
        draft.to_payload(&projects),
        Ok(NewRating { project_id: 12, rasa: Rasa::Adbhuta, rating_value: 8, feedback: "Moving".to_owned() })
    );
}

#[test]
fn to_payload_requires_selected_project() {
    let projects = vec![project(1, "A")];
    assert_eq!(RatingDraft::default().to_payload(&projects), Err(DraftError::MissingProject));
}

#[test]
fn to_payload_rejects_project_not_loaded() {
    let projects = vec![project(1, "A")];
    let draft = RatingDraft { project_id: "2".to_owned(), ..RatingDraft::default() };
    assert_eq!(draft.to_payload(&projects), Err(DraftError::UnknownProject));

    let draft = RatingDraft { project_id: "abc".to_owned(), ..RatingDraft::default() };
    assert_eq!(draft.to_payload(&projects), Err(DraftError::UnknownProject));
}

#[test]
fn chosen_project_stays_selected_after_cancel_and_reopen() {
    let mut state = RatingsState::loading();
    state.finish_load(Ok((Vec::new(), vec![project(1, "A"), project(2, "B")])));
    state.list.open_form();
    state.list.form.draft.project_id = "2".to_owned();
    state.list.form.draft.rasa = Rasa::Veera;

    state.list.close_form();
    state.list.open_form();

    let draft = &state.list.form.draft;
    assert!(draft.is_project_selected(2));
    assert!(!draft.is_project_selected(1));
    assert_eq!(draft.rasa, Rasa::Veera);
    assert_eq!(draft.to_payload(&state.projects).unwrap().project_id, 2);
}

#[test]
fn no_project_selected_for_blank_or_garbage_id() {
    let draft = RatingDraft::default();
    assert!(!draft.is_project_selected(0));
    let draft = RatingDraft { project_id: "x1".to_owned(), ..RatingDraft::default() };
    assert!(!draft.is_project_selected(1));
}

#[test]
fn slider_extremes_round_trip_unchanged() {
    let projects = vec![project(1, "A")];
    for raw in ["1", "10"] {
        let mut draft = RatingDraft { project_id: "1".to_owned(), ..RatingDraft::default() };
        draft.set_rating_from_input(raw);
        let payload = draft.to_payload(&projects).unwrap();
        assert_eq!(payload.rating_value.to_string(), raw);
    }
}

#[test]
fn slider_input_is_clamped() {
    let mut draft = RatingDraft::default();
    draft.set_rating_from_input("0");
    assert_eq!(draft.rating_value, 1);
    draft.set_rating_from_input("11");
    assert_eq!(draft.rating_value, 10);
    draft.set_rating_from_input("-40");
    assert_eq!(draft.rating_value, 1);
}

#[test]
fn slider_input_ignores_garbage() {
    let mut draft = RatingDraft::default();
    draft.set_rating_from_input("seven");
    assert_eq!(draft.rating_value, DEFAULT_RATING);
}

#[test]
fn clamp_rating_value_bounds() {
    assert_eq!(clamp_rating_value(i64::MIN), RATING_MIN);
    assert_eq!(clamp_rating_value(i64::MAX), RATING_MAX);
    assert_eq!(clamp_rating_value(6), 6);
}

// =============================================================
// Rendering helpers
// =============================================================

#[test]
fn project_title_resolves_known_project() {
    let projects = vec![project(1, "A"), project(2, "Bhakti Songs")];
    assert_eq!(project_title(&projects, 2), "Bhakti Songs");
}

#[test]
fn project_title_falls_back_for_unknown_project() {
    let projects = vec![project(1, "A")];
    assert_eq!(project_title(&projects, 99), "Unknown Project");
    assert_eq!(project_title(&[], 1), UNKNOWN_PROJECT);
}

#[test]
fn titled_ratings_pairs_each_rating_with_its_card_heading() {
    let mut state = RatingsState::loading();
    state.finish_load(Ok((vec![rating(1, 3, 9), rating(2, 8, 4)], vec![project(3, "Kolata")])));
    let titles: Vec<(i64, String)> = state.titled_ratings().into_iter().map(|(r, t)| (r.id, t)).collect();
    assert_eq!(titles, vec![(1, "Kolata".to_owned()), (2, UNKNOWN_PROJECT.to_owned())]);
}

#[test]
fn add_rating_href_carries_project_id() {
    assert_eq!(add_rating_href(7), "/ratings?project=7");
}

#[test]
fn preselect_project_opens_form_with_project() {
    let mut state = RatingsState::loading();
    state.preselect_project(" 7 ");
    assert!(state.list.form.open);
    assert!(state.list.form.draft.is_project_selected(7));

    // Projects arrive afterwards; the preselected id resolves on submit.
    state.finish_load(Ok((Vec::new(), vec![project(7, "Yakshagana")])));
    assert_eq!(state.list.form.draft.to_payload(&state.projects).unwrap().project_id, 7);
}

#[test]
fn preselect_project_ignores_non_numeric_ids() {
    let mut state = RatingsState::loading();
    state.preselect_project("abc");
    assert!(!state.list.form.open);
    assert_eq!(state.list.form.draft, RatingDraft::default());
}

#[test]
fn format_rating_value_uses_ten_point_scale() {
    assert_eq!(format_rating_value(7), "7/10");
}

// =============================================================
// Joined load
// =============================================================

#[test]
fn finish_load_sets_both_lists() {
    let mut state = RatingsState::loading();
    assert!(state.list.is_initial_loading());

    state.finish_load(Ok((vec![rating(1, 3, 9)], vec![project(3, "Kolata")])));
    assert_eq!(state.list.items.len(), 1);
    assert_eq!(state.projects.len(), 1);
    assert_eq!(state.project_title(state.list.items[0].project_id), "Kolata");
    assert!(!state.list.is_initial_loading());
}

#[test]
fn finish_load_failure_changes_neither_list() {
    let mut state = RatingsState::loading();
    state.finish_load(Ok((vec![rating(1, 3, 9)], vec![project(3, "Kolata")])));
    state.finish_load(Err("Failed to fetch projects".to_owned()));
    assert_eq!(state.list.items.len(), 1);
    assert_eq!(state.projects.len(), 1);
    assert_eq!(state.list.error.as_deref(), Some("Failed to fetch projects"));
}

#[test]
fn finish_load_empty_ratings_shows_empty_state() {
    let mut state = RatingsState::loading();
    state.finish_load(Ok((Vec::new(), vec![project(1, "A")])));
    assert!(state.list.show_empty_state());
}

#[test]
fn rating_refetch_keeps_projects() {
    let mut state = RatingsState::loading();
    state.finish_load(Ok((Vec::new(), vec![project(1, "A")])));
    state.list.finish_load(Ok(vec![rating(5, 1, 4)]));
    assert_eq!(state.projects, vec![project(1, "A")]);
    assert_eq!(state.project_title(1), "A");
}
