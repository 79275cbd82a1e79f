//! Rating list page with an add-rating modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount, ratings and projects are fetched concurrently and applied
//! together. Projects are only needed to title the cards and fill the
//! project picker, so a successful create refetches ratings alone.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::error_banner::ErrorBanner;
use crate::components::rating_card::RatingCard;
use crate::components::rating_form::CreateRatingDialog;
use crate::components::retry_notice::RetryNotice;
use crate::config::ApiConfig;
use crate::net::api::{create_rating, fetch_ratings, fetch_ratings_with_projects};
use crate::net::types::Rating;
use crate::pages::request::spawn_request;
use crate::state::ratings::{EMPTY_MESSAGE, LOAD_FAILED_MESSAGE, PROJECT_QUERY_KEY, RatingsState};

#[component]
pub fn RatingsPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let state = RwSignal::new(RatingsState::loading());

    // Arriving from a project card's "Add Rating" link.
    if let Some(project_id) = use_query_map().with_untracked(|q| q.get(PROJECT_QUERY_KEY)) {
        state.update(|s| s.preselect_project(&project_id));
    }

    let load_all = Callback::new(move |()| {
        let config = config.get_value();
        spawn_request(async move { fetch_ratings_with_projects(&config).await }, move |result| {
            state.update(|s| s.finish_load(result));
        });
    });

    let reload_ratings = Callback::new(move |()| {
        let config = config.get_value();
        spawn_request(async move { fetch_ratings(&config).await }, move |result| {
            state.update(|s| s.list.finish_load(result));
        });
    });

    Effect::new(move || load_all.run(()));

    let retry = Callback::new(move |()| {
        state.update(|s| s.list.begin_load());
        load_all.run(());
    });

    let submit = Callback::new(move |()| {
        let payload = match state.with_untracked(|s| s.list.form.draft.to_payload(&s.projects)) {
            Ok(payload) => payload,
            Err(e) => {
                state.update(|s| s.list.submit_failed(e.to_string()));
                return;
            }
        };
        if !state.try_update(|s| s.list.begin_submit()).unwrap_or(false) {
            return;
        }
        let config = config.get_value();
        spawn_request(async move { create_rating(&config, &payload).await }, move |result| match result {
            Ok(()) => {
                state.update(|s| s.list.submit_succeeded());
                reload_ratings.run(());
            }
            Err(message) => state.update(|s| s.list.submit_failed(message)),
        });
    });

    let error = Signal::derive(move || state.with(|s| s.list.error.clone()));
    let on_dismiss = Callback::new(move |()| state.update(|s| s.list.dismiss_error()));
    let cards = Memo::new(move |_| state.with(RatingsState::titled_ratings));

    view! {
        <div class="list-page">
            <Show
                when=move || !state.with(|s| s.list.is_initial_loading())
                fallback=|| view! { <div class="list-page__loading" aria-busy="true">"Loading ratings..."</div> }
            >
                <ErrorBanner message=error on_dismiss=on_dismiss/>

                <header class="list-page__header">
                    <h1>"Ratings"</h1>
                    <button class="btn btn--primary" on:click=move |_| state.update(|s| s.list.open_form())>
                        "Add New Rating"
                    </button>
                </header>

                <Show when=move || state.with(|s| s.list.form.open)>
                    <CreateRatingDialog state=state on_submit=submit/>
                </Show>

                <div class="list-page__stack">
                    <For
                        each=move || cards.get()
                        key=|(rating, title): &(Rating, String)| (rating.id, title.clone())
                        children=|(rating, project_title)| {
                            view! { <RatingCard rating=rating project_title=project_title/> }
                        }
                    />
                </div>

                <Show when=move || state.with(|s| s.list.can_retry())>
                    <RetryNotice text=LOAD_FAILED_MESSAGE on_retry=retry/>
                </Show>

                <Show when=move || state.with(|s| s.list.show_empty_state())>
                    <p class="list-page__empty">{EMPTY_MESSAGE}</p>
                </Show>
            </Show>
        </div>
    }
}
