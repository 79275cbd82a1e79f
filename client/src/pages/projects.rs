//! Project list page with a create-project modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/projects/` once on mount, renders the grid, and after every
//! successful create refetches the whole list instead of inserting the new
//! record locally.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::project_card::ProjectCard;
use crate::components::project_form::CreateProjectDialog;
use crate::components::retry_notice::RetryNotice;
use crate::config::ApiConfig;
use crate::net::api::{create_project, fetch_projects};
use crate::net::types::Project;
use crate::pages::request::spawn_request;
use crate::state::projects::{EMPTY_MESSAGE, LOAD_FAILED_MESSAGE, ProjectsState};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let state = RwSignal::new(ProjectsState::loading());

    let load = Callback::new(move |()| {
        let config = config.get_value();
        spawn_request(async move { fetch_projects(&config).await }, move |result| {
            state.update(|s| s.finish_load(result));
        });
    });

    Effect::new(move || load.run(()));

    let retry = Callback::new(move |()| {
        state.update(|s| s.begin_load());
        load.run(());
    });

    let submit = Callback::new(move |()| {
        let payload = match state.with_untracked(|s| s.form.draft.to_payload()) {
            Ok(payload) => payload,
            Err(e) => {
                state.update(|s| s.submit_failed(e.to_string()));
                return;
            }
        };
        if !state.try_update(|s| s.begin_submit()).unwrap_or(false) {
            return;
        }
        let config = config.get_value();
        spawn_request(async move { create_project(&config, &payload).await }, move |result| match result {
            Ok(()) => {
                state.update(|s| s.submit_succeeded());
                load.run(());
            }
            Err(message) => state.update(|s| s.submit_failed(message)),
        });
    });

    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let items = Memo::new(move |_| state.with(|s| s.items.clone()));
    let on_dismiss = Callback::new(move |()| state.update(|s| s.dismiss_error()));

    view! {
        <div class="list-page">
            <Show
                when=move || !state.with(|s| s.is_initial_loading())
                fallback=|| view! { <div class="list-page__loading" aria-busy="true">"Loading projects..."</div> }
            >
                <ErrorBanner message=error on_dismiss=on_dismiss/>

                <header class="list-page__header">
                    <h1>"Projects"</h1>
                    <button class="btn btn--primary" on:click=move |_| state.update(|s| s.open_form())>
                        "Create New Project"
                    </button>
                </header>

                <Show when=move || state.with(|s| s.form.open)>
                    <CreateProjectDialog state=state on_submit=submit/>
                </Show>

                <div class="list-page__grid">
                    <For
                        each=move || items.get()
                        key=|project: &Project| project.id
                        children=|project| view! { <ProjectCard project=project/> }
                    />
                </div>

                <Show when=move || state.with(|s| s.can_retry())>
                    <RetryNotice text=LOAD_FAILED_MESSAGE on_retry=retry/>
                </Show>

                <Show when=move || state.with(|s| s.show_empty_state())>
                    <p class="list-page__empty">{EMPTY_MESSAGE}</p>
                </Show>
            </Show>
        </div>
    }
}
