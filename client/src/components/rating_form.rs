//! Modal form for adding a rating to a loaded project.

use leptos::prelude::*;

use crate::components::rasa::RasaSelect;
use crate::net::types::Rasa;
use crate::state::ratings::{RATING_MAX, RATING_MIN, RatingsState};

/// Add-rating dialog. The project picker lists the projects loaded with the
/// page; the score slider is bounded to the 1-10 scale.
#[component]
pub fn CreateRatingDialog(state: RwSignal<RatingsState>, on_submit: Callback<()>) -> impl IntoView {
    let on_cancel = move |_| state.update(|s| s.list.close_form());
    let submitting = move || state.with(|s| s.list.form.submitting);
    let rasa = Signal::derive(move || state.with(|s| s.list.form.draft.rasa));
    let on_rasa = Callback::new(move |value: Rasa| state.update(|s| s.list.form.draft.rasa = value));
    let rating_value = move || state.with(|s| s.list.form.draft.rating_value);

    let projects = Memo::new(move |_| state.with(|s| s.projects.clone()));
    let project_options = move || {
        projects
            .get()
            .into_iter()
            .map(|p| {
                let id = p.id;
                let selected = move || state.with(|s| s.list.form.draft.is_project_selected(id));
                view! {
                    <option value=id.to_string() selected=selected>
                        {p.title}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add New Rating"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <label class="dialog__label" for="project">
                        "Project"
                    </label>
                    <select
                        id="project"
                        class="form-input"
                        required=true
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.list.form.draft.project_id = value);
                        }
                    >
                        <option value="" selected=move || state.with(|s| s.list.form.draft.project_id.is_empty())>
                            "Select a project"
                        </option>
                        {project_options}
                    </select>
                    <label class="dialog__label" for="rasa">
                        "Rasa (Emotional Essence)"
                    </label>
                    <RasaSelect id="rasa" value=rasa on_change=on_rasa/>
                    <label class="dialog__label" for="rating">
                        "Rating (1-10): "
                        <span class="dialog__value">{rating_value}</span>
                    </label>
                    <input
                        id="rating"
                        class="dialog__range"
                        type="range"
                        min=RATING_MIN.to_string()
                        max=RATING_MAX.to_string()
                        step="1"
                        prop:value=move || rating_value().to_string()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.list.form.draft.set_rating_from_input(&value));
                        }
                    />
                    <label class="dialog__label" for="feedback">
                        "Feedback"
                    </label>
                    <textarea
                        id="feedback"
                        class="dialog__input"
                        rows="3"
                        prop:value=move || state.with(|s| s.list.form.draft.feedback.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.list.form.draft.feedback = value);
                        }
                    ></textarea>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=submitting>
                            "Submit Rating"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
