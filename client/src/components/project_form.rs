//! Modal form for creating a project.

use leptos::prelude::*;

use crate::components::rasa::RasaSelect;
use crate::net::types::Rasa;
use crate::state::projects::ProjectsState;

/// Create-project dialog bound to the page's draft.
///
/// Cancelling hides the dialog without clearing the draft; only a successful
/// submit resets it.
#[component]
pub fn CreateProjectDialog(state: RwSignal<ProjectsState>, on_submit: Callback<()>) -> impl IntoView {
    let on_cancel = move |_| state.update(|s| s.close_form());
    let submitting = move || state.with(|s| s.form.submitting);
    let rasa = Signal::derive(move || state.with(|s| s.form.draft.expected_rasa));
    let on_rasa = Callback::new(move |value: Rasa| state.update(|s| s.form.draft.expected_rasa = value));

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create New Project"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <label class="dialog__label" for="title">
                        "Title"
                    </label>
                    <input
                        id="title"
                        class="dialog__input"
                        type="text"
                        required=true
                        prop:value=move || state.with(|s| s.form.draft.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form.draft.title = value);
                        }
                    />
                    <label class="dialog__label" for="description">
                        "Description"
                    </label>
                    <textarea
                        id="description"
                        class="dialog__input"
                        rows="3"
                        prop:value=move || state.with(|s| s.form.draft.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form.draft.description = value);
                        }
                    ></textarea>
                    <label class="dialog__label" for="expected_rasa">
                        "Expected Rasa"
                    </label>
                    <RasaSelect id="expected_rasa" value=rasa on_change=on_rasa/>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=submitting>
                            "Create Project"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
