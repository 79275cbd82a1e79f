//! Rasa tag and picker shared by every card and form.

use leptos::prelude::*;

use crate::net::types::Rasa;

/// Pill showing a rasa's wire name.
#[component]
pub fn RasaTag(rasa: Rasa) -> impl IntoView {
    view! {
        <span class="rasa-tag" title=rasa.meaning()>
            {rasa.as_str()}
        </span>
    }
}

/// `<select>` over all nine rasas, labelled with their meanings.
///
/// The current value is marked on the matching `<option>` rather than on the
/// `<select>`: the select's value is applied before its options are mounted
/// and would be lost when the dialog is rebuilt.
#[component]
pub fn RasaSelect(id: &'static str, value: Signal<Rasa>, on_change: Callback<Rasa>) -> impl IntoView {
    view! {
        <select
            id=id
            class="form-input"
            on:change=move |ev| {
                if let Ok(rasa) = event_target_value(&ev).parse::<Rasa>() {
                    on_change.run(rasa);
                }
            }
        >
            {Rasa::ALL
                .into_iter()
                .map(|rasa| {
                    view! {
                        <option value=rasa.as_str() selected=move || value.get() == rasa>
                            {rasa.option_label()}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
