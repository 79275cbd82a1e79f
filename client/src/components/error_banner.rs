//! Dismissible error banner shown above list content.

use leptos::prelude::*;

/// Alert strip with the current error text and a dismiss button.
#[component]
pub fn ErrorBanner(message: Signal<Option<String>>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <strong class="error-banner__title">"Error! "</strong>
                <span class="error-banner__message">{move || message.get().unwrap_or_default()}</span>
                <button
                    class="error-banner__dismiss"
                    title="Dismiss"
                    aria-label="Dismiss error"
                    on:click=move |_| on_dismiss.run(())
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
