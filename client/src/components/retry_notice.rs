//! Placeholder shown in place of a list whose last load failed.

use leptos::prelude::*;

/// Not dismissible: it stays until a retry succeeds, so the page is never
/// left without a way to reload.
#[component]
pub fn RetryNotice(text: &'static str, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="retry-notice">
            <p class="retry-notice__text">{text}</p>
            <button class="btn retry-notice__button" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
