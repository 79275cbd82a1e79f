//! Top navigation between the three pages.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"RMS"</span>
            <A href="/">"Dashboard"</A>
            <A href="/projects">"Projects"</A>
            <A href="/ratings">"Ratings"</A>
        </nav>
    }
}
