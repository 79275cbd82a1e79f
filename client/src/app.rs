//! Root application component with routing and the API config context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::{API_BASE_META_NAME, ApiConfig};
use crate::pages::{dashboard::DashboardPage, projects::ProjectsPage, ratings::RatingsPage};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The API base URL from the host's context is written into a `<meta>` tag so
/// the hydrated app resolves the same endpoints.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api_base = use_context::<ApiConfig>().unwrap_or_default().base().to_owned();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META_NAME content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API config to every page and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let config = ApiConfig::from_document();
    #[cfg(not(feature = "hydrate"))]
    let config = use_context::<ApiConfig>().unwrap_or_default();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/rms.css"/>
        <Title text="RMS"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("ratings") view=RatingsPage/>
                </Routes>
            </main>
        </Router>
    }
}
