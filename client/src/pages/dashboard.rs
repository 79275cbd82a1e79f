//! Dashboard landing page.
//!
//! Static placeholder content only: fixed stat tiles, three sample project
//! entries, the Navarasa grid, and links to the list pages. No requests and
//! no state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Rasa;

/// A headline number on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
}

pub(crate) const STAT_TILES: [StatTile; 3] = [
    StatTile { label: "Active Projects", value: "12" },
    StatTile { label: "Total Ratings", value: "248" },
    StatTile { label: "Avg Rating", value: "4.8" },
];

pub(crate) const RECENT_PROJECT_COUNT: usize = 3;

pub(crate) fn placeholder_project_title(index: usize) -> String {
    format!("Project Title {index}")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <section class="panel">
                <h1>"Welcome to RMS"</h1>
                <p class="panel__subtitle">
                    "Rating Management System for content creation based on Mathu-Kathe principles"
                </p>
            </section>

            <section class="dashboard-page__stats">
                {STAT_TILES
                    .into_iter()
                    .map(|tile| {
                        view! {
                            <div class="panel stat-tile">
                                <h3 class="stat-tile__label">{tile.label}</h3>
                                <p class="stat-tile__value">{tile.value}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="panel">
                <h2>"Recent Projects"</h2>
                {(1..=RECENT_PROJECT_COUNT)
                    .map(|index| {
                        view! {
                            <div class="recent-project">
                                <div class="recent-project__header">
                                    <div>
                                        <h3>{placeholder_project_title(index)}</h3>
                                        <p class="recent-project__meta">"Last updated: 2 hours ago"</p>
                                    </div>
                                    <span class="status-pill">"Active"</span>
                                </div>
                                <p class="recent-project__description">
                                    "Project description goes here. This is a brief overview of what the project is about."
                                </p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="panel">
                <h2>"Navarasa Distribution"</h2>
                <div class="rasa-grid">
                    {Rasa::ALL
                        .into_iter()
                        .map(|rasa| {
                            view! {
                                <div class="rasa-grid__item" title=rasa.meaning()>
                                    <span class="rasa-grid__badge">{rasa.initial().to_string()}</span>
                                    <p class="rasa-grid__label">{rasa.label()}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="panel">
                <h2>"Quick Actions"</h2>
                <div class="quick-actions">
                    <A href="/projects" attr:class="btn btn--primary">"Create New Project"</A>
                    <A href="/ratings" attr:class="btn btn--primary">"Add New Rating"</A>
                </div>
            </section>
        </div>
    }
}
