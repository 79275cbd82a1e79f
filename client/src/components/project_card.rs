//! Card for one project in the project grid.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::rasa::RasaTag;
use crate::net::types::Project;
use crate::state::ratings::add_rating_href;
use crate::util::date::format_created_at;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let created = format!("Created: {}", format_created_at(&project.created_at));
    let add_rating = add_rating_href(project.id);
    let description = project.description.filter(|d| !d.trim().is_empty());

    view! {
        <article class="project-card">
            <header class="project-card__header">
                <h3 class="project-card__title">{project.title}</h3>
                <RasaTag rasa=project.expected_rasa/>
            </header>
            <p class="project-card__date">{created}</p>
            {description.map(|d| view! { <p class="project-card__description">{d}</p> })}
            <footer class="project-card__actions">
                <A href=add_rating attr:class="project-card__action">"Add Rating"</A>
            </footer>
        </article>
    }
}
