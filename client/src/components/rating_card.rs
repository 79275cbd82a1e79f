//! Card for one rating, headed by the rated project's title.

use leptos::prelude::*;

use crate::components::rasa::RasaTag;
use crate::net::types::Rating;
use crate::state::ratings::format_rating_value;
use crate::util::date::format_created_at;

/// `project_title` is resolved by the page, which falls back to
/// "Unknown Project" when the rating's project is not loaded.
#[component]
pub fn RatingCard(rating: Rating, project_title: String) -> impl IntoView {
    let created = format_created_at(&rating.created_at);
    let score = format_rating_value(rating.rating_value);
    let feedback = rating.feedback.filter(|f| !f.trim().is_empty());

    view! {
        <article class="rating-card">
            <header class="rating-card__header">
                <div>
                    <h3 class="rating-card__title">{project_title}</h3>
                    <p class="rating-card__date">{created}</p>
                </div>
                <span class="rating-card__score">{score}</span>
            </header>
            <RasaTag rasa=rating.rasa/>
            {feedback.map(|f| view! { <p class="rating-card__feedback">{f}</p> })}
        </article>
    }
}
