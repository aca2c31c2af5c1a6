use axum::extract::State;
use axum::response::IntoResponse;
use rand::seq::IndexedRandom;
use recipefinder_shopping::ListStats;

use crate::routes::AppState;
use crate::template::{Template, filters};
use crate::try_page_response;

const QUOTES: &[&str] = &[
    "Eat healthy!",
    "Plan your meals.",
    "Cooking is love.",
    "Good food is the foundation of genuine happiness.",
];

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct DashboardTemplate {
    pub current_path: String,
    pub planned: usize,
    pub days_filled: usize,
    pub progress: u8,
    pub favorites: usize,
    pub shopping: ListStats,
    pub quote: &'static str,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let week = try_page_response!(app.planner.week(), template);
    let favorites = try_page_response!(app.favorites.count(), template);
    let shopping = try_page_response!(app.shopping.stats(), template);

    let quote = QUOTES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(QUOTES[0]);

    template
        .render(DashboardTemplate {
            current_path: "home".to_owned(),
            planned: week.count_planned(),
            days_filled: week.days_filled(),
            progress: week.progress_percent(),
            favorites,
            shopping,
            quote,
        })
        .into_response()
}
