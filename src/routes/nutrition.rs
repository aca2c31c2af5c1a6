use axum::Form;
use axum::extract::State;
use axum::response::IntoResponse;
use recipefinder_nutrition::{NutritionGoals, NutritionProgress, NutritionTotals};
use serde::{Deserialize, Deserializer};

use crate::routes::AppState;
use crate::template::{Template, ToastSuccessTemplate, filters};
use crate::{try_page_response, try_response};

#[derive(askama::Template)]
#[template(path = "nutrition.html")]
pub struct NutritionTemplate {
    pub current_path: String,
    pub totals: NutritionTotals,
    pub goals: NutritionGoals,
    pub progress: NutritionProgress,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let totals = try_page_response!(app.nutrition.totals(), template);
    let goals = try_page_response!(app.nutrition.goals(), template);
    let progress = try_page_response!(app.nutrition.progress(), template);

    template
        .render(NutritionTemplate {
            current_path: "nutrition".to_owned(),
            totals,
            goals,
            progress,
        })
        .into_response()
}

/// Number inputs left blank submit as empty strings, which count as zero.
fn blank_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();

    if raw.is_empty() {
        return Ok(0);
    }

    raw.parse().map_err(serde::de::Error::custom)
}

#[derive(Deserialize)]
pub struct LogInput {
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub calories: u32,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub protein: u32,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub carbs: u32,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub fat: u32,
}

/// POST /nutrition/add - add one meal's numbers to today's counters.
pub async fn add(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<LogInput>,
) -> impl IntoResponse {
    let delta = NutritionTotals {
        calories: input.calories,
        protein: input.protein,
        carbs: input.carbs,
        fat: input.fat,
    };

    let totals = try_response!(app.nutrition.add(delta), template);
    let description = format!("{} kcal today", totals.calories);

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Logged to tracker",
            description: Some(&description),
        })
        .into_response()
}

pub async fn reset(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    try_response!(app.nutrition.reset(), template);

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Tracker reset",
            description: None,
        })
        .into_response()
}
