use std::str::FromStr;

use axum::Form;
use axum::extract::State;
use axum::response::IntoResponse;
use rand::seq::SliceRandom;
use recipefinder_gateway::RecipeNutrition;
use recipefinder_planner::{AddMeal, MealSlotEntry, Weekday};
use recipefinder_recipe::{Ingredient, Recipe};
use serde::Deserialize;
use strum::VariantArray;

use crate::routes::AppState;
use crate::template::{Template, ToastErrorTemplate, ToastSuccessTemplate, filters};
use crate::{try_page_response, try_response};

#[derive(askama::Template)]
#[template(path = "planner.html")]
pub struct PlannerTemplate {
    pub current_path: String,
    pub days: Vec<DayColumn>,
    pub planned: usize,
    pub days_filled: usize,
    pub progress: u8,
}

pub struct DayColumn {
    pub day: Weekday,
    pub entries: Vec<MealSlotEntry>,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let week = try_page_response!(app.planner.week(), template);

    let days = Weekday::VARIANTS
        .iter()
        .map(|day| DayColumn {
            day: *day,
            entries: week.entries(*day).to_vec(),
        })
        .collect();

    template
        .render(PlannerTemplate {
            current_path: "planner".to_owned(),
            days,
            planned: week.count_planned(),
            days_filled: week.days_filled(),
            progress: week.progress_percent(),
        })
        .into_response()
}

#[derive(askama::Template)]
#[template(path = "partials/suggestion.html")]
pub struct SuggestionTemplate {
    pub recipe: Recipe,
    pub nutrition: Option<RecipeNutrition>,
    pub days: &'static [Weekday],
}

/// GET /planner/suggest - propose a random meal that is not already on the
/// plan. A handful of redraws covers the common duplicate case.
pub async fn suggest(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    for _ in 0..5 {
        let Some(recipe) = try_response!(anyhow: app.mealdb.random(), template) else {
            break;
        };

        let planned = try_response!(anyhow: app.planner.contains_name(&recipe.name), template);
        if planned {
            continue;
        }

        let lines: Vec<String> = recipe.ingredients().iter().map(Ingredient::line).collect();
        let nutrition = app.nutrition_api.recipe_totals(&lines).await;

        return template
            .render(SuggestionTemplate {
                recipe,
                nutrition,
                days: Weekday::VARIANTS,
            })
            .into_response();
    }

    template
        .render(ToastErrorTemplate {
            original: None,
            message: "No fresh suggestion right now, try again",
            description: None,
        })
        .into_response()
}

#[derive(Deserialize)]
pub struct AddInput {
    pub day: String,
    pub id: String,
    pub name: String,
}

pub async fn add(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<AddInput>,
) -> impl IntoResponse {
    let Ok(day) = Weekday::from_str(&input.day) else {
        return template
            .render(ToastErrorTemplate {
                original: None,
                message: "invalid day",
                description: None,
            })
            .into_response();
    };

    let outcome = try_response!(
        app.planner
            .add_meal(day, MealSlotEntry::new(input.id, input.name)),
        template
    );

    match outcome {
        AddMeal::Added => template.render(ToastSuccessTemplate {
            original: None,
            message: "Added to planner",
            description: None,
        }),
        AddMeal::DayFull => template.render(ToastErrorTemplate {
            original: None,
            message: "That day is already full",
            description: None,
        }),
    }
    .into_response()
}

#[derive(Deserialize)]
pub struct RemoveInput {
    pub day: String,
    pub index: usize,
}

pub async fn remove(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<RemoveInput>,
) -> impl IntoResponse {
    let Ok(day) = Weekday::from_str(&input.day) else {
        return template
            .render(ToastErrorTemplate {
                original: None,
                message: "invalid day",
                description: None,
            })
            .into_response();
    };

    try_response!(app.planner.remove_meal(day, input.index), template);

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Removed from plan",
            description: None,
        })
        .into_response()
}

pub async fn reset(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    try_response!(app.planner.reset_week(), template);

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Week cleared",
            description: None,
        })
        .into_response()
}

/// POST /planner/quick-fill - replace the week with one random dinner per
/// day, drawn from a single category so the picks stay coherent.
pub async fn quick_fill(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let mut picks = try_response!(anyhow: app.mealdb.filter_by_category("Seafood"), template);
    picks.shuffle(&mut rand::rng());

    let mut assignments = Vec::new();
    for (day, summary) in Weekday::VARIANTS.iter().zip(picks.into_iter().take(7)) {
        // Thin summaries carry no ingredients, so each pick is resolved to
        // the full recipe; unresolvable picks leave that day open.
        let Some(recipe) = try_response!(anyhow: app.mealdb.lookup(&summary.id), template) else {
            continue;
        };

        assignments.push((*day, MealSlotEntry::new(recipe.id, recipe.name)));
    }

    if assignments.is_empty() {
        return template
            .render(ToastErrorTemplate {
                original: None,
                message: "Could not generate a plan, try again",
                description: None,
            })
            .into_response();
    }

    let planned = try_response!(app.planner.quick_fill(assignments), template);
    let description = format!("{planned} dinners planned");

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Quick meal plan generated!",
            description: Some(&description),
        })
        .into_response()
}
