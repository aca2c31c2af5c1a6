use std::str::FromStr;

use axum::Form;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use recipefinder_gateway::RecipeNutrition;
use recipefinder_planner::{AddMeal, MealSlotEntry, Weekday};
use recipefinder_recipe::{Ingredient, Recipe};
use serde::Deserialize;
use strum::VariantArray;

use crate::routes::AppState;
use crate::template::{Template, ToastErrorTemplate, ToastSuccessTemplate, filters};
use crate::{try_page_response, try_response};

#[derive(askama::Template)]
#[template(path = "recipe-detail.html")]
pub struct DetailTemplate {
    pub current_path: String,
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
    pub favorite: bool,
    pub nutrition: Option<RecipeNutrition>,
    pub days: &'static [Weekday],
}

pub async fn page(
    template: Template,
    Path(id): Path<String>,
    State(app): State<AppState>,
) -> impl IntoResponse {
    let recipe = try_page_response!(opt: app.mealdb.lookup(&id), template);
    let favorite = try_page_response!(app.favorites.contains(&recipe.id), template);

    let ingredients = recipe.ingredients();
    let lines: Vec<String> = ingredients.iter().map(Ingredient::line).collect();
    let nutrition = app.nutrition_api.recipe_totals(&lines).await;

    template
        .render(DetailTemplate {
            current_path: "recipes".to_owned(),
            ingredients,
            favorite,
            nutrition,
            days: Weekday::VARIANTS,
            recipe,
        })
        .into_response()
}

/// POST /recipes/{id}/favorite - toggles membership. The full recipe payload
/// is stored on first save, so removal never needs the upstream API.
pub async fn favorite(
    template: Template,
    Path(id): Path<String>,
    State(app): State<AppState>,
) -> impl IntoResponse {
    let stored = try_response!(anyhow: app.favorites.find(&id), template);
    let recipe = match stored {
        Some(recipe) => recipe,
        None => try_response!(anyhow_opt: app.mealdb.lookup(&id), template),
    };

    let added = try_response!(app.favorites.toggle(&recipe), template);

    let message = if added {
        "Saved to favorites"
    } else {
        "Removed from favorites"
    };

    template
        .render(ToastSuccessTemplate {
            original: None,
            message,
            description: None,
        })
        .into_response()
}

#[derive(Deserialize)]
pub struct PlanInput {
    pub day: String,
    pub name: String,
}

pub async fn plan(
    template: Template,
    Path(id): Path<String>,
    State(app): State<AppState>,
    Form(input): Form<PlanInput>,
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
        app.planner.add_meal(day, MealSlotEntry::new(id, input.name)),
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
