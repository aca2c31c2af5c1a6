use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect};
use recipefinder_recipe::Recipe;
use serde::Deserialize;

use crate::routes::AppState;
use crate::template::{Template, filters};
use crate::try_page_response;

#[derive(askama::Template)]
#[template(path = "recipes.html")]
pub struct RecipesTemplate {
    pub current_path: String,
    pub query: String,
    pub category: String,
    pub area: String,
    pub diet: String,
    pub categories: Vec<String>,
    pub areas: Vec<String>,
    pub cards: Vec<RecipeCard>,
}

pub struct RecipeCard {
    pub recipe: Recipe,
    pub favorite: bool,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub diet: Option<String>,
}

fn param(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub async fn page(
    template: Template,
    Query(query): Query<PageQuery>,
    State(app): State<AppState>,
) -> impl IntoResponse {
    let mut recipes = match param(&query.q) {
        Some(term) => try_page_response!(app.mealdb.search(term), template),
        None => {
            // First visit shows a default spread, falling back to a search
            // that always has results.
            let mut meals = try_page_response!(app.mealdb.search("jollof"), template);
            if meals.is_empty() {
                meals = try_page_response!(app.mealdb.search("chicken"), template);
            }
            meals
        }
    };

    if let Some(category) = param(&query.category) {
        recipes.retain(|recipe| {
            recipe
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(category))
        });
    }

    if let Some(area) = param(&query.area) {
        recipes.retain(|recipe| {
            recipe
                .area
                .as_deref()
                .is_some_and(|a| a.eq_ignore_ascii_case(area))
        });
    }

    if let Some(diet) = param(&query.diet) {
        let diet = diet.to_lowercase();
        recipes.retain(|recipe| {
            recipe
                .tags
                .as_deref()
                .is_some_and(|tags| tags.to_lowercase().contains(&diet))
                || recipe.name.to_lowercase().contains(&diet)
        });
    }

    // The filter dropdowns degrade to empty lists when the upstream list
    // endpoints are unavailable.
    let categories = match app.mealdb.categories().await {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!(err = %err, "Failed to load category list");
            Vec::new()
        }
    };
    let areas = match app.mealdb.areas().await {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!(err = %err, "Failed to load area list");
            Vec::new()
        }
    };

    let favorites = try_page_response!(app.favorites.list(), template);
    let cards = recipes
        .into_iter()
        .map(|recipe| {
            let favorite = favorites.iter().any(|f| f.id == recipe.id);
            RecipeCard { recipe, favorite }
        })
        .collect();

    template
        .render(RecipesTemplate {
            current_path: "recipes".to_owned(),
            query: param(&query.q).unwrap_or_default().to_owned(),
            category: param(&query.category).unwrap_or_default().to_owned(),
            area: param(&query.area).unwrap_or_default().to_owned(),
            diet: param(&query.diet).unwrap_or_default().to_owned(),
            categories,
            areas,
            cards,
        })
        .into_response()
}

pub async fn surprise(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let recipe = try_page_response!(opt: app.mealdb.random(), template);

    Redirect::to(&format!("/recipes/{}", recipe.id)).into_response()
}
