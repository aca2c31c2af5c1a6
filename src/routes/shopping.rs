use axum::Form;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use recipefinder_planner::Weekday;
use recipefinder_recipe::{Ingredient, Recipe};
use recipefinder_shopping::{Category, ItemInput, ListStats, ShoppingItem};
use strum::VariantArray;
use time::OffsetDateTime;

use crate::routes::AppState;
use crate::template::{Template, ToastErrorTemplate, ToastSuccessTemplate, filters};
use crate::{try_page_response, try_response};

#[derive(askama::Template)]
#[template(path = "shopping.html")]
pub struct ShoppingTemplate {
    pub current_path: String,
    pub sections: Vec<(Category, Vec<ShoppingItem>)>,
    pub stats: ListStats,
    pub categories: &'static [Category],
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let sections = try_page_response!(app.shopping.by_category(), template);
    let stats = try_page_response!(app.shopping.stats(), template);

    template
        .render(ShoppingTemplate {
            current_path: "shopping".to_owned(),
            sections,
            stats,
            categories: Category::VARIANTS,
        })
        .into_response()
}

pub async fn add(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ItemInput>,
) -> impl IntoResponse {
    let item = try_response!(app.shopping.add(input), template);

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Added to list",
            description: Some(&item.name),
        })
        .into_response()
}

pub async fn update(
    template: Template,
    State(app): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<ItemInput>,
) -> impl IntoResponse {
    try_response!(app.shopping.update(&id, input), template);

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Item updated",
            description: None,
        })
        .into_response()
}

pub async fn toggle(
    template: Template,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let state = try_response!(app.shopping.toggle(&id), template);

    match state {
        Some(true) => template.render(ToastSuccessTemplate {
            original: None,
            message: "Checked off",
            description: None,
        }),
        Some(false) => template.render(ToastSuccessTemplate {
            original: None,
            message: "Back on the list",
            description: None,
        }),
        None => template.render(ToastErrorTemplate {
            original: None,
            message: "Item not found",
            description: None,
        }),
    }
    .into_response()
}

pub async fn remove(
    template: Template,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    try_response!(app.shopping.remove(&id), template);

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Removed from list",
            description: None,
        })
        .into_response()
}

pub async fn clear_completed(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let removed = try_response!(app.shopping.clear_completed(), template);
    let description = format!("{removed} items removed");

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Cleared completed items",
            description: Some(&description),
        })
        .into_response()
}

pub async fn clear(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    try_response!(app.shopping.clear(), template);

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "List cleared",
            description: None,
        })
        .into_response()
}

/// POST /shopping/generate - pull the ingredients of every planned meal onto
/// the list. Each distinct recipe id is resolved once; ids that no longer
/// resolve are skipped.
pub async fn generate(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let week = try_response!(anyhow: app.planner.week(), template);

    let mut ids: Vec<String> = Vec::new();
    for day in Weekday::VARIANTS {
        for entry in week.entries(*day) {
            if !ids.contains(&entry.id) {
                ids.push(entry.id.clone());
            }
        }
    }

    if ids.is_empty() {
        return template
            .render(ToastErrorTemplate {
                original: None,
                message: "Plan some meals first",
                description: None,
            })
            .into_response();
    }

    let mut ingredients: Vec<Ingredient> = Vec::new();
    for id in &ids {
        let Some(recipe) = try_response!(anyhow: app.mealdb.lookup(id), template) else {
            continue;
        };

        ingredients.extend(recipe.ingredients());
    }

    let added = try_response!(
        app.shopping.import_ingredients(&ingredients, "From meal planner"),
        template
    );
    let description = format!("{added} items added");

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Shopping list generated",
            description: Some(&description),
        })
        .into_response()
}

/// POST /shopping/import - pull the ingredients of every saved recipe onto
/// the list, straight from the stored blobs.
pub async fn import(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let recipes = try_response!(anyhow: app.favorites.list(), template);

    if recipes.is_empty() {
        return template
            .render(ToastErrorTemplate {
                original: None,
                message: "No saved recipes yet",
                description: None,
            })
            .into_response();
    }

    let ingredients: Vec<Ingredient> = recipes.iter().flat_map(Recipe::ingredients).collect();
    let added = try_response!(
        app.shopping.import_ingredients(&ingredients, "From recipe import"),
        template
    );
    let description = format!("{added} items added");

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Ingredients imported",
            description: Some(&description),
        })
        .into_response()
}

pub async fn export(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let json = try_page_response!(app.shopping.export(), template);
    let disposition = format!(
        "attachment; filename=\"shopping-list-{}.json\"",
        OffsetDateTime::now_utc().date()
    );

    (
        [
            (header::CONTENT_TYPE, "application/json".to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        json,
    )
        .into_response()
}

pub async fn share(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let text = try_page_response!(app.shopping.share_text(), template);

    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response()
}
