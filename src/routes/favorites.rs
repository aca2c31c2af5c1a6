use axum::extract::State;
use axum::response::IntoResponse;
use recipefinder_recipe::Recipe;

use crate::routes::AppState;
use crate::template::{Template, filters};
use crate::try_page_response;

#[derive(askama::Template)]
#[template(path = "favorites.html")]
pub struct FavoritesTemplate {
    pub current_path: String,
    pub recipes: Vec<Recipe>,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let recipes = try_page_response!(app.favorites.list(), template);

    template
        .render(FavoritesTemplate {
            current_path: "favorites".to_owned(),
            recipes,
        })
        .into_response()
}
