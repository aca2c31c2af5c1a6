use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use recipefinder_gateway::{MealDb, NutritionApi};
use recipefinder_nutrition::NutritionStore;
use recipefinder_planner::PlannerStore;
use recipefinder_profile::ProfileStore;
use recipefinder_recipe::FavoritesStore;
use recipefinder_shopping::ShoppingStore;
use sqlx::SqlitePool;

use crate::template::{NotFoundTemplate, Template};

pub mod assets;
mod about;
mod favorites;
mod health;
mod index;
mod nutrition;
mod planner;
mod profile;
mod recipes;
mod shopping;
mod theme;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub planner: PlannerStore,
    pub favorites: FavoritesStore,
    pub shopping: ShoppingStore,
    pub nutrition: NutritionStore,
    pub profile: ProfileStore,
    pub mealdb: MealDb,
    pub nutrition_api: NutritionApi,
    pub pool: SqlitePool,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render(NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/theme/toggle", post(theme::toggle))
        .route("/recipes", get(recipes::index::page))
        .route("/recipes/surprise", get(recipes::index::surprise))
        .route("/recipes/{id}", get(recipes::detail::page))
        .route("/recipes/{id}/favorite", post(recipes::detail::favorite))
        .route("/recipes/{id}/plan", post(recipes::detail::plan))
        .route("/favorites", get(favorites::page))
        .route("/planner", get(planner::page))
        .route("/planner/suggest", get(planner::suggest))
        .route("/planner/add", post(planner::add))
        .route("/planner/remove", post(planner::remove))
        .route("/planner/reset", post(planner::reset))
        .route("/planner/quick-fill", post(planner::quick_fill))
        .route("/shopping", get(shopping::page))
        .route("/shopping/add", post(shopping::add))
        .route("/shopping/generate", post(shopping::generate))
        .route("/shopping/import", post(shopping::import))
        .route("/shopping/export", get(shopping::export))
        .route("/shopping/share", get(shopping::share))
        .route("/shopping/clear-completed", post(shopping::clear_completed))
        .route("/shopping/clear", post(shopping::clear))
        .route("/shopping/{id}/update", post(shopping::update))
        .route("/shopping/{id}/toggle", post(shopping::toggle))
        .route("/shopping/{id}/remove", post(shopping::remove))
        .route("/nutrition", get(nutrition::page))
        .route("/nutrition/add", post(nutrition::add))
        .route("/nutrition/reset", post(nutrition::reset))
        .route("/profile", get(profile::page).post(profile::action))
        .route("/profile/preferences", post(profile::preferences))
        .route("/profile/allergies", post(profile::allergies))
        .route("/profile/goals", post(profile::goals))
        .route("/profile/export", get(profile::export))
        .route("/profile/delete", post(profile::delete))
        .fallback(fallback)
        .nest_service("/static", assets::AssetsService::new())
        .with_state(app_state)
}
