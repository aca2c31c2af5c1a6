pub mod cli;
pub mod config;
pub mod db;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use routes::AppState;

/// Create app router for testing
///
/// This function creates the Axum router with all routes configured,
/// useful for integration testing without starting the full server.
pub fn create_app(pool: sqlx::SqlitePool, config: config::Config) -> axum::Router {
    use recipefinder_db::Storage;
    use recipefinder_gateway::{MealDb, NutritionApi};
    use recipefinder_nutrition::NutritionStore;
    use recipefinder_planner::{DayCapacity, PlannerStore};
    use recipefinder_profile::ProfileStore;
    use recipefinder_recipe::FavoritesStore;
    use recipefinder_shopping::ShoppingStore;

    let storage = Storage::new(pool.clone(), pool.clone());

    let state = AppState {
        planner: PlannerStore::with_capacity(
            storage.clone(),
            DayCapacity::from_config(config.planner.day_capacity),
        ),
        favorites: FavoritesStore::new(storage.clone()),
        shopping: ShoppingStore::new(storage.clone()),
        nutrition: NutritionStore::new(storage.clone()),
        profile: ProfileStore::new(storage.clone()),
        mealdb: MealDb::new(&config.mealdb.base_url),
        nutrition_api: NutritionApi::new(
            &config.nutrition.base_url,
            &config.nutrition.app_id,
            &config.nutrition.app_key,
        ),
        config,
        pool,
    };

    routes::router(state)
}
