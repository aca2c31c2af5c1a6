#![allow(dead_code)]

use std::{path::PathBuf, str::FromStr};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use recipefinder::config::{
    Config, DatabaseConfig, MealDbConfig, NutritionConfig, ObservabilityConfig, PlannerConfig,
    ServerConfig,
};
use recipefinder_db::Storage;
use recipefinder_recipe::Recipe;
use serde::Serialize;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        planner: PlannerConfig::default(),
        mealdb: MealDbConfig::default(),
        nutrition: NutritionConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    recipefinder_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

pub async fn setup_app(path: PathBuf) -> anyhow::Result<(Router, SqlitePool)> {
    setup_app_with(path, test_config()).await
}

pub async fn setup_app_with(
    path: PathBuf,
    config: Config,
) -> anyhow::Result<(Router, SqlitePool)> {
    let pool = setup_pool(path).await?;
    let app = recipefinder::create_app(pool.clone(), config);

    Ok((app, pool))
}

pub fn storage(pool: &SqlitePool) -> Storage {
    Storage::new(pool.clone(), pool.clone())
}

pub async fn get(app: &Router, path: &str) -> anyhow::Result<Response> {
    let request = Request::builder().uri(path).body(Body::empty())?;

    Ok(app.clone().oneshot(request).await?)
}

pub async fn post(app: &Router, path: &str) -> anyhow::Result<Response> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .body(Body::empty())?;

    Ok(app.clone().oneshot(request).await?)
}

pub async fn post_form<T: Serialize + ?Sized>(
    app: &Router,
    path: &str,
    form: &T,
) -> anyhow::Result<Response> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(form)?))?;

    Ok(app.clone().oneshot(request).await?)
}

pub async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<Response> {
    Ok(app.clone().oneshot(request).await?)
}

pub async fn body_string(response: Response) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub fn corba() -> Recipe {
    serde_json::from_str(
        r#"{
            "idMeal": "52977",
            "strMeal": "Corba",
            "strCategory": "Side",
            "strArea": "Turkish",
            "strInstructions": "Rinse the lentils. Simmer everything until soft.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/58oia61564916529.jpg",
            "strTags": "Soup",
            "strIngredient1": "Lentils",
            "strIngredient2": "Onion",
            "strIngredient3": "Carrots",
            "strIngredient4": "Sea Salt",
            "strIngredient5": "Water",
            "strIngredient6": "",
            "strMeasure1": "1 cup",
            "strMeasure2": "1 large",
            "strMeasure3": "1 large",
            "strMeasure4": "",
            "strMeasure5": "6 cups",
            "strMeasure6": ""
        }"#,
    )
    .unwrap()
}

pub fn burek() -> Recipe {
    serde_json::from_str(
        r#"{
            "idMeal": "53060",
            "strMeal": "Burek",
            "strCategory": "Side",
            "strArea": "Croatian",
            "strInstructions": "Fry the onion, add the beef, roll in filo and bake.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/tkxquw1628771028.jpg",
            "strIngredient1": "Filo Pastry",
            "strIngredient2": "Minced Beef",
            "strIngredient3": "Onion",
            "strMeasure1": "1 packet",
            "strMeasure2": "150g",
            "strMeasure3": "1 finely chopped"
        }"#,
    )
    .unwrap()
}
