use axum::http::{StatusCode, header};
use recipefinder_recipe::FavoritesStore;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
pub async fn test_save_profile_roundtrip() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _pool) = helpers::setup_app(dir.child("db.sqlite3")).await?;

    let response = helpers::post_form(
        &app,
        "/profile",
        &[("name", "Alice"), ("email", "alice@example.com")],
    )
    .await?;
    let body = helpers::body_string(response).await?;
    assert!(body.contains("Profile saved"));

    let page = helpers::body_string(helpers::get(&app, "/profile").await?).await?;
    assert!(page.contains(r#"value="Alice""#));
    assert!(page.contains(r#"value="alice@example.com""#));

    Ok(())
}

#[tokio::test]
pub async fn test_invalid_email_shows_the_validation_message() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _pool) = helpers::setup_app(dir.child("db.sqlite3")).await?;

    let response = helpers::post_form(
        &app,
        "/profile",
        &[("name", "Alice"), ("email", "not-an-email")],
    )
    .await?;
    assert_eq!(
        response.headers().get("ts-swap").and_then(|v| v.to_str().ok()),
        Some("skip")
    );
    let body = helpers::body_string(response).await?;
    assert!(body.contains("Please enter a valid email address"));

    // Nothing was stored.
    let page = helpers::body_string(helpers::get(&app, "/profile").await?).await?;
    assert!(!page.contains(r#"value="Alice""#));

    Ok(())
}

#[tokio::test]
pub async fn test_preference_checkboxes_stick() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _pool) = helpers::setup_app(dir.child("db.sqlite3")).await?;

    let response =
        helpers::post_form(&app, "/profile/preferences", &[("vegetarian", "true")]).await?;
    let body = helpers::body_string(response).await?;
    assert!(body.contains("Preferences saved"));

    let page = helpers::body_string(helpers::get(&app, "/profile").await?).await?;
    assert!(page.contains(r#"name="vegetarian" value="true" checked"#));
    assert!(!page.contains(r#"name="vegan" value="true" checked"#));

    // Unticking sends no fields at all.
    helpers::post_form(&app, "/profile/preferences", &[] as &[(&str, &str)]).await?;
    let page = helpers::body_string(helpers::get(&app, "/profile").await?).await?;
    assert!(!page.contains(r#"name="vegetarian" value="true" checked"#));

    Ok(())
}

#[tokio::test]
pub async fn test_export_bundles_everything_as_a_download() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _pool) = helpers::setup_app(dir.child("db.sqlite3")).await?;

    helpers::post_form(
        &app,
        "/profile",
        &[("name", "Alice"), ("email", "alice@example.com")],
    )
    .await?;

    let response = helpers::get(&app, "/profile/export").await?;
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(disposition.starts_with(r#"attachment; filename="recipe-finder-data-"#));

    let body = helpers::body_string(response).await?;
    let export: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(export["profile"]["name"], "Alice");
    assert_eq!(export["nutritionalGoals"]["calorieGoal"], 2000);
    assert!(export["exportDate"].is_string());

    Ok(())
}

#[tokio::test]
pub async fn test_delete_wipes_every_store_and_redirects_home() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, pool) = helpers::setup_app(dir.child("db.sqlite3")).await?;

    let favorites = FavoritesStore::new(helpers::storage(&pool));
    favorites.toggle(&helpers::corba()).await?;
    helpers::post_form(
        &app,
        "/recipes/52977/plan",
        &[("day", "monday"), ("name", "Corba")],
    )
    .await?;

    let response = helpers::post(&app, "/profile/delete").await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/")
    );

    let dashboard = helpers::body_string(helpers::get(&app, "/").await?).await?;
    assert!(dashboard.contains("0% of weekday dinners covered"));
    let favorites_page = helpers::body_string(helpers::get(&app, "/favorites").await?).await?;
    assert!(favorites_page.contains("No saved recipes yet"));

    Ok(())
}
