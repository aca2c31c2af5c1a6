use temp_dir::TempDir;

mod helpers;

#[tokio::test]
pub async fn test_log_meals_and_reset() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _pool) = helpers::setup_app(dir.child("db.sqlite3")).await?;

    let response = helpers::post_form(
        &app,
        "/nutrition/add",
        &[("calories", "650"), ("protein", "30"), ("carbs", "80"), ("fat", "20")],
    )
    .await?;
    let body = helpers::body_string(response).await?;
    assert!(body.contains("Logged to tracker"));
    assert!(body.contains("650 kcal today"));

    // Blank fields count as zero.
    let response = helpers::post_form(
        &app,
        "/nutrition/add",
        &[("calories", "350"), ("protein", ""), ("carbs", ""), ("fat", "")],
    )
    .await?;
    let body = helpers::body_string(response).await?;
    assert!(body.contains("1000 kcal today"));

    let page = helpers::body_string(helpers::get(&app, "/nutrition").await?).await?;
    assert!(page.contains(r#"<p class="stat-number">1000</p>"#));
    assert!(page.contains(r#"<p class="stat-number">30g</p>"#));

    let response = helpers::post(&app, "/nutrition/reset").await?;
    let body = helpers::body_string(response).await?;
    assert!(body.contains("Tracker reset"));

    let page = helpers::body_string(helpers::get(&app, "/nutrition").await?).await?;
    assert!(page.contains(r#"<p class="stat-number">0</p>"#));

    Ok(())
}

#[tokio::test]
pub async fn test_goals_set_on_profile_show_on_the_tracker() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _pool) = helpers::setup_app(dir.child("db.sqlite3")).await?;

    let page = helpers::body_string(helpers::get(&app, "/nutrition").await?).await?;
    assert!(page.contains("of 2000 kcal"));

    let response = helpers::post_form(
        &app,
        "/profile/goals",
        &[
            ("calorieGoal", "1800"),
            ("proteinGoal", "60"),
            ("carbsGoal", "250"),
            ("fatGoal", "65"),
        ],
    )
    .await?;
    let body = helpers::body_string(response).await?;
    assert!(body.contains("Goals updated"));

    let page = helpers::body_string(helpers::get(&app, "/nutrition").await?).await?;
    assert!(page.contains("of 1800 kcal"));
    assert!(page.contains("of 60g"));

    Ok(())
}

#[tokio::test]
pub async fn test_progress_bar_caps_at_one_hundred() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _pool) = helpers::setup_app(dir.child("db.sqlite3")).await?;

    helpers::post_form(
        &app,
        "/nutrition/add",
        &[("calories", "3000"), ("protein", "0"), ("carbs", "0"), ("fat", "0")],
    )
    .await?;

    let page = helpers::body_string(helpers::get(&app, "/nutrition").await?).await?;
    assert!(page.contains("width: 100%"));

    Ok(())
}
