use recipefinder_planner::{
    AddMeal, DayCapacity, MealSlotEntry, PLANNER_KEY, PlannerStore, Weekday,
};
use strum::VariantArray;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
pub async fn test_one_weekday_filled_is_twenty_percent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_storage(dir.child("db.sqlite3")).await?;
    let store = PlannerStore::new(storage);

    let outcome = store
        .add_meal(Weekday::Monday, MealSlotEntry::new("52977", "Corba"))
        .await?;

    assert_eq!(outcome, AddMeal::Added);
    assert_eq!(store.count_planned().await?, 1);
    assert_eq!(store.progress_percent().await?, 20);

    Ok(())
}

#[tokio::test]
pub async fn test_count_tracks_every_day_list() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_storage(dir.child("db.sqlite3")).await?;
    let store = PlannerStore::new(storage);

    store
        .add_meal(Weekday::Monday, MealSlotEntry::new("52977", "Corba"))
        .await?;
    store
        .add_meal(Weekday::Monday, MealSlotEntry::new("53060", "Burek"))
        .await?;
    store
        .add_meal(Weekday::Sunday, MealSlotEntry::new("52804", "Poutine"))
        .await?;

    let week = store.week().await?;
    let by_days: usize = Weekday::VARIANTS
        .iter()
        .map(|day| week.entries(*day).len())
        .sum();
    assert_eq!(store.count_planned().await?, by_days);
    assert_eq!(by_days, 3);

    store.remove_meal(Weekday::Monday, 0).await?;
    assert_eq!(store.count_planned().await?, 2);

    // Out of range: nothing changes.
    store.remove_meal(Weekday::Monday, 7).await?;
    store.remove_meal(Weekday::Friday, 0).await?;
    assert_eq!(store.count_planned().await?, 2);

    Ok(())
}

#[tokio::test]
pub async fn test_reset_week_empties_every_day() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_storage(dir.child("db.sqlite3")).await?;
    let store = PlannerStore::new(storage.clone());

    store
        .add_meal(Weekday::Wednesday, MealSlotEntry::new("52977", "Corba"))
        .await?;
    store
        .add_meal(Weekday::Saturday, MealSlotEntry::new("53060", "Burek"))
        .await?;

    store.reset_week().await?;

    assert_eq!(store.count_planned().await?, 0);
    assert_eq!(store.progress_percent().await?, 0);

    // The reset blob carries the fixed day set, each list empty.
    let raw = storage.read(PLANNER_KEY).await?.unwrap();
    let blob: serde_json::Value = serde_json::from_str(&raw)?;
    for day in Weekday::VARIANTS {
        assert_eq!(blob[day.to_string()], serde_json::json!([]));
    }

    Ok(())
}

#[tokio::test]
pub async fn test_reload_reads_an_equal_structure() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_storage(dir.child("db.sqlite3")).await?;

    let store = PlannerStore::new(storage.clone());
    store
        .add_meal(Weekday::Monday, MealSlotEntry::new("52977", "Corba"))
        .await?;
    store
        .add_meal(Weekday::Thursday, MealSlotEntry::new("52804", "Poutine"))
        .await?;
    let before = store.week().await?;

    let reloaded = PlannerStore::new(storage);
    assert_eq!(reloaded.week().await?, before);

    Ok(())
}

#[tokio::test]
pub async fn test_capped_day_refuses_a_fourth_meal() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_storage(dir.child("db.sqlite3")).await?;

    let capped = PlannerStore::with_capacity(storage.clone(), DayCapacity::Limit(3));
    for id in ["52977", "53060", "52804"] {
        let outcome = capped
            .add_meal(Weekday::Monday, MealSlotEntry::new(id, "Meal"))
            .await?;
        assert_eq!(outcome, AddMeal::Added);
    }

    let outcome = capped
        .add_meal(Weekday::Monday, MealSlotEntry::new("52929", "Timbits"))
        .await?;
    assert_eq!(outcome, AddMeal::DayFull);
    assert_eq!(capped.count_planned().await?, 3);

    // The default policy takes the fourth without complaint.
    let unlimited = PlannerStore::new(storage);
    let outcome = unlimited
        .add_meal(Weekday::Monday, MealSlotEntry::new("52929", "Timbits"))
        .await?;
    assert_eq!(outcome, AddMeal::Added);
    assert_eq!(unlimited.count_planned().await?, 4);

    Ok(())
}

#[tokio::test]
pub async fn test_corrupt_blob_reads_as_empty_plan() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_storage(dir.child("db.sqlite3")).await?;

    storage.write(PLANNER_KEY, "][ not a plan").await?;

    let store = PlannerStore::new(storage);
    assert_eq!(store.count_planned().await?, 0);

    store
        .add_meal(Weekday::Friday, MealSlotEntry::new("52977", "Corba"))
        .await?;
    assert_eq!(store.count_planned().await?, 1);

    Ok(())
}

#[tokio::test]
pub async fn test_quick_fill_replaces_the_week() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_storage(dir.child("db.sqlite3")).await?;
    let store = PlannerStore::new(storage);

    store
        .add_meal(Weekday::Monday, MealSlotEntry::new("11111", "Leftovers"))
        .await?;

    let assignments = Weekday::VARIANTS
        .iter()
        .map(|day| (*day, MealSlotEntry::new("52819", "Cajun spiced fish")))
        .collect();
    let planned = store.quick_fill(assignments).await?;

    assert_eq!(planned, 7);
    assert_eq!(store.count_planned().await?, 7);
    assert!(!store.contains_name("Leftovers").await?);
    assert!(store.contains_name("cajun spiced fish").await?);
    assert_eq!(store.progress_percent().await?, 100);

    Ok(())
}
