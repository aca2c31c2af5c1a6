use recipefinder_db::Storage;
use recipefinder_profile::{
    Allergies, DietaryPreferences, ProfileInput, ProfileStore, UserProfile,
};
use recipefinder_shared::Error;
use temp_dir::TempDir;

mod helpers;

async fn setup(dir: &TempDir) -> anyhow::Result<(Storage, ProfileStore)> {
    let storage = helpers::setup_storage(dir.child("recipefinder.db")).await?;

    Ok((storage.clone(), ProfileStore::new(storage)))
}

#[tokio::test]
pub async fn test_profile_save_and_reload() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, store) = setup(&dir).await?;

    store
        .save_profile(ProfileInput {
            name: "  Alice  ".into(),
            email: "alice@example.com".into(),
        })
        .await?;

    assert_eq!(
        store.profile().await?,
        UserProfile {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        }
    );

    Ok(())
}

#[tokio::test]
pub async fn test_invalid_email_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, store) = setup(&dir).await?;

    let err = store
        .save_profile(ProfileInput {
            name: "Alice".into(),
            email: "not-an-email".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validate(_)));
    assert_eq!(store.profile().await?, UserProfile::default());

    Ok(())
}

#[tokio::test]
pub async fn test_preferences_and_allergies_round_trip() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, store) = setup(&dir).await?;

    store
        .set_preferences(DietaryPreferences {
            vegetarian: true,
            gluten_free: true,
            ..DietaryPreferences::default()
        })
        .await?;
    store
        .set_allergies(Allergies {
            nuts: true,
            ..Allergies::default()
        })
        .await?;

    let preferences = store.preferences().await?;
    assert!(preferences.vegetarian);
    assert!(preferences.gluten_free);
    assert!(!preferences.vegan);

    let allergies = store.allergies().await?;
    assert!(allergies.nuts);
    assert!(!allergies.soy);

    Ok(())
}

#[tokio::test]
pub async fn test_export_bundles_every_section() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, store) = setup(&dir).await?;

    store
        .save_profile(ProfileInput {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        })
        .await?;
    store
        .set_preferences(DietaryPreferences {
            vegan: true,
            ..DietaryPreferences::default()
        })
        .await?;

    let export = store.export().await?;
    let raw = serde_json::to_value(&export)?;

    assert_eq!(raw["profile"]["name"], "Alice");
    assert_eq!(raw["dietaryPreferences"]["vegan"], true);
    assert_eq!(raw["allergies"]["nuts"], false);
    assert_eq!(raw["nutritionalGoals"]["calorieGoal"], 2000);
    assert!(!export.export_date.is_empty());

    Ok(())
}

#[tokio::test]
pub async fn test_delete_all_wipes_other_stores_too() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (storage, store) = setup(&dir).await?;
    storage.write("rf_favorites", "[]").await?;
    store
        .save_profile(ProfileInput {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        })
        .await?;

    store.delete_all().await?;

    assert!(storage.read("rf_favorites").await?.is_none());
    assert_eq!(store.profile().await?, UserProfile::default());

    Ok(())
}
