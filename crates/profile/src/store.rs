use recipefinder_db::Storage;
use recipefinder_nutrition::NutritionStore;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use validator::Validate;

use crate::{Allergies, DietaryPreferences, ProfileExport, ProfileInput, UserProfile};

pub const USER_NAME_KEY: &str = "userName";
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const PREFERENCES_KEY: &str = "dietaryPreferences";
pub const ALLERGIES_KEY: &str = "allergies";

#[derive(Clone)]
pub struct ProfileStore {
    storage: Storage,
}

impl ProfileStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub async fn profile(&self) -> anyhow::Result<UserProfile> {
        Ok(UserProfile {
            name: self.storage.read_json(USER_NAME_KEY).await?,
            email: self.storage.read_json(USER_EMAIL_KEY).await?,
        })
    }

    pub async fn save_profile(&self, input: ProfileInput) -> recipefinder_shared::Result<()> {
        let input = ProfileInput {
            name: input.name.trim().to_owned(),
            email: input.email.trim().to_owned(),
        };
        input.validate()?;

        self.storage.write_json(USER_NAME_KEY, &input.name).await?;
        self.storage.write_json(USER_EMAIL_KEY, &input.email).await?;

        Ok(())
    }

    pub async fn preferences(&self) -> anyhow::Result<DietaryPreferences> {
        self.storage.read_json(PREFERENCES_KEY).await
    }

    pub async fn set_preferences(
        &self,
        preferences: DietaryPreferences,
    ) -> recipefinder_shared::Result<()> {
        self.storage.write_json(PREFERENCES_KEY, &preferences).await?;

        Ok(())
    }

    pub async fn allergies(&self) -> anyhow::Result<Allergies> {
        self.storage.read_json(ALLERGIES_KEY).await
    }

    pub async fn set_allergies(&self, allergies: Allergies) -> recipefinder_shared::Result<()> {
        self.storage.write_json(ALLERGIES_KEY, &allergies).await?;

        Ok(())
    }

    /// Bundles profile, preferences, allergies and goals for the data
    /// download.
    pub async fn export(&self) -> anyhow::Result<ProfileExport> {
        Ok(ProfileExport {
            profile: self.profile().await?,
            dietary_preferences: self.preferences().await?,
            allergies: self.allergies().await?,
            nutritional_goals: NutritionStore::new(self.storage.clone()).goals().await?,
            export_date: OffsetDateTime::now_utc().format(&Rfc3339)?,
        })
    }

    /// Wipes every stored blob, the planner and favorites included.
    pub async fn delete_all(&self) -> recipefinder_shared::Result<()> {
        self.storage.clear().await?;

        Ok(())
    }
}
