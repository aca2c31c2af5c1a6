use recipefinder_db::Storage;

use crate::{NutritionGoals, NutritionProgress, NutritionTotals, progress_toward};

pub const TRACKER_KEY: &str = "nutritionTracker";
pub const GOALS_KEY: &str = "nutritionalGoals";

/// Daily tracker counters plus the goals they are measured against.
#[derive(Clone)]
pub struct NutritionStore {
    storage: Storage,
}

impl NutritionStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub async fn totals(&self) -> anyhow::Result<NutritionTotals> {
        self.storage.read_json(TRACKER_KEY).await
    }

    /// A missing or corrupt goals blob reads as the stock daily goals.
    pub async fn goals(&self) -> anyhow::Result<NutritionGoals> {
        self.storage.read_json(GOALS_KEY).await
    }

    pub async fn progress(&self) -> anyhow::Result<NutritionProgress> {
        Ok(progress_toward(self.totals().await?, self.goals().await?))
    }

    pub async fn add(&self, delta: NutritionTotals) -> recipefinder_shared::Result<NutritionTotals> {
        let mut totals = self.totals().await?;
        totals.add(delta);
        self.storage.write_json(TRACKER_KEY, &totals).await?;

        Ok(totals)
    }

    pub async fn reset(&self) -> recipefinder_shared::Result<()> {
        self.storage
            .write_json(TRACKER_KEY, &NutritionTotals::default())
            .await?;

        Ok(())
    }

    pub async fn set_goals(&self, goals: NutritionGoals) -> recipefinder_shared::Result<()> {
        self.storage.write_json(GOALS_KEY, &goals).await?;

        Ok(())
    }
}
