use recipefinder_db::Storage;
use recipefinder_shared::Result;

use crate::{AddMeal, DayCapacity, MealSlotEntry, WeekPlan, Weekday};

pub const PLANNER_KEY: &str = "plannerData";

/// The weekly meal plan behind a single interface. All mutation goes
/// through here; the whole structure is persisted after every change.
#[derive(Clone)]
pub struct PlannerStore {
    storage: Storage,
    capacity: DayCapacity,
}

impl PlannerStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            capacity: DayCapacity::default(),
        }
    }

    pub fn with_capacity(storage: Storage, capacity: DayCapacity) -> Self {
        Self { storage, capacity }
    }

    pub fn capacity(&self) -> DayCapacity {
        self.capacity
    }

    async fn load(&self) -> anyhow::Result<WeekPlan> {
        self.storage.read_json(PLANNER_KEY).await
    }

    async fn save(&self, plan: &WeekPlan) -> anyhow::Result<()> {
        self.storage.write_json(PLANNER_KEY, plan).await
    }

    pub async fn week(&self) -> anyhow::Result<WeekPlan> {
        self.load().await
    }

    pub async fn add_meal(&self, day: Weekday, entry: MealSlotEntry) -> Result<AddMeal> {
        let mut plan = self.load().await?;
        if !self.capacity.allows(plan.entries(day).len()) {
            return Ok(AddMeal::DayFull);
        }

        plan.add(day, entry);
        self.save(&plan).await?;

        Ok(AddMeal::Added)
    }

    pub async fn remove_meal(&self, day: Weekday, index: usize) -> Result<()> {
        let mut plan = self.load().await?;
        if plan.remove(day, index).is_some() {
            self.save(&plan).await?;
        }

        Ok(())
    }

    pub async fn reset_week(&self) -> Result<()> {
        self.save(&WeekPlan::empty()).await?;

        Ok(())
    }

    /// Replaces the week wholesale with one entry per assigned day, the
    /// quick-plan behavior.
    pub async fn quick_fill(
        &self,
        assignments: Vec<(Weekday, MealSlotEntry)>,
    ) -> Result<usize> {
        let mut plan = WeekPlan::empty();
        for (day, entry) in assignments {
            plan.add(day, entry);
        }
        let planned = plan.count_planned();
        self.save(&plan).await?;

        Ok(planned)
    }

    pub async fn count_planned(&self) -> anyhow::Result<usize> {
        Ok(self.load().await?.count_planned())
    }

    pub async fn days_filled(&self) -> anyhow::Result<usize> {
        Ok(self.load().await?.days_filled())
    }

    pub async fn progress_percent(&self) -> anyhow::Result<u8> {
        Ok(self.load().await?.progress_percent())
    }

    pub async fn first_open_day(&self) -> anyhow::Result<Option<Weekday>> {
        Ok(self.load().await?.first_open_day(self.capacity))
    }

    pub async fn contains_name(&self, name: &str) -> anyhow::Result<bool> {
        Ok(self.load().await?.contains_name(name))
    }
}
