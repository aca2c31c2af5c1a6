use serde::{Deserialize, Serialize};

/// Running daily counters on the tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTotals {
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub protein: u32,
    #[serde(default)]
    pub carbs: u32,
    #[serde(default)]
    pub fat: u32,
}

impl NutritionTotals {
    pub fn add(&mut self, delta: NutritionTotals) {
        self.calories += delta.calories;
        self.protein += delta.protein;
        self.carbs += delta.carbs;
        self.fat += delta.fat;
    }
}

/// Daily goals, stored under the upstream field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionGoals {
    #[serde(rename = "calorieGoal", default = "default_calories")]
    pub calories: u32,
    #[serde(rename = "proteinGoal", default = "default_protein")]
    pub protein: u32,
    #[serde(rename = "carbsGoal", default = "default_carbs")]
    pub carbs: u32,
    #[serde(rename = "fatGoal", default = "default_fat")]
    pub fat: u32,
}

fn default_calories() -> u32 {
    2000
}

fn default_protein() -> u32 {
    50
}

fn default_carbs() -> u32 {
    300
}

fn default_fat() -> u32 {
    70
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: default_calories(),
            protein: default_protein(),
            carbs: default_carbs(),
            fat: default_fat(),
        }
    }
}

/// Percent of each goal reached, capped at 100 for the progress bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NutritionProgress {
    pub calories: u8,
    pub protein: u8,
    pub carbs: u8,
    pub fat: u8,
}

fn percent_of(value: u32, goal: u32) -> u8 {
    if goal == 0 {
        return 0;
    }

    (value as f64 / goal as f64 * 100.0).round().min(100.0) as u8
}

pub fn progress_toward(totals: NutritionTotals, goals: NutritionGoals) -> NutritionProgress {
    NutritionProgress {
        calories: percent_of(totals.calories, goals.calories),
        protein: percent_of(totals.protein, goals.protein),
        carbs: percent_of(totals.carbs, goals.carbs),
        fat: percent_of(totals.fat, goals.fat),
    }
}
