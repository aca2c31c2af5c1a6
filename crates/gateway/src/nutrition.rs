use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const NUTRITION_BASE_URL: &str = "https://api.edamam.com/api/nutrition-data";

/// Client for the per-ingredient nutrition API. Credentials are optional;
/// without them every lookup answers `None` and the pages simply skip the
/// nutrition panel.
#[derive(Clone)]
pub struct NutritionApi {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

/// Rounded nutrition facts summed over a whole recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecipeNutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
    pub sugar: u32,
}

#[derive(Debug, Default, Deserialize)]
struct IngredientNutrition {
    #[serde(default)]
    calories: f64,
    #[serde(default, rename = "totalNutrients")]
    total_nutrients: HashMap<String, Nutrient>,
}

#[derive(Debug, Default, Deserialize)]
struct Nutrient {
    #[serde(default)]
    quantity: f64,
}

impl IngredientNutrition {
    fn quantity(&self, code: &str) -> f64 {
        self.total_nutrients
            .get(code)
            .map(|nutrient| nutrient.quantity)
            .unwrap_or_default()
    }
}

#[derive(Default)]
struct Totals {
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sugar: f64,
}

impl Totals {
    fn add(&mut self, data: &IngredientNutrition) {
        self.calories += data.calories;
        self.protein += data.quantity("PROCNT");
        self.carbs += data.quantity("CHOCDF");
        self.fat += data.quantity("FAT");
        self.fiber += data.quantity("FIBTG");
        self.sugar += data.quantity("SUGAR");
    }

    fn rounded(&self) -> RecipeNutrition {
        RecipeNutrition {
            calories: self.calories.round() as u32,
            protein: self.protein.round() as u32,
            carbs: self.carbs.round() as u32,
            fat: self.fat.round() as u32,
            fiber: self.fiber.round() as u32,
            sugar: self.sugar.round() as u32,
        }
    }
}

impl NutritionApi {
    pub fn new(
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }

    pub fn enabled(&self) -> bool {
        !self.app_id.is_empty() && !self.app_key.is_empty()
    }

    /// Sums nutrition facts over the given ingredient lines.
    ///
    /// Answers `None` when no credentials are configured. A failed lookup
    /// for one ingredient skips that line and keeps summing the rest.
    pub async fn recipe_totals(&self, lines: &[String]) -> Option<RecipeNutrition> {
        if !self.enabled() {
            return None;
        }

        let mut totals = Totals::default();

        for line in lines {
            match self.ingredient(line).await {
                Ok(data) => totals.add(&data),
                Err(err) => {
                    tracing::warn!(ingredient = %line, err = %err, "Nutrition lookup failed, skipping ingredient");
                }
            }
        }

        Some(totals.rounded())
    }

    async fn ingredient(&self, line: &str) -> anyhow::Result<IngredientNutrition> {
        Ok(self
            .http
            .get(&self.base_url)
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("ingr", line),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lentils() -> IngredientNutrition {
        serde_json::from_str(
            r#"{
                "uri": "http://www.edamam.com/ontologies/edamam.owl#recipe_x",
                "calories": 678,
                "totalWeight": 192.0,
                "totalNutrients": {
                    "ENERC_KCAL": {"label": "Energy", "quantity": 678.2, "unit": "kcal"},
                    "PROCNT": {"label": "Protein", "quantity": 49.5, "unit": "g"},
                    "CHOCDF": {"label": "Carbs", "quantity": 115.4, "unit": "g"},
                    "FAT": {"label": "Fat", "quantity": 2.03, "unit": "g"},
                    "FIBTG": {"label": "Fiber", "quantity": 20.6, "unit": "g"}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn totals_sum_and_round_each_field() {
        let mut totals = Totals::default();
        totals.add(&lentils());
        totals.add(&lentils());

        let rounded = totals.rounded();
        assert_eq!(rounded.calories, 1356);
        assert_eq!(rounded.protein, 99);
        assert_eq!(rounded.fat, 4);
        assert_eq!(rounded.fiber, 41);
    }

    #[test]
    fn missing_nutrient_codes_count_as_zero() {
        let data: IngredientNutrition =
            serde_json::from_str(r#"{"calories": 12, "totalNutrients": {}}"#).unwrap();
        let mut totals = Totals::default();
        totals.add(&data);

        let rounded = totals.rounded();
        assert_eq!(rounded.calories, 12);
        assert_eq!(rounded.sugar, 0);
    }

    #[test]
    fn empty_credentials_disable_the_client() {
        let api = NutritionApi::new(NUTRITION_BASE_URL, "", "");

        assert!(!api.enabled());
    }

    #[test]
    fn credentials_enable_the_client() {
        let api = NutritionApi::new(NUTRITION_BASE_URL, "app-id", "app-key");

        assert!(api.enabled());
    }
}
