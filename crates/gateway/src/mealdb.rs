use recipefinder_recipe::{Recipe, RecipeSummary};
use serde::{Deserialize, de::DeserializeOwned};

pub const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Client for the public recipe API.
///
/// Every endpoint answers `{"meals": [...]}` with `null` standing in for an
/// empty result, so all calls funnel through one envelope decoder.
#[derive(Clone)]
pub struct MealDb {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct MealsEnvelope<T> {
    meals: Option<Vec<T>>,
}

#[derive(Deserialize)]
struct CategoryRow {
    #[serde(rename = "strCategory")]
    name: String,
}

#[derive(Deserialize)]
struct AreaRow {
    #[serde(rename = "strArea")]
    name: String,
}

impl MealDb {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn meals<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> anyhow::Result<Vec<T>> {
        let envelope: MealsEnvelope<T> = self
            .http
            .get(format!("{}/{path}", self.base_url))
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.meals.unwrap_or_default())
    }

    pub async fn search(&self, term: &str) -> anyhow::Result<Vec<Recipe>> {
        self.meals("search.php", &[("s", term)]).await
    }

    pub async fn lookup(&self, id: &str) -> anyhow::Result<Option<Recipe>> {
        let mut meals: Vec<Recipe> = self.meals("lookup.php", &[("i", id)]).await?;

        Ok(if meals.is_empty() {
            None
        } else {
            Some(meals.remove(0))
        })
    }

    pub async fn random(&self) -> anyhow::Result<Option<Recipe>> {
        let mut meals: Vec<Recipe> = self.meals("random.php", &[]).await?;

        Ok(if meals.is_empty() {
            None
        } else {
            Some(meals.remove(0))
        })
    }

    pub async fn filter_by_category(&self, category: &str) -> anyhow::Result<Vec<RecipeSummary>> {
        self.meals("filter.php", &[("c", category)]).await
    }

    pub async fn categories(&self) -> anyhow::Result<Vec<String>> {
        let rows: Vec<CategoryRow> = self.meals("list.php", &[("c", "list")]).await?;

        Ok(rows.into_iter().map(|row| row.name).collect())
    }

    pub async fn areas(&self) -> anyhow::Result<Vec<String>> {
        let rows: Vec<AreaRow> = self.meals("list.php", &[("a", "list")]).await?;

        Ok(rows.into_iter().map(|row| row.name).collect())
    }
}
