use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Number of numbered ingredient/measure slots the upstream payload carries.
pub const INGREDIENT_SLOTS: usize = 20;

/// One recipe as served by the upstream API.
///
/// The fields the app renders are typed out; everything else, including the
/// numbered `strIngredient1..20` / `strMeasure1..20` slots, rides along in
/// `extra` so a favorited recipe persists byte-for-byte what the API sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Option<String>>,
}

/// An ingredient paired with its measure, as read out of the numbered slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

impl Ingredient {
    /// `"1 cup Flour"` when a measure exists, the bare name otherwise.
    pub fn line(&self) -> String {
        match &self.measure {
            Some(measure) => format!("{measure} {}", self.name),
            None => self.name.clone(),
        }
    }
}

impl Recipe {
    fn slot(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .and_then(|value| value.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Collects the filled ingredient/measure pairs.
    ///
    /// The numbered slots are sparse: any index can hold null, an empty
    /// string or bare whitespace, so all twenty are scanned and the blanks
    /// skipped. An ingredient whose measure slot is blank keeps just its
    /// name.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        let mut pairs = Vec::new();

        for i in 1..=INGREDIENT_SLOTS {
            let Some(name) = self.slot(&format!("strIngredient{i}")) else {
                continue;
            };
            let measure = self.slot(&format!("strMeasure{i}")).map(str::to_owned);

            pairs.push(Ingredient {
                name: name.to_owned(),
                measure,
            });
        }

        pairs
    }

    /// Comma-separated `strTags` split into trimmed chips.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail: self.thumbnail.clone(),
        }
    }
}

/// The trimmed shape returned by category filtering, where the upstream only
/// sends id, name and thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}
