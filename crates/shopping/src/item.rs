use serde::{Deserialize, Serialize};
use validator::Validate;

/// Grocery aisle sections, in the order the list page renders them.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Produce,
    Protein,
    Dairy,
    Pantry,
    Bakery,
    Frozen,
    #[default]
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Produce => "Fresh Produce",
            Category::Protein => "Protein",
            Category::Dairy => "Dairy & Eggs",
            Category::Pantry => "Pantry",
            Category::Bakery => "Bakery",
            Category::Frozen => "Frozen",
            Category::Other => "Other Items",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Produce => "🥬",
            Category::Protein => "🥩",
            Category::Dairy => "🥛",
            Category::Pantry => "🫙",
            Category::Bakery => "🍞",
            Category::Frozen => "🧊",
            Category::Other => "📦",
        }
    }
}

/// One line on the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: String,
}

impl ShoppingItem {
    /// `"500 g Chicken Breast"` for the share text, fields that are blank
    /// simply dropped.
    pub fn line(&self) -> String {
        let mut parts = Vec::new();

        if !self.quantity.is_empty() {
            parts.push(self.quantity.as_str());
        }
        if !self.unit.is_empty() {
            parts.push(self.unit.as_str());
        }
        parts.push(self.name.as_str());

        parts.join(" ")
    }
}

/// The add/edit form payload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ItemInput {
    #[validate(length(min = 1, message = "Please enter an item name"))]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub notes: String,
}

impl ItemInput {
    pub(crate) fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            quantity: self.quantity.trim().to_owned(),
            unit: self.unit.trim().to_owned(),
            category: self.category,
            notes: self.notes.trim().to_owned(),
        }
    }
}

/// Progress numbers for the list header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub percent: u8,
    pub eta_minutes: usize,
}

pub(crate) fn stats_for(items: &[ShoppingItem]) -> ListStats {
    let total = items.len();
    let completed = items.iter().filter(|item| item.completed).count();
    let remaining = total - completed;
    let percent = if total > 0 {
        (completed as f64 / total as f64 * 100.0).round() as u8
    } else {
        0
    };

    ListStats {
        total,
        completed,
        remaining,
        percent,
        // The page estimates two minutes of shopping per open item.
        eta_minutes: remaining * 2,
    }
}
