use std::collections::HashSet;

use recipefinder_db::Storage;
use recipefinder_recipe::Ingredient;
use recipefinder_shared::new_id;
use strum::VariantArray;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use validator::Validate;

use crate::{Category, ItemInput, ListStats, ShoppingItem, categorize, stats_for};

pub const SHOPPING_KEY: &str = "shoppingList";

/// The shopping list, persisted as one JSON array of items.
#[derive(Clone)]
pub struct ShoppingStore {
    storage: Storage,
}

impl ShoppingStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    async fn load(&self) -> anyhow::Result<Vec<ShoppingItem>> {
        self.storage.read_json(SHOPPING_KEY).await
    }

    async fn save(&self, items: &[ShoppingItem]) -> anyhow::Result<()> {
        self.storage.write_json(SHOPPING_KEY, &items).await
    }

    fn timestamp() -> anyhow::Result<String> {
        Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
    }

    pub async fn list(&self) -> anyhow::Result<Vec<ShoppingItem>> {
        self.load().await
    }

    /// Items grouped into aisle sections, every section present even when
    /// empty, in render order.
    pub async fn by_category(&self) -> anyhow::Result<Vec<(Category, Vec<ShoppingItem>)>> {
        let items = self.load().await?;

        Ok(Category::VARIANTS
            .iter()
            .map(|category| {
                let section: Vec<ShoppingItem> = items
                    .iter()
                    .filter(|item| item.category == *category)
                    .cloned()
                    .collect();

                (*category, section)
            })
            .collect())
    }

    pub async fn stats(&self) -> anyhow::Result<ListStats> {
        Ok(stats_for(&self.load().await?))
    }

    /// The raw items array as pretty JSON, for the download button.
    pub async fn export(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.load().await?)?)
    }

    pub async fn add(&self, input: ItemInput) -> recipefinder_shared::Result<ShoppingItem> {
        let input = input.trimmed();
        input.validate()?;

        let mut items = self.load().await?;
        let item = ShoppingItem {
            id: new_id(),
            name: input.name,
            quantity: input.quantity,
            unit: input.unit,
            category: input.category,
            notes: input.notes,
            completed: false,
            created_at: Self::timestamp()?,
        };

        items.push(item.clone());
        self.save(&items).await?;

        Ok(item)
    }

    /// Rewrites an item from the edit form. Completion state survives the
    /// edit; an unknown id is ignored.
    pub async fn update(&self, id: &str, input: ItemInput) -> recipefinder_shared::Result<()> {
        let input = input.trimmed();
        input.validate()?;

        let mut items = self.load().await?;

        if let Some(item) = items.iter_mut().find(|item| item.id == id) {
            item.name = input.name;
            item.quantity = input.quantity;
            item.unit = input.unit;
            item.category = input.category;
            item.notes = input.notes;
            item.created_at = Self::timestamp()?;

            self.save(&items).await?;
        }

        Ok(())
    }

    /// Flips completion, answering the new state, or `None` for an unknown
    /// id.
    pub async fn toggle(&self, id: &str) -> recipefinder_shared::Result<Option<bool>> {
        let mut items = self.load().await?;

        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        item.completed = !item.completed;
        let completed = item.completed;
        self.save(&items).await?;

        Ok(Some(completed))
    }

    pub async fn remove(&self, id: &str) -> recipefinder_shared::Result<()> {
        let mut items = self.load().await?;
        items.retain(|item| item.id != id);
        self.save(&items).await?;

        Ok(())
    }

    pub async fn clear_completed(&self) -> recipefinder_shared::Result<usize> {
        let mut items = self.load().await?;
        let before = items.len();
        items.retain(|item| !item.completed);
        let removed = before - items.len();
        self.save(&items).await?;

        Ok(removed)
    }

    pub async fn clear(&self) -> recipefinder_shared::Result<()> {
        self.save(&[]).await?;

        Ok(())
    }

    /// Appends scanned recipe ingredients as open items.
    ///
    /// Names already on the list (case-insensitive) are skipped, as are
    /// duplicates within the batch. Answers how many items were added.
    pub async fn import_ingredients(
        &self,
        ingredients: &[Ingredient],
        note: &str,
    ) -> recipefinder_shared::Result<usize> {
        let mut items = self.load().await?;
        let mut seen: HashSet<String> = items.iter().map(|item| item.name.to_lowercase()).collect();
        let mut added = 0;

        for ingredient in ingredients {
            if !seen.insert(ingredient.name.to_lowercase()) {
                continue;
            }

            items.push(ShoppingItem {
                id: new_id(),
                name: ingredient.name.clone(),
                quantity: ingredient.measure.clone().unwrap_or_default(),
                unit: String::new(),
                category: categorize(&ingredient.name),
                notes: note.to_owned(),
                completed: false,
                created_at: Self::timestamp()?,
            });
            added += 1;
        }

        if added > 0 {
            self.save(&items).await?;
        }

        Ok(added)
    }

    /// Plain-text rendition of the list for sharing, grouped by section.
    pub async fn share_text(&self) -> anyhow::Result<String> {
        let items = self.load().await?;
        let mut text = String::from("🛒 My Shopping List\n");

        for category in Category::VARIANTS {
            let section: Vec<&ShoppingItem> = items
                .iter()
                .filter(|item| item.category == *category)
                .collect();
            if section.is_empty() {
                continue;
            }

            text.push_str(&format!("\n{} {}:\n", category.emoji(), category.label()));
            for item in section {
                let mark = if item.completed { "x" } else { " " };
                text.push_str(&format!("[{mark}] {}\n", item.line()));
            }
        }

        Ok(text)
    }
}
