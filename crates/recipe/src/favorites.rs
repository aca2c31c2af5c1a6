use recipefinder_db::Storage;

use crate::Recipe;

pub const FAVORITES_KEY: &str = "rf_favorites";

/// The saved-recipes collection, newest first.
#[derive(Clone)]
pub struct FavoritesStore {
    storage: Storage,
}

impl FavoritesStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    async fn load(&self) -> anyhow::Result<Vec<Recipe>> {
        self.storage.read_json(FAVORITES_KEY).await
    }

    async fn save(&self, favorites: &[Recipe]) -> anyhow::Result<()> {
        self.storage.write_json(FAVORITES_KEY, &favorites).await
    }

    pub async fn list(&self) -> anyhow::Result<Vec<Recipe>> {
        self.load().await
    }

    pub async fn count(&self) -> anyhow::Result<usize> {
        Ok(self.load().await?.len())
    }

    pub async fn contains(&self, id: &str) -> anyhow::Result<bool> {
        Ok(self.load().await?.iter().any(|recipe| recipe.id == id))
    }

    pub async fn find(&self, id: &str) -> anyhow::Result<Option<Recipe>> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .find(|recipe| recipe.id == id))
    }

    /// Adds the recipe when absent, removes it when present.
    ///
    /// New favorites go to the front so the list reads most recent first.
    /// Returns whether the recipe is a favorite after the flip.
    pub async fn toggle(&self, recipe: &Recipe) -> recipefinder_shared::Result<bool> {
        let mut favorites = self.load().await?;

        let saved = match favorites.iter().position(|entry| entry.id == recipe.id) {
            Some(position) => {
                favorites.remove(position);
                false
            }
            None => {
                favorites.insert(0, recipe.clone());
                true
            }
        };

        self.save(&favorites).await?;

        Ok(saved)
    }
}
