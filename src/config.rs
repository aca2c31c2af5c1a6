use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub mealdb: MealDbConfig,
    #[serde(default)]
    pub nutrition: NutritionConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlannerConfig {
    /// Meals allowed per day before the planner refuses more. Absent means
    /// unlimited.
    #[serde(default)]
    pub day_capacity: Option<u8>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MealDbConfig {
    #[serde(default = "default_mealdb_base_url")]
    pub base_url: String,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: default_mealdb_base_url(),
        }
    }
}

fn default_mealdb_base_url() -> String {
    recipefinder_gateway::MEALDB_BASE_URL.to_string()
}

/// Credentials for the nutrition analysis API. Both keys empty disables the
/// nutrition panel rather than failing requests.
#[derive(Debug, Deserialize, Clone)]
pub struct NutritionConfig {
    #[serde(default = "default_nutrition_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub app_key: String,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            base_url: default_nutrition_base_url(),
            app_id: String::new(),
            app_key: String::new(),
        }
    }
}

fn default_nutrition_base_url() -> String {
    recipefinder_gateway::NUTRITION_BASE_URL.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (RECIPEFINDER__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:recipefinder.db")?
            .set_default("database.max_connections", 5)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (RECIPEFINDER__DATABASE__URL, etc.)
        builder = builder.add_source(
            Environment::with_prefix("RECIPEFINDER")
                .separator("__")
                .try_parsing(true),
        );

        // Also support legacy environment variables without prefix
        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(app_id) = env::var("EDAMAM_APP_ID") {
            builder = builder.set_override("nutrition.app_id", app_id)?;
        }
        if let Ok(app_key) = env::var("EDAMAM_APP_KEY") {
            builder = builder.set_override("nutrition.app_key", app_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.planner.day_capacity == Some(0) {
            return Err("Planner day_capacity must be greater than 0 when set".to_string());
        }
        Ok(())
    }
}
