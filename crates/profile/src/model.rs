use recipefinder_nutrition::NutritionGoals;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Who the app belongs to. Purely cosmetic, shown in the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileInput {
    #[validate(length(min = 1, message = "Please enter your name"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryPreferences {
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default, rename = "glutenFree")]
    pub gluten_free: bool,
    #[serde(default, rename = "dairyFree")]
    pub dairy_free: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allergies {
    #[serde(default)]
    pub nuts: bool,
    #[serde(default)]
    pub shellfish: bool,
    #[serde(default)]
    pub eggs: bool,
    #[serde(default)]
    pub soy: bool,
}

/// Everything the profile page knows, bundled for the download button.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileExport {
    pub profile: UserProfile,
    #[serde(rename = "dietaryPreferences")]
    pub dietary_preferences: DietaryPreferences,
    pub allergies: Allergies,
    #[serde(rename = "nutritionalGoals")]
    pub nutritional_goals: NutritionGoals,
    #[serde(rename = "exportDate")]
    pub export_date: String,
}
