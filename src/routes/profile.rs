use axum::Form;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Redirect};
use recipefinder_nutrition::NutritionGoals;
use recipefinder_profile::{Allergies, DietaryPreferences, ProfileInput, UserProfile};
use time::OffsetDateTime;

use crate::routes::AppState;
use crate::template::{Template, ToastSuccessTemplate, filters};
use crate::{try_page_response, try_response};

#[derive(askama::Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub current_path: String,
    pub profile: UserProfile,
    pub preferences: DietaryPreferences,
    pub allergies: Allergies,
    pub goals: NutritionGoals,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let profile = try_page_response!(app.profile.profile(), template);
    let preferences = try_page_response!(app.profile.preferences(), template);
    let allergies = try_page_response!(app.profile.allergies(), template);
    let goals = try_page_response!(app.nutrition.goals(), template);

    template
        .render(ProfileTemplate {
            current_path: "profile".to_owned(),
            profile,
            preferences,
            allergies,
            goals,
        })
        .into_response()
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ProfileInput>,
) -> impl IntoResponse {
    try_response!(app.profile.save_profile(input), template);

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Profile saved",
            description: None,
        })
        .into_response()
}

/// POST /profile/preferences - checkboxes submit only when ticked, the
/// missing ones default to off.
pub async fn preferences(
    template: Template,
    State(app): State<AppState>,
    Form(preferences): Form<DietaryPreferences>,
) -> impl IntoResponse {
    try_response!(app.profile.set_preferences(preferences), template);

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Preferences saved",
            description: None,
        })
        .into_response()
}

pub async fn allergies(
    template: Template,
    State(app): State<AppState>,
    Form(allergies): Form<Allergies>,
) -> impl IntoResponse {
    try_response!(app.profile.set_allergies(allergies), template);

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Allergies saved",
            description: None,
        })
        .into_response()
}

pub async fn goals(
    template: Template,
    State(app): State<AppState>,
    Form(goals): Form<NutritionGoals>,
) -> impl IntoResponse {
    try_response!(app.nutrition.set_goals(goals), template);

    template
        .render(ToastSuccessTemplate {
            original: None,
            message: "Goals updated",
            description: None,
        })
        .into_response()
}

pub async fn export(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let export = try_page_response!(app.profile.export(), template);
    let json = try_page_response!(sync: serde_json::to_string_pretty(&export), template);
    let disposition = format!(
        "attachment; filename=\"recipe-finder-data-{}.json\"",
        OffsetDateTime::now_utc().date()
    );

    (
        [
            (header::CONTENT_TYPE, "application/json".to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        json,
    )
        .into_response()
}

/// POST /profile/delete - wipe everything and land back on the dashboard.
pub async fn delete(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    try_response!(app.profile.delete_all(), template);

    Redirect::to("/").into_response()
}
