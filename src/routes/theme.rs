use axum::{
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::{CookieJar, cookie::Cookie};

use crate::template::THEME_COOKIE;

/// POST /theme/toggle - flip the color scheme cookie, then return to the
/// page the form was submitted from.
pub async fn toggle(jar: CookieJar, headers: HeaderMap) -> impl IntoResponse {
    let next = match jar.get(THEME_COOKIE).map(|cookie| cookie.value()) {
        Some("dark") => "light",
        _ => "dark",
    };

    let back = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("/")
        .to_owned();

    let cookie = Cookie::build((THEME_COOKIE, next))
        .path("/")
        .max_age(time::Duration::days(365))
        .build();

    (jar.add(cookie), Redirect::to(&back))
}
