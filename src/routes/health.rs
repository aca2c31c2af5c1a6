use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;

/// GET /health - process liveness.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - readiness, answered from a round-trip on the read pool.
pub async fn ready(State(pool): State<SqlitePool>) -> impl IntoResponse {
    if let Err(err) = sqlx::query("SELECT 1").fetch_one(&pool).await {
        tracing::error!(err = %err, "Readiness probe could not reach the database");

        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "not_ready", "reason": "database_unavailable"})),
        );
    }

    (StatusCode::OK, Json(json!({"status": "ready"})))
}
