use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl HealthStatus {
    fn up(status: &'static str) -> (StatusCode, Json<Self>) {
        (StatusCode::OK, Json(Self { status, reason: None }))
    }
}

/// GET /health
pub async fn health() -> (StatusCode, Json<HealthStatus>) {
    HealthStatus::up("ok")
}

/// GET /ready
///
/// 503 while the contact store cannot answer a trivial query.
pub async fn ready(State(pool): State<SqlitePool>) -> (StatusCode, Json<HealthStatus>) {
    if let Err(err) = sqlx::query("SELECT 1").execute(&pool).await {
        tracing::error!(error = %err, "Contact store unavailable");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthStatus {
                status: "not_ready",
                reason: Some("database_unavailable"),
            }),
        );
    }

    HealthStatus::up("ready")
}
