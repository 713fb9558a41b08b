use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::email::Notifier;

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub contact_command: portfolio_contact::Command,
    pub notifier: Notifier,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool, notifier: Notifier) -> Self {
        Self {
            contact_command: portfolio_contact::Command(pool.clone()),
            notifier,
            pool,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/api/contact/", post(contact::action))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

/// Browser frontends are served from another origin
pub fn cors_layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    if allowed_origins.is_empty() {
        return None;
    }

    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
