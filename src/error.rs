use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::email::NotifyError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Notification error: {0}")]
    NotificationError(#[from] NotifyError),
}

impl From<portfolio_contact::Error> for AppError {
    fn from(err: portfolio_contact::Error) -> Self {
        match err {
            portfolio_contact::Error::MissingFields(_) => AppError::MissingFields,
            portfolio_contact::Error::Database(e) => AppError::DatabaseError(e),
        }
    }
}

/// Body shared by every contact endpoint response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::MissingFields => (StatusCode::BAD_REQUEST, "All fields are required"),
            AppError::DatabaseError(_) | AppError::NotificationError(_) => {
                tracing::error!("Contact form error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status_code, Json(MessageResponse { message })).into_response()
    }
}
