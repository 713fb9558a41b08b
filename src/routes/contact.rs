use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header},
};
use portfolio_contact::SubmitFormInput;

use crate::{
    error::{AppError, MessageResponse},
    routes::AppState,
};

/// Contact form body, read as JSON or as an urlencoded form
///
/// Any body that cannot be read into the four fields is rejected as missing
/// fields.
pub struct ContactBody(pub SubmitFormInput);

impl<S: Send + Sync> FromRequest<S> for ContactBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        let input = if is_form {
            Form::<SubmitFormInput>::from_request(req, state)
                .await
                .map(|Form(input)| input)
                .map_err(|rejection| rejection.to_string())
        } else {
            Json::<SubmitFormInput>::from_request(req, state)
                .await
                .map(|Json(input)| input)
                .map_err(|rejection| rejection.to_string())
        };

        match input {
            Ok(input) => Ok(Self(input)),
            Err(error) => {
                tracing::debug!(%error, "Rejected contact form body");
                Err(AppError::MissingFields)
            }
        }
    }
}

/// POST /api/contact/
///
/// Stores the submission, logs its summary and hands it to the notifier.
pub async fn action(
    State(app_state): State<AppState>,
    ContactBody(input): ContactBody,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let contact = app_state.contact_command.submit_form(input).await?;

    tracing::info!("{}", contact.summary());

    app_state.notifier.notify(&contact).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Message sent successfully",
        }),
    ))
}
