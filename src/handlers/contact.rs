use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};
use tracing::error;
use validator::Validate;

use crate::{
    mail::mails::send_contact_notification,
    models::contact::{ContactSubmissionResponse, CreateContactDto},
    AppState, Result,
};

pub fn contact_handler() -> Router {
    Router::new().route("/", post(submit_contact).get(get_contact_submissions))
}

async fn submit_contact(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(contact): Json<CreateContactDto>,
) -> Result<impl IntoResponse> {
    contact.validate()?;

    let submission = app_state
        .contact_service
        .create_contact_submission(contact)
        .await?;

    if let Some(support_email) = app_state.config.support_email.clone() {
        let submission = submission.clone();
        tokio::spawn(async move {
            if let Err(err) = send_contact_notification(&support_email, &submission).await {
                error!("Failed to send contact notification: {:?}", err);
            }
        });
    }

    Ok((
        StatusCode::CREATED,
        Json(ContactSubmissionResponse {
            message: "Contact submission received successfully".to_string(),
            id: submission.id,
        }),
    ))
}

async fn get_contact_submissions(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let submissions = app_state.contact_service.get_contact_submissions().await?;

    Ok((StatusCode::OK, Json(submissions)))
}
