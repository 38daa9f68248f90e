use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::contact_submission as ContactSubmissionApi;
use domain::contact_submissions::Model;
use service::config::ApiVersion;

use log::*;

/// POST a message from the public contact form
#[utoipa::path(
    post,
    path = "/contact_submissions",
    params(ApiVersion),
    request_body = domain::contact_submissions::Model,
    responses(
        (status = 201, description = "Successfully received the message", body = domain::contact_submissions::Model),
        (status = 422, description = "Unprocessable Entity"),
        (status = 503, description = "Service temporarily unavailable")
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(submission_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Contact Submission with subject: {}", submission_model.subject);

    let submission = ContactSubmissionApi::submit(app_state.db_conn_ref(), submission_model).await?;

    info!("New Contact Submission: {}", submission.id);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), submission)),
    ))
}
