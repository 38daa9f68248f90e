use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::{AppState, Error};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::application as ApplicationApi;
use domain::applications::Model;
use service::config::ApiVersion;

use log::*;

/// POST apply to a program as the current user
#[utoipa::path(
    post,
    path = "/applications",
    params(ApiVersion),
    request_body = domain::applications::Model,
    responses(
        (status = 201, description = "Successfully submitted the Application", body = domain::applications::Model),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Program not found"),
        (status = 422, description = "Unprocessable Entity, including programs not accepting applications"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Json(application_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!(
        "POST Application from User {} to Program {}",
        user.id, application_model.program_id
    );

    let application =
        ApplicationApi::submit(app_state.db_conn_ref(), &user, application_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), application)),
    ))
}
