use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::error::Error as DomainError;
use domain::startup as StartupApi;
use domain::{startups::Model, Id};
use service::config::ApiVersion;

use log::*;

/// GET the startup owned by a user
#[utoipa::path(
    get,
    path = "/users/{user_id}/startup",
    params(
        ApiVersion,
        ("user_id" = Uuid, Path, description = "Id of the founder's user account"),
    ),
    responses(
        (status = 200, description = "Successfully retrieved the Startup", body = domain::startups::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "No Startup yet"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(user_id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Startup of User {user_id}");

    let startup = StartupApi::find_by_owner_id(app_state.db_conn_ref(), user_id)
        .await?
        .ok_or_else(DomainError::not_found)?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), startup)))
}

/// PUT create or update the signed-in founder's startup. Publishing,
/// featuring and status stay with the admin console.
#[utoipa::path(
    put,
    path = "/users/{user_id}/startup",
    params(
        ApiVersion,
        ("user_id" = Uuid, Path, description = "Id of the founder's user account"),
    ),
    request_body = domain::startups::Model,
    responses(
        (status = 200, description = "Successfully saved the Startup", body = domain::startups::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Another startup already uses this name"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(user_id): Path<Id>,
    Json(startup_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Startup of User {user_id}");

    let startup =
        StartupApi::upsert_for_owner(app_state.db_conn_ref(), &user, startup_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), startup)))
}
