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
use domain::mentor as MentorApi;
use domain::{mentors::Model, Id};
use service::config::ApiVersion;

use log::*;

/// GET the mentor profile belonging to a user
#[utoipa::path(
    get,
    path = "/users/{user_id}/mentor_profile",
    params(
        ApiVersion,
        ("user_id" = Uuid, Path, description = "Id of the mentor's user account"),
    ),
    responses(
        (status = 200, description = "Successfully retrieved the Mentor profile", body = domain::mentors::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "No Mentor profile yet"),
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
    debug!("GET Mentor profile of User {user_id}");

    let mentor = MentorApi::find_by_user_id(app_state.db_conn_ref(), user_id)
        .await?
        .ok_or_else(DomainError::not_found)?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), mentor)))
}

/// PUT create or update the signed-in mentor's profile. New profiles stay
/// hidden from the directory until an admin shows them.
#[utoipa::path(
    put,
    path = "/users/{user_id}/mentor_profile",
    params(
        ApiVersion,
        ("user_id" = Uuid, Path, description = "Id of the mentor's user account"),
    ),
    request_body = domain::mentors::Model,
    responses(
        (status = 200, description = "Successfully saved the Mentor profile", body = domain::mentors::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
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
    Json(mentor_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Mentor profile of User {user_id}");

    let mentor = MentorApi::upsert_for_user(app_state.db_conn_ref(), &user, mentor_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), mentor)))
}
