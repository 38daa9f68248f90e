use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::user::{DisabledParams, RolesParams};
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::user as UserApi;
use domain::Id;
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/admin/users",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Users", body = [domain::users::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Users");

    let users = UserApi::find_all(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), users)))
}

#[utoipa::path(
    get,
    path = "/admin/users/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "User id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a User", body = domain::users::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET User by id: {id}");

    let user = UserApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), user)))
}

/// PUT a User's complete set of roles
#[utoipa::path(
    put,
    path = "/admin/users/{id}/roles",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the User whose roles to replace"),
    ),
    request_body = crate::params::user::RolesParams,
    responses(
        (status = 200, description = "Successfully replaced the User's roles", body = domain::users::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found"),
        (status = 422, description = "An admin tried to drop their own admin role"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update_roles(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<RolesParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT User {id} roles: {:?}", params.roles);

    let updated = UserApi::replace_roles(app_state.db_conn_ref(), &user, id, params.roles).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), updated)))
}

/// PUT whether a User's account is disabled. Disabled accounts cannot sign in
/// and lose any open session.
#[utoipa::path(
    put,
    path = "/admin/users/{id}/disabled",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the User to disable or re-enable"),
    ),
    request_body = crate::params::user::DisabledParams,
    responses(
        (status = 200, description = "Successfully updated the User", body = domain::users::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found"),
        (status = 422, description = "An admin tried to disable their own account"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update_disabled(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<DisabledParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT User {id} disabled: {}", params.disabled);

    let updated =
        UserApi::set_disabled(app_state.db_conn_ref(), &user, id, params.disabled).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), updated)))
}

#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the User to delete"),
    ),
    responses(
        (status = 200, description = "Successfully deleted the User"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found"),
        (status = 422, description = "An admin tried to delete their own account"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn delete(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    info!("DELETE User by id: {id}");

    UserApi::delete(app_state.db_conn_ref(), &user, id).await?;

    Ok(Json(ApiResponse::<()>::no_content(
        StatusCode::NO_CONTENT.into(),
    )))
}
