use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::startup::{StatusParams, VisibilityParams};
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::startup as StartupApi;
use domain::Id;
use service::config::ApiVersion;

use log::*;

/// GET every Startup, public or private
#[utoipa::path(
    get,
    path = "/admin/startups",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Startups", body = [domain::startups::Model]),
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
    debug!("GET all Startups");

    let startups = StartupApi::find_all(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), startups)))
}

/// PUT publish or feature a Startup
#[utoipa::path(
    put,
    path = "/admin/startups/{id}/visibility",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Startup to update"),
    ),
    request_body = crate::params::startup::VisibilityParams,
    responses(
        (status = 200, description = "Successfully Updated Startup", body = domain::startups::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Startup not found"),
        (status = 422, description = "No visibility flag given"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update_visibility(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<VisibilityParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Startup {id} visibility: {params:?}");

    let startup = StartupApi::update_visibility(app_state.db_conn_ref(), id, params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), startup)))
}

#[utoipa::path(
    put,
    path = "/admin/startups/{id}/status",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Startup to update"),
    ),
    request_body = crate::params::startup::StatusParams,
    responses(
        (status = 200, description = "Successfully Updated Startup", body = domain::startups::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Startup not found"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update_status(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<StatusParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Startup {id} status: {}", params.status);

    let startup = StartupApi::update_status(app_state.db_conn_ref(), id, params.status).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), startup)))
}
