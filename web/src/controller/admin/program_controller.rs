use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::program::IndexParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::program as ProgramApi;
use domain::{programs::Model, Id};
use service::config::ApiVersion;

use log::*;

/// GET every Program, active or not
#[utoipa::path(
    get,
    path = "/admin/programs",
    params(
        ApiVersion,
        ("sort_by" = Option<crate::params::program::SortField>, Query, description = "Sort by field. Valid values: 'name', 'created_at', 'updated_at'.", example = "name"),
        ("sort_order" = Option<crate::params::sort::SortOrder>, Query, description = "Sort order. Valid values: 'asc' (ascending), 'desc' (descending).", example = "asc")
    ),
    responses(
        (status = 200, description = "Successfully retrieved all Programs", body = [domain::programs::Model]),
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
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Programs with {params:?}");

    let programs = ProgramApi::find_by(app_state.db_conn_ref(), params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), programs)))
}

/// POST create a new Program
#[utoipa::path(
    post,
    path = "/admin/programs",
    params(ApiVersion),
    request_body = domain::programs::Model,
    responses(
        (status = 201, description = "Successfully Created a New Program", body = domain::programs::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "A Program with this name already exists"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(program_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Program from: {program_model:?}");

    let program = ProgramApi::create(app_state.db_conn_ref(), program_model).await?;

    debug!("New Program: {program:?}");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), program)),
    ))
}

/// GET a particular Program specified by its id.
#[utoipa::path(
    get,
    path = "/admin/programs/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Program id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a Program", body = domain::programs::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Program not found"),
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
    debug!("GET Program by id: {id}");

    let program = ProgramApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), program)))
}

#[utoipa::path(
    put,
    path = "/admin/programs/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Program to update"),
    ),
    request_body = domain::programs::Model,
    responses(
        (status = 200, description = "Successfully Updated Program", body = domain::programs::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Program not found"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(program_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Program with id: {id}");

    let program = ProgramApi::update(app_state.db_conn_ref(), id, program_model).await?;

    debug!("Updated Program: {program:?}");

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), program)))
}

#[utoipa::path(
    delete,
    path = "/admin/programs/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Program to delete"),
    ),
    responses(
        (status = 200, description = "Successfully deleted the Program"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Program not found"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn delete(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    info!("DELETE Program by id: {id}");

    ProgramApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::<()>::no_content(
        StatusCode::NO_CONTENT.into(),
    )))
}
