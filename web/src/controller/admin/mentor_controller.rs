use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::mentor::VisibilityParams;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::mentor as MentorApi;
use domain::Id;
use service::config::ApiVersion;

use log::*;

/// GET every Mentor, shown or hidden
#[utoipa::path(
    get,
    path = "/admin/mentors",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Mentors", body = [domain::mentors::Model]),
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
    debug!("GET all Mentors");

    let mentors = MentorApi::find_all(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), mentors)))
}

/// PUT show or hide a Mentor in the public directory
#[utoipa::path(
    put,
    path = "/admin/mentors/{id}/visibility",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Mentor to update"),
    ),
    request_body = crate::params::mentor::VisibilityParams,
    responses(
        (status = 200, description = "Successfully Updated Mentor", body = domain::mentors::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Mentor not found"),
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
    debug!("PUT Mentor {id} visibility: {params:?}");

    let mentor = MentorApi::update_visibility(app_state.db_conn_ref(), id, params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), mentor)))
}
