use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::mentor::PublicParams;
use crate::{AppState, Error};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::mentor as MentorApi;
use service::config::ApiVersion;

use log::*;

/// GET the public mentor directory
#[utoipa::path(
    get,
    path = "/mentors",
    params(
        ApiVersion,
        ("expertise" = Option<String>, Query, description = "Only mentors listing this expertise, compared case-insensitively")
    ),
    responses(
        (status = 200, description = "Successfully retrieved active Mentors", body = [domain::mentors::Model]),
        (status = 400, description = "Missing or unsupported API version"),
        (status = 503, description = "Service temporarily unavailable")
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<PublicParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET active Mentors with {params:?}");

    let mentors =
        MentorApi::find_public(app_state.db_conn_ref(), params.expertise.as_deref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), mentors)))
}
