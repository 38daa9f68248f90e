use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::startup::PublicParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::startup as StartupApi;
use service::config::ApiVersion;

use log::*;

/// GET the public startup portfolio
#[utoipa::path(
    get,
    path = "/startups",
    params(
        ApiVersion,
        ("sector" = Option<String>, Query, description = "Filter by sector, case-insensitive"),
        ("stage" = Option<String>, Query, description = "Filter by stage, case-insensitive")
    ),
    responses(
        (status = 200, description = "Successfully retrieved public Startups", body = [domain::startups::Model]),
        (status = 400, description = "Missing or unsupported API version"),
        (status = 503, description = "Service temporarily unavailable")
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<PublicParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET public Startups with {params:?}");

    let startups = StartupApi::find_public(
        app_state.db_conn_ref(),
        params.sector.as_deref(),
        params.stage.as_deref(),
    )
    .await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), startups)))
}

/// GET a public startup by its slug. Private startups are not found.
#[utoipa::path(
    get,
    path = "/startups/{slug}",
    params(
        ApiVersion,
        ("slug" = String, Path, description = "Startup slug to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a Startup", body = domain::startups::Model),
        (status = 404, description = "Startup not found"),
        (status = 503, description = "Service temporarily unavailable")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Startup by slug: {slug}");

    let startup = StartupApi::find_public_by_slug(app_state.db_conn_ref(), &slug).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), startup)))
}
