use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::site as SiteApi;
use service::config::ApiVersion;

use log::*;

/// GET everything the home page shows in one call
#[utoipa::path(
    get,
    path = "/home",
    params(ApiVersion),
    responses(
        (status = 200, description = "Active banners and programs, upcoming events and featured startups", body = domain::site::HomePage),
        (status = 400, description = "Missing or unsupported API version"),
        (status = 503, description = "Service temporarily unavailable")
    )
)]
pub async fn home(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET home page");

    let home_page = SiteApi::home(app_state.db_conn_ref(), &app_state.config).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), home_page)))
}

/// GET the headline numbers for the about page
#[utoipa::path(
    get,
    path = "/about",
    params(ApiVersion),
    responses(
        (status = 200, description = "Counts of active programs, public startups, active mentors and events held", body = domain::site::AboutStats),
        (status = 400, description = "Missing or unsupported API version"),
        (status = 503, description = "Service temporarily unavailable")
    )
)]
pub async fn about(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET about page stats");

    let stats = SiteApi::about(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), stats)))
}
