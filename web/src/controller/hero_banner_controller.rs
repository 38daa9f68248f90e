use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::hero_banner as HeroBannerApi;
use service::config::ApiVersion;

use log::*;

/// GET the active hero banners in display order
#[utoipa::path(
    get,
    path = "/hero_banners",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved active Hero Banners", body = [domain::hero_banners::Model]),
        (status = 400, description = "Missing or unsupported API version"),
        (status = 503, description = "Service temporarily unavailable")
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET active Hero Banners");

    let hero_banners = HeroBannerApi::find_active(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), hero_banners)))
}
