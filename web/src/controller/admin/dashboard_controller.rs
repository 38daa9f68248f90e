use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::dashboard as DashboardApi;
use service::config::ApiVersion;

use log::*;

/// GET the counts shown on the admin landing page
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully computed the dashboard", body = domain::dashboard::Dashboard),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET admin dashboard");

    let dashboard = DashboardApi::summary(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), dashboard)))
}
