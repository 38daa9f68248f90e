use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::application as ApplicationApi;
use domain::Id;
use service::config::ApiVersion;

use log::*;

/// GET a user's own applications, newest first
#[utoipa::path(
    get,
    path = "/users/{user_id}/applications",
    params(
        ApiVersion,
        ("user_id" = Uuid, Path, description = "Id of the applicant's user account"),
    ),
    responses(
        (status = 200, description = "Successfully retrieved the user's Applications", body = [domain::applications::Model]),
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
    Path(user_id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Applications of User {user_id}");

    let applications = ApplicationApi::find_by_user_id(app_state.db_conn_ref(), user_id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), applications)))
}
