use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::contact_submission::{IndexParams, StatusParams};
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::contact_submission as ContactSubmissionApi;
use domain::Id;
use service::config::ApiVersion;

use log::*;

/// GET the contact inbox
#[utoipa::path(
    get,
    path = "/admin/contact_submissions",
    params(
        ApiVersion,
        ("status" = Option<domain::contact_status::ContactStatus>, Query, description = "Only messages in this status"),
        ("sort_by" = Option<crate::params::contact_submission::SortField>, Query, description = "Sort by field. Valid values: 'created_at', 'subject'.", example = "created_at"),
        ("sort_order" = Option<crate::params::sort::SortOrder>, Query, description = "Sort order. Valid values: 'asc' (ascending), 'desc' (descending).", example = "desc")
    ),
    responses(
        (status = 200, description = "Successfully retrieved Contact Submissions", body = [domain::contact_submissions::Model]),
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
    debug!("GET Contact Submissions with {params:?}");

    let submissions = ContactSubmissionApi::find_by(app_state.db_conn_ref(), params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), submissions)))
}

/// PUT mark a Contact Submission as read, replied or archived
#[utoipa::path(
    put,
    path = "/admin/contact_submissions/{id}/status",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Contact Submission to update"),
    ),
    request_body = crate::params::contact_submission::StatusParams,
    responses(
        (status = 200, description = "Successfully Updated Contact Submission", body = domain::contact_submissions::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Contact Submission not found"),
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
    debug!("PUT Contact Submission {id} status: {}", params.status);

    let submission =
        ContactSubmissionApi::update_status(app_state.db_conn_ref(), id, params.status).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), submission)))
}
