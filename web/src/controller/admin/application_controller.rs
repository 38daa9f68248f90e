use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::application::{IndexParams, StatusParams};
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::application as ApplicationApi;
use domain::Id;
use service::config::ApiVersion;

use log::*;

/// GET the application review queue
#[utoipa::path(
    get,
    path = "/admin/applications",
    params(
        ApiVersion,
        ("status" = Option<domain::application_status::ApplicationStatus>, Query, description = "Only applications in this status"),
        ("program_id" = Option<Uuid>, Query, description = "Only applications to this program"),
        ("sort_by" = Option<crate::params::application::SortField>, Query, description = "Sort by field. Valid values: 'created_at', 'startup_name', 'status'.", example = "created_at"),
        ("sort_order" = Option<crate::params::sort::SortOrder>, Query, description = "Sort order. Valid values: 'asc' (ascending), 'desc' (descending).", example = "desc")
    ),
    responses(
        (status = 200, description = "Successfully retrieved Applications", body = [domain::applications::Model]),
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
    debug!("GET Applications with {params:?}");

    let applications = ApplicationApi::find_by(app_state.db_conn_ref(), params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), applications)))
}

#[utoipa::path(
    get,
    path = "/admin/applications/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Application id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved an Application", body = domain::applications::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Application not found"),
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
    debug!("GET Application by id: {id}");

    let application = ApplicationApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), application)))
}

/// PUT a review decision on an Application
#[utoipa::path(
    put,
    path = "/admin/applications/{id}/status",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Application to review"),
    ),
    request_body = crate::params::application::StatusParams,
    responses(
        (status = 200, description = "Successfully Updated Application", body = domain::applications::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Application not found"),
        (status = 422, description = "The status change is not allowed"),
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
    debug!("PUT Application {id} status: {}", params.status);

    let application =
        ApplicationApi::update_status(app_state.db_conn_ref(), id, params.status).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), application)))
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use crate::test_support::{
        api_request, app, json_body, login, signed_in_mock, statements, user_with_roles,
    };
    use axum::http::StatusCode;
    use chrono::Utc;
    use domain::application_status::ApplicationStatus;
    use domain::program_category::ProgramCategory;
    use domain::roles::Role;
    use domain::{applications, Id};
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn approved_application() -> applications::Model {
        let now = Utc::now();
        applications::Model {
            id: Id::new_v4(),
            user_id: Id::new_v4(),
            program_id: Id::new_v4(),
            startup_name: "Soil Sense".to_owned(),
            program_type: ProgramCategory::Accelerator,
            answers: json!({ "problem": "Smallholders overwater" }),
            status: ApplicationStatus::Approved,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn an_approved_application_cannot_go_back_to_pending() {
        let (admin, roles) = user_with_roles(&[Role::Admin]);
        let application = approved_application();
        let db = Arc::new(
            signed_in_mock(&admin, &roles)
                .append_query_results([[application.clone()]])
                .into_connection(),
        );
        let app = app(&db);
        let cookie = login(&app).await;

        let request = api_request(
            "PUT",
            &format!("/admin/applications/{}/status", application.id),
            Some(&cookie),
            Some(json!({ "status": "pending" })),
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"], "status cannot change from approved to pending");
        let log = statements(db);
        assert!(!log.contains("UPDATE"), "unexpected write: {log}");
    }
}
