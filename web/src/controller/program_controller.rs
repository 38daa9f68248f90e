use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::program::PublicParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::program as ProgramApi;
use service::config::ApiVersion;

use log::*;

/// GET active programs, optionally narrowed to one category
#[utoipa::path(
    get,
    path = "/programs",
    params(
        ApiVersion,
        ("category" = Option<domain::program_category::ProgramCategory>, Query, description = "Filter by program category")
    ),
    responses(
        (status = 200, description = "Successfully retrieved active Programs", body = [domain::programs::Model]),
        (status = 400, description = "Missing or unsupported API version"),
        (status = 503, description = "Service temporarily unavailable")
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<PublicParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET active Programs with {params:?}");

    let programs = ProgramApi::find_active(app_state.db_conn_ref(), params.category).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), programs)))
}

/// GET an active program by its slug. Inactive programs are not found.
#[utoipa::path(
    get,
    path = "/programs/{slug}",
    params(
        ApiVersion,
        ("slug" = String, Path, description = "Program slug to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a Program", body = domain::programs::Model),
        (status = 404, description = "Program not found"),
        (status = 503, description = "Service temporarily unavailable")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Program by slug: {slug}");

    let program = ProgramApi::find_active_by_slug(app_state.db_conn_ref(), &slug).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), program)))
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use crate::test_support::{api_request, app, statements};
    use axum::http::StatusCode;
    use domain::programs;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn read_of_an_inactive_program_is_not_found() {
        // An inactive program never matches the active-only lookup
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<programs::Model>::new()])
                .into_connection(),
        );

        let request = api_request("GET", "/programs/winter-sprint", None, None);
        let response = app(&db).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let log = statements(db);
        assert!(log.contains(r#"\"programs\".\"is_active\" = $2"#), "{log}");
        assert!(log.contains("winter-sprint"));
    }
}
