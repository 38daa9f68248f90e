use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::user::UpdateParams;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::user as UserApi;
use domain::{users, Id};
use service::config::ApiVersion;

use log::*;

/// POST create an account. New accounts hold the `startup` role.
#[utoipa::path(
    post,
    path = "/signup",
    request_body = domain::users::Model,
    responses(
        (status = 201, description = "Successfully created the account", body = domain::users::Model),
        (status = 409, description = "An account with this email already exists"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 503, description = "Service temporarily unavailable")
    )
)]
pub async fn sign_up(
    State(app_state): State<AppState>,
    Json(user_model): Json<users::Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Sign up a new account");

    let user = UserApi::sign_up(app_state.db_conn_ref(), user_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), user)),
    ))
}

/// PUT update the signed-in user's own name and email
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    params(
        ApiVersion,
        ("user_id" = Uuid, Path, description = "Id of the user to update"),
    ),
    request_body = crate::params::user::UpdateParams,
    responses(
        (status = 200, description = "Successfully updated the User", body = domain::users::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Email already in use"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(user_id): Path<Id>,
    Json(params): Json<UpdateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update User {user_id}");

    let user =
        UserApi::update_profile(app_state.db_conn_ref(), user_id, params.full_name, params.email)
            .await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), user)))
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use crate::test_support::{api_request, app, statements};
    use axum::http::StatusCode;
    use domain::{db_errors, user_roles, users};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn sign_up_body() -> serde_json::Value {
        json!({
            "email": "Ada@SoilSense.io",
            "full_name": "Ada Founder",
            "password": "long-enough-secret"
        })
    }

    #[tokio::test]
    async fn sign_up_losing_a_race_for_the_email_is_a_conflict() {
        // The lookup finds nothing; the unique index catches the duplicate
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<(users::Model, Option<user_roles::Model>)>::new()])
                .append_query_errors([db_errors::unique_violation()])
                .into_connection(),
        );

        let request = api_request("POST", "/signup", None, Some(sign_up_body()));
        let response = app(&db).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(statements(db).contains("ada@soilsense.io"));
    }
}
