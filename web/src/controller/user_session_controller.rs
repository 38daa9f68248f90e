use crate::controller::ApiResponse;
use crate::error::{Error as WebError, Result as WebResult};
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use axum::{http::StatusCode, response::IntoResponse, Form, Json};
use domain::error::{DomainErrorKind, EntityErrorKind, Error as DomainError, InternalErrorKind};
use domain::user::{self as UserApi, AuthSession, Credentials};
use domain::users;
use log::*;
use serde_json::{json, Value};
use service::config::ApiVersion;

/// The user fields the front end needs to pick its navigation.
fn session_user_json(user: &users::Model) -> Value {
    json!({
        "id": user.id,
        "email": user.email,
        "full_name": user.full_name,
        "roles": user.role_set(),
        "is_admin": user.is_admin(),
    })
}

fn unauthenticated(source: Option<Box<dyn std::error::Error + Send + Sync>>) -> WebError {
    WebError::from(DomainError {
        source,
        error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(
            EntityErrorKind::Unauthenticated,
        )),
    })
}

/// Logs the user into the platform and returns a new session cookie.
///
/// Successful login will return a session cookie with id, e.g.:
/// set-cookie: id=07bbbe54-bd35-425f-8e63-618a8d8612df; HttpOnly; SameSite=Strict; Path=/; Max-Age=86399
///
/// When the form carries a local `next` path it is echoed back as
/// `redirect_to` so the browser can return to the page that sent it to login.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = domain::user::Credentials, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Logs in and returns session authentication cookie"),
        (status = 401, description = "Unauthorized"),
        (status = 405, description = "Method not allowed"),
        (status = 503, description = "Service temporarily unavailable")
    )
)]
pub async fn login(
    mut auth_session: AuthSession,
    Form(mut creds): Form<Credentials>,
) -> WebResult<impl IntoResponse> {
    creds.email = creds.email.trim().to_lowercase();
    let redirect_to = UserApi::local_redirect(creds.next.as_deref());

    let user = match auth_session.authenticate(creds.clone()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!("Authentication failed, invalid user: {:?}", creds.email);
            return Err(unauthenticated(None));
        }
        Err(auth_error) => {
            warn!("Authentication failed with error: {auth_error:?}");
            return Err(unauthenticated(Some(Box::new(auth_error))));
        }
    };

    if let Err(login_error) = auth_session.login(&user).await {
        error!("Session login failed: {login_error:?}");
        return Err(WebError::from(DomainError {
            source: Some(Box::new(login_error)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                "Session login failed".to_string(),
            )),
        }));
    }

    let mut user_session_json = session_user_json(&user);
    user_session_json["redirect_to"] = json!(redirect_to);

    debug!("user_session_json: {user_session_json}");

    Ok(Json(ApiResponse::new(
        StatusCode::OK.into(),
        user_session_json,
    )))
}

/// Logs the user out of the platform by destroying their session.
#[utoipa::path(
    post,
    path = "/logout",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully logged out"),
        (status = 401, description = "Unauthorized"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn logout(
    CompareApiVersion(_v): CompareApiVersion,
    mut auth_session: AuthSession,
) -> impl IntoResponse {
    trace!("UserSessionController::logout()");
    match auth_session.logout().await {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => {
            error!("Logout failed: {e:?}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET the signed-in user and their role set
#[utoipa::path(
    get,
    path = "/session/user",
    params(ApiVersion),
    responses(
        (status = 200, description = "The signed-in user with their roles"),
        (status = 401, description = "Unauthorized"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
) -> impl IntoResponse {
    Json(ApiResponse::new(
        StatusCode::OK.into(),
        session_user_json(&user),
    ))
}
