//! Session and mock-database fixtures shared by the router, middleware and
//! controller tests.
use crate::AppState;
use axum::{
    body::{to_bytes, Body},
    http::{Request, Response, StatusCode},
    Router,
};
use axum_login::{
    tower_sessions::{Expiry, MemoryStore, SessionManagerLayer},
    AuthManagerLayerBuilder,
};
use chrono::Utc;
use domain::{roles::Role, user_roles, users, Id};
use password_auth::generate_hash;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::Value;
use service::config::{ApiVersion, Config};
use std::sync::Arc;
use time::Duration;
use tower::ServiceExt;

pub(crate) const EMAIL: &str = "grace@incubator.local";
pub(crate) const PASSWORD: &str = "password2";

pub(crate) fn test_config() -> Config {
    use clap::Parser;
    Config::parse_from(["incubator_platform_rs"])
}

pub(crate) fn user_with_roles(roles: &[Role]) -> (users::Model, Vec<user_roles::Model>) {
    let now = Utc::now();
    let user = users::Model {
        id: Id::new_v4(),
        email: EMAIL.to_string(),
        full_name: "Grace Hopper".to_string(),
        password: generate_hash(PASSWORD),
        disabled: false,
        created_at: now.into(),
        updated_at: now.into(),
        roles: vec![],
    };
    let roles = roles
        .iter()
        .map(|role| user_roles::Model {
            id: Id::new_v4(),
            role: *role,
            user_id: user.id,
            created_at: now.into(),
            updated_at: now.into(),
        })
        .collect();
    (user, roles)
}

/// Mock rows for a login followed by one authenticated request: the
/// credential lookup and the session user load, each joined with roles.
/// Rows for the request's own queries may be appended after these.
pub(crate) fn signed_in_mock(user: &users::Model, roles: &[user_roles::Model]) -> MockDatabase {
    let rows = || -> Vec<(users::Model, Option<user_roles::Model>)> {
        if roles.is_empty() {
            vec![(user.clone(), None)]
        } else {
            roles
                .iter()
                .map(|role| (user.clone(), Some(role.clone())))
                .collect()
        }
    };
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([rows()])
        .append_query_results([rows()])
}

pub(crate) fn signed_in_db(user: &users::Model, roles: &[user_roles::Model]) -> DatabaseConnection {
    signed_in_mock(user, roles).into_connection()
}

/// The whole application router over `db`, behind the session layer.
pub(crate) fn app(db: &Arc<DatabaseConnection>) -> Router {
    let app_state = AppState::new(test_config(), db);
    with_sessions(crate::router::define_routes(app_state), db)
}

/// A versioned API request, signed in when `cookie` is given.
pub(crate) fn api_request(
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    json: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .uri(uri)
        .method(method)
        .header(ApiVersion::field_name(), ApiVersion::default_version());
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    match json {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub(crate) async fn json_body(response: Response<Body>) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// The statements `db` ran, once every router clone holding it is dropped.
pub(crate) fn statements(db: Arc<DatabaseConnection>) -> String {
    let db = Arc::try_unwrap(db)
        .ok()
        .expect("router released the connection");
    format!("{:?}", db.into_transaction_log())
}

/// Wraps `router` in an in-memory session layer and the login backend for `db`.
pub(crate) fn with_sessions<S>(router: Router<S>, db: &Arc<DatabaseConnection>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(1)));
    let auth_layer =
        AuthManagerLayerBuilder::new(domain::user::Backend::new(db), session_layer).build();
    router.layer(auth_layer)
}

/// Logs in through `/login` and returns the session cookie.
pub(crate) async fn login(app: &Router) -> String {
    let login_request = Request::builder()
        .uri("/login")
        .method("POST")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(format!("email={EMAIL}&password={PASSWORD}")))
        .unwrap();
    let login_response = app.clone().oneshot(login_request).await.unwrap();
    assert_eq!(login_response.status(), StatusCode::OK);
    login_response
        .headers()
        .get("set-cookie")
        .and_then(|c| c.to_str().ok())
        .expect("Login should return session cookie")
        .to_string()
}
