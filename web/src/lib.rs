use axum::http::{header, HeaderName, HeaderValue, Method};
use axum_login::AuthManagerLayerBuilder;
use log::*;
use std::error::Error as StdError;
use std::sync::Arc;
use time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_sessions::{session_store::ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

pub use self::error::{Error, Result};
pub use service::AppState;

mod controller;
mod error;
mod extractors;
mod middleware;
mod params;
mod protect;
pub mod router;
#[cfg(all(test, feature = "mock"))]
mod test_support;

/// Table holding the server-side half of every login session.
const SESSION_TABLE: &str = "authorized_sessions";

pub async fn init_server(
    app_state: AppState,
) -> core::result::Result<(), Box<dyn StdError + Send + Sync>> {
    let config = app_state.config.clone();
    let db = Arc::clone(&app_state.database_connection);

    // Sessions share the application's connection pool
    let session_store = PostgresStore::new(db.get_postgres_connection_pool().clone())
        .with_schema_name(service::DB_SCHEMA)?
        .with_table_name(SESSION_TABLE)?;
    session_store.migrate().await?;

    let deletion_task = tokio::task::spawn(
        session_store
            .clone()
            .continuously_delete_expired(tokio::time::Duration::from_secs(60)),
    );

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.is_production())
        .with_expiry(Expiry::OnInactivity(Duration::seconds(
            config.backend_session_expiry_seconds as i64,
        )));

    let backend = domain::user::Backend::new(&db);
    let auth_layer = AuthManagerLayerBuilder::new(backend, session_layer).build();

    let cors_layer = CorsLayer::new()
        .allow_origin(allowed_origins(&config.allowed_origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-version"),
        ]);

    let host = config.interface.as_deref().unwrap_or("127.0.0.1");
    let server_url = format!("{host}:{}", config.port);
    let listener = TcpListener::bind(&server_url).await?;

    info!(
        "Server starting... listening for connections on http://{server_url} ({} environment)",
        config.runtime_env()
    );

    let app = router::define_routes(app_state)
        .layer(auth_layer)
        .layer(cors_layer);

    let served = axum::serve(listener, app.into_make_service()).await;
    deletion_task.abort();
    Ok(served?)
}

fn allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring malformed CORS origin: {origin}");
                None
            }
        })
        .collect()
}
