use crate::{
    controller::health_check_controller,
    middleware::auth::{require_admin, require_auth},
    params, protect, AppState,
};
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::controller::{
    admin, application_controller, contact_submission_controller, event_controller,
    hero_banner_controller, mentor_controller, program_controller, site_controller,
    startup_controller, user, user_controller, user_session_controller,
};

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Incubator Platform API"
        ),
        paths(
            health_check_controller::health_check,
            site_controller::home,
            site_controller::about,
            program_controller::index,
            program_controller::read,
            event_controller::index,
            event_controller::read,
            event_controller::register,
            event_controller::cancel,
            mentor_controller::index,
            startup_controller::index,
            startup_controller::read,
            hero_banner_controller::index,
            contact_submission_controller::create,
            application_controller::create,
            user_controller::sign_up,
            user_controller::update,
            user_session_controller::login,
            user_session_controller::logout,
            user_session_controller::read,
            user::mentor_profile_controller::read,
            user::mentor_profile_controller::update,
            user::startup_controller::read,
            user::startup_controller::update,
            user::application_controller::index,
            admin::dashboard_controller::read,
            admin::program_controller::index,
            admin::program_controller::create,
            admin::program_controller::read,
            admin::program_controller::update,
            admin::program_controller::delete,
            admin::event_controller::index,
            admin::event_controller::create,
            admin::event_controller::read,
            admin::event_controller::update,
            admin::event_controller::delete,
            admin::event_controller::registrations,
            admin::mentor_controller::index,
            admin::mentor_controller::update_visibility,
            admin::startup_controller::index,
            admin::startup_controller::update_visibility,
            admin::startup_controller::update_status,
            admin::application_controller::index,
            admin::application_controller::read,
            admin::application_controller::update_status,
            admin::user_controller::index,
            admin::user_controller::read,
            admin::user_controller::update_roles,
            admin::user_controller::update_disabled,
            admin::user_controller::delete,
            admin::media_asset_controller::index,
            admin::media_asset_controller::create,
            admin::media_asset_controller::delete,
            admin::hero_banner_controller::index,
            admin::hero_banner_controller::create,
            admin::hero_banner_controller::update,
            admin::hero_banner_controller::delete,
            admin::contact_submission_controller::index,
            admin::contact_submission_controller::update_status,
        ),
        components(
            schemas(
                domain::applications::Model,
                domain::contact_submissions::Model,
                domain::event_registrations::Model,
                domain::events::Model,
                domain::hero_banners::Model,
                domain::media_assets::Model,
                domain::mentors::Model,
                domain::programs::Model,
                domain::startups::Model,
                domain::users::Model,
                domain::user::Credentials,
                domain::site::HomePage,
                domain::site::AboutStats,
                domain::dashboard::Dashboard,
                domain::application_status::ApplicationStatus,
                domain::contact_status::ContactStatus,
                domain::event_type::EventType,
                domain::program_category::ProgramCategory,
                domain::roles::Role,
                domain::startup_status::StartupStatus,
                params::application::StatusParams,
                params::contact_submission::StatusParams,
                params::mentor::VisibilityParams,
                params::startup::StatusParams,
                params::startup::VisibilityParams,
                params::user::DisabledParams,
                params::user::RolesParams,
                params::user::UpdateParams,
            )
        ),
        modifiers(&SecurityAddon),
        tags(
            (name = "incubator_platform", description = "Incubator marketing site and admin console API")
        )
    )]
struct ApiDoc;

struct SecurityAddon;

// Defines our cookie session based authentication requirement for gaining access to our
// API endpoints for OpenAPI.
impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "id",
                    "Session id value returned from successful login via Set-Cookie header",
                ))),
            )
        }
    }
}

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(public_routes(app_state.clone()))
        .merge(member_routes(app_state.clone()))
        .merge(user_routes(app_state.clone()))
        .merge(admin_routes(app_state.clone()))
        .merge(user_session_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi2.json", ApiDoc::openapi()).path("/rapidoc"))
        .fallback_service(static_routes())
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

/// The marketing site: readable by anyone, writes limited to the contact form.
fn public_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/home", get(site_controller::home))
        .route("/about", get(site_controller::about))
        .route("/programs", get(program_controller::index))
        .route("/programs/{slug}", get(program_controller::read))
        .route("/events", get(event_controller::index))
        .route("/events/{id}", get(event_controller::read))
        .route("/mentors", get(mentor_controller::index))
        .route("/startups", get(startup_controller::index))
        .route("/startups/{slug}", get(startup_controller::read))
        .route("/hero_banners", get(hero_banner_controller::index))
        .route(
            "/contact_submissions",
            post(contact_submission_controller::create),
        )
        .with_state(app_state)
}

/// Actions open to any signed-in user.
fn member_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/applications", post(application_controller::create))
        .route(
            "/events/{id}/registrations",
            post(event_controller::register).delete(event_controller::cancel),
        )
        .route("/logout", post(user_session_controller::logout))
        .route("/session/user", get(user_session_controller::read))
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn user_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(
            // PUT /users/{user_id}
            Router::new()
                .route("/users/{user_id}", put(user_controller::update))
                .route(
                    "/users/{user_id}/applications",
                    get(user::application_controller::index),
                )
                .route_layer(from_fn_with_state(
                    app_state.clone(),
                    protect::users::owner,
                )),
        )
        .merge(
            // GET/PUT /users/{user_id}/mentor_profile
            Router::new()
                .route(
                    "/users/{user_id}/mentor_profile",
                    get(user::mentor_profile_controller::read)
                        .put(user::mentor_profile_controller::update),
                )
                .route_layer(from_fn_with_state(
                    app_state.clone(),
                    protect::users::mentor_owner,
                )),
        )
        .merge(
            // GET/PUT /users/{user_id}/startup
            Router::new()
                .route(
                    "/users/{user_id}/startup",
                    get(user::startup_controller::read).put(user::startup_controller::update),
                )
                .route_layer(from_fn_with_state(
                    app_state.clone(),
                    protect::users::startup_owner,
                )),
        )
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

/// The back-office console. Only users holding the admin role get through.
fn admin_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/admin/dashboard", get(admin::dashboard_controller::read))
        .route(
            "/admin/programs",
            get(admin::program_controller::index).post(admin::program_controller::create),
        )
        .route(
            "/admin/programs/{id}",
            get(admin::program_controller::read)
                .put(admin::program_controller::update)
                .delete(admin::program_controller::delete),
        )
        .route(
            "/admin/events",
            get(admin::event_controller::index).post(admin::event_controller::create),
        )
        .route(
            "/admin/events/{id}",
            get(admin::event_controller::read)
                .put(admin::event_controller::update)
                .delete(admin::event_controller::delete),
        )
        .route(
            "/admin/events/{id}/registrations",
            get(admin::event_controller::registrations),
        )
        .route("/admin/mentors", get(admin::mentor_controller::index))
        .route(
            "/admin/mentors/{id}/visibility",
            put(admin::mentor_controller::update_visibility),
        )
        .route("/admin/startups", get(admin::startup_controller::index))
        .route(
            "/admin/startups/{id}/visibility",
            put(admin::startup_controller::update_visibility),
        )
        .route(
            "/admin/startups/{id}/status",
            put(admin::startup_controller::update_status),
        )
        .route(
            "/admin/applications",
            get(admin::application_controller::index),
        )
        .route(
            "/admin/applications/{id}",
            get(admin::application_controller::read),
        )
        .route(
            "/admin/applications/{id}/status",
            put(admin::application_controller::update_status),
        )
        .route("/admin/users", get(admin::user_controller::index))
        .route(
            "/admin/users/{id}",
            get(admin::user_controller::read).delete(admin::user_controller::delete),
        )
        .route(
            "/admin/users/{id}/roles",
            put(admin::user_controller::update_roles),
        )
        .route(
            "/admin/users/{id}/disabled",
            put(admin::user_controller::update_disabled),
        )
        .route(
            "/admin/media",
            get(admin::media_asset_controller::index).post(admin::media_asset_controller::create),
        )
        .route(
            "/admin/media/{id}",
            delete(admin::media_asset_controller::delete),
        )
        .route(
            "/admin/hero_banners",
            get(admin::hero_banner_controller::index).post(admin::hero_banner_controller::create),
        )
        .route(
            "/admin/hero_banners/{id}",
            put(admin::hero_banner_controller::update).delete(admin::hero_banner_controller::delete),
        )
        .route(
            "/admin/contact_submissions",
            get(admin::contact_submission_controller::index),
        )
        .route(
            "/admin/contact_submissions/{id}/status",
            put(admin::contact_submission_controller::update_status),
        )
        .route_layer(from_fn(require_admin))
        .with_state(app_state)
}

fn user_session_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(user_session_controller::login))
        .route("/signup", post(user_controller::sign_up))
        .with_state(app_state)
}

// Serves the built front end for every path the API does not claim
pub fn static_routes() -> Router {
    Router::new().fallback_service(ServeDir::new("./public"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_public_and_admin_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/home",
            "/programs/{slug}",
            "/events/{id}/registrations",
            "/admin/programs/{id}",
            "/admin/media",
            "/users/{user_id}/startup",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing");
        }
    }

    #[test]
    fn openapi_document_declares_cookie_auth() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components are generated");
        assert!(components.security_schemes.contains_key("cookie_auth"));
    }
}
