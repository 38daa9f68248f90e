//! Authorization rules for routes whose access depends on who is asking.
//!
//! Each submodule holds the middleware functions for one group of routes. They
//! are given to `axum::middleware::from_fn_with_state` in the router and run
//! after `require_auth`, so a signed-in user is always present.

pub(crate) mod users;

use crate::AppState;
use async_trait::async_trait;
use axum::{extract::Request, http::StatusCode, middleware::Next, response::IntoResponse};
use domain::{roles::Role, Id};
use log::*;

/// A single authorization rule: is the authenticated user allowed to proceed?
///
/// The rule receives the shared application state, the authenticated
/// [`domain::users::Model`] (with its role set loaded) and any [`Id`] arguments
/// taken from the request by the caller.
#[async_trait]
pub trait Check: Send + Sync {
    async fn eval(&self, app: &AppState, user: &domain::users::Model, args: Vec<Id>) -> bool;
}

/// Pairs a [`Check`] with the arguments it should be evaluated with.
pub(crate) struct Predicate {
    predicate: Box<dyn Check>,
    args: Vec<Id>,
}

impl Predicate {
    pub(crate) fn new<C: Check + 'static>(predicate: C, args: Vec<Id>) -> Self {
        Self {
            predicate: Box::new(predicate),
            args,
        }
    }

    pub(crate) async fn check(&self, app_state: &AppState, user: &domain::users::Model) -> bool {
        self.predicate
            .eval(app_state, user, self.args.clone())
            .await
    }
}

/// Evaluates `checks` in order and aborts with **403 FORBIDDEN** at the first
/// one that fails. When all pass the wrapped handler runs.
pub(crate) async fn authorize(
    app_state: &AppState,
    authenticated_user: domain::users::Model,
    request: Request,
    next: Next,
    checks: Vec<Predicate>,
) -> impl IntoResponse {
    for check in checks {
        if !check.check(app_state, &authenticated_user).await {
            debug!(
                "User {} refused access to {}",
                authenticated_user.id,
                request.uri().path()
            );
            return (StatusCode::FORBIDDEN, "FORBIDDEN").into_response();
        }
    }
    next.run(request).await
}

/// Passes when the first argument is the authenticated user's own id.
pub struct UserIsSelf;

#[async_trait]
impl Check for UserIsSelf {
    async fn eval(
        &self,
        _app_state: &AppState,
        authenticated_user: &domain::users::Model,
        args: Vec<Id>,
    ) -> bool {
        args.first()
            .is_some_and(|user_id| *user_id == authenticated_user.id)
    }
}

pub struct UserHasRole(pub Role);

#[async_trait]
impl Check for UserHasRole {
    async fn eval(
        &self,
        _app_state: &AppState,
        authenticated_user: &domain::users::Model,
        _args: Vec<Id>,
    ) -> bool {
        authenticated_user.has_role(self.0)
    }
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use chrono::Utc;
    use clap::Parser;
    use domain::{user_roles, users};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use service::config::Config;
    use std::sync::Arc;

    fn app_state() -> AppState {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        AppState::new(Config::parse_from(["incubator_platform_rs"]), &db)
    }

    fn mentor() -> users::Model {
        let now = Utc::now();
        let id = Id::new_v4();
        users::Model {
            id,
            email: "mentor@incubator.local".to_string(),
            full_name: "Maya Mentor".to_string(),
            password: String::new(),
            disabled: false,
            created_at: now.into(),
            updated_at: now.into(),
            roles: vec![user_roles::Model {
                id: Id::new_v4(),
                role: Role::Mentor,
                user_id: id,
                created_at: now.into(),
                updated_at: now.into(),
            }],
        }
    }

    #[tokio::test]
    async fn user_is_self_compares_the_first_argument() {
        let app_state = app_state();
        let user = mentor();

        assert!(UserIsSelf.eval(&app_state, &user, vec![user.id]).await);
        assert!(!UserIsSelf.eval(&app_state, &user, vec![Id::new_v4()]).await);
        assert!(!UserIsSelf.eval(&app_state, &user, vec![]).await);
    }

    #[tokio::test]
    async fn user_has_role_reads_the_loaded_role_set() {
        let app_state = app_state();
        let user = mentor();

        assert!(UserHasRole(Role::Mentor).eval(&app_state, &user, vec![]).await);
        assert!(!UserHasRole(Role::Admin).eval(&app_state, &user, vec![]).await);
    }
}
