use crate::protect::{authorize, Predicate, UserHasRole, UserIsSelf};
use crate::{extractors::authenticated_user::AuthenticatedUser, AppState};
use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::IntoResponse,
};
use domain::{roles::Role, Id};

/// Checks that the authenticated user is the user named by `user_id`.
/// Intended to be given to axum::middleware::from_fn_with_state in the router
pub(crate) async fn owner(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(user_id): Path<Id>,
    request: Request,
    next: Next,
) -> impl IntoResponse {
    let checks = vec![Predicate::new(UserIsSelf, vec![user_id])];
    authorize(&app_state, user, request, next, checks).await
}

/// Like [`owner`], and the user must also hold the mentor role.
pub(crate) async fn mentor_owner(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(user_id): Path<Id>,
    request: Request,
    next: Next,
) -> impl IntoResponse {
    let checks = vec![
        Predicate::new(UserIsSelf, vec![user_id]),
        Predicate::new(UserHasRole(Role::Mentor), vec![]),
    ];
    authorize(&app_state, user, request, next, checks).await
}

/// Like [`owner`], and the user must also hold the startup role.
pub(crate) async fn startup_owner(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(user_id): Path<Id>,
    request: Request,
    next: Next,
) -> impl IntoResponse {
    let checks = vec![
        Predicate::new(UserIsSelf, vec![user_id]),
        Predicate::new(UserHasRole(Role::Startup), vec![]),
    ];
    authorize(&app_state, user, request, next, checks).await
}
