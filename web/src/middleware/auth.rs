use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_login::AuthSession;
use log::*;
use url::form_urlencoded;

/// Returns 401 Unauthorized for requests without a signed-in user.
///
/// Browser navigations are sent to the home page instead, carrying the
/// attempted path in `redirect_to` so the login form can return there.
pub async fn require_auth(
    auth_session: AuthSession<domain::user::Backend>,
    request: Request,
    next: Next,
) -> Response {
    match auth_session.user {
        Some(_user) => next.run(request).await,
        None => reject(&request, StatusCode::UNAUTHORIZED),
    }
}

/// Gate for the admin console: the signed-in user's role set must contain
/// `admin`. Without a session this behaves like [`require_auth`]; with a
/// non-admin session API calls get 403 Forbidden.
pub async fn require_admin(
    auth_session: AuthSession<domain::user::Backend>,
    request: Request,
    next: Next,
) -> Response {
    match auth_session.user {
        Some(user) if user.is_admin() => next.run(request).await,
        Some(user) => {
            warn!(
                "User {} without the admin role requested {}",
                user.id,
                request.uri().path()
            );
            reject(&request, StatusCode::FORBIDDEN)
        }
        None => reject(&request, StatusCode::UNAUTHORIZED),
    }
}

fn reject(request: &Request, status: StatusCode) -> Response {
    if wants_html(request) {
        let attempted = request
            .uri()
            .path_and_query()
            .map(|path_and_query| path_and_query.as_str())
            .unwrap_or("/");
        Redirect::to(&login_redirect(attempted)).into_response()
    } else {
        let message = status.canonical_reason().unwrap_or_default();
        (status, message).into_response()
    }
}

fn wants_html(request: &Request) -> bool {
    request
        .headers()
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// The home page URL that brings the visitor back to `attempted` after login.
fn login_redirect(attempted: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("redirect_to", attempted)
        .finish();
    format!("/?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_redirect_encodes_the_attempted_path() {
        assert_eq!(
            login_redirect("/admin/programs?sort_by=name"),
            "/?redirect_to=%2Fadmin%2Fprograms%3Fsort_by%3Dname"
        );
    }

    #[test]
    fn wants_html_reads_the_accept_header() {
        let browser = Request::builder()
            .header(header::ACCEPT, "text/html,application/xhtml+xml")
            .body(axum::body::Body::empty())
            .unwrap();
        let api = Request::builder()
            .header(header::ACCEPT, "application/json")
            .body(axum::body::Body::empty())
            .unwrap();
        assert!(wants_html(&browser));
        assert!(!wants_html(&api));
    }
}
