use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domain::error::{
    DomainErrorKind, EntityErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind,
};

extern crate log;
use log::*;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// List of possible StatusCode variants https://docs.rs/http/latest/http/status/struct.StatusCode.html#associatedconstant.UNPROCESSABLE_ENTITY
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.0.error_kind {
            DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
                InternalErrorKind::Entity(entity_error_kind) => match entity_error_kind {
                    EntityErrorKind::NotFound => {
                        (StatusCode::NOT_FOUND, "NOT FOUND").into_response()
                    }
                    EntityErrorKind::Invalid => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE ENTITY").into_response()
                    }
                    EntityErrorKind::Conflict => {
                        (StatusCode::CONFLICT, "CONFLICT").into_response()
                    }
                    EntityErrorKind::Unauthenticated => {
                        (StatusCode::UNAUTHORIZED, "UNAUTHORIZED").into_response()
                    }
                    EntityErrorKind::DbTransaction | EntityErrorKind::Other(_) => {
                        error!("Entity error: {:?}", self.0.source);
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
                    }
                },
                // The message names the rejected field, so the admin UI can show it as-is
                InternalErrorKind::Validation(message) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "status_code": StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
                        "error": message,
                    })),
                )
                    .into_response(),
                InternalErrorKind::Config | InternalErrorKind::Other(_) => {
                    error!("Internal error: {:?}", self.0.source);
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
                }
            },
            DomainErrorKind::External(external_error_kind) => match external_error_kind {
                ExternalErrorKind::Network => {
                    (StatusCode::BAD_GATEWAY, "BAD GATEWAY").into_response()
                }
                ExternalErrorKind::Other(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
                }
            },
        }
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    fn status_of(domain_error: DomainError) -> StatusCode {
        Error::from(domain_error).into_response().status()
    }

    #[test]
    fn entity_error_kinds_map_to_http_statuses() {
        assert_eq!(status_of(DomainError::not_found()), StatusCode::NOT_FOUND);
        assert_eq!(status_of(DomainError::conflict()), StatusCode::CONFLICT);
        assert_eq!(
            status_of(DomainError::entity(EntityErrorKind::Invalid)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(DomainError::entity(EntityErrorKind::Unauthenticated)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(DomainError::entity(EntityErrorKind::DbTransaction)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn external_network_errors_are_bad_gateway() {
        let error = DomainError {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
        };
        assert_eq!(status_of(error), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn validation_errors_carry_their_message() {
        let response = Error::from(DomainError::validation("name: must not be blank")).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "name: must not be blank");
        assert_eq!(body["status_code"], 422);
    }
}
