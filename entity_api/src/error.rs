//! Error types for entity API
use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

use sea_orm::error::{DbErr, RuntimeErr};
use sea_orm::sqlx::{self, error::ErrorKind};

/// Errors while executing operations related to entities.
/// The intent is to categorize errors into two major types:
///  * Errors related to data. Ex DbError::RecordNotFound
///  * Errors related to interactions with the database itself. Ex DbError::Conn
#[derive(Debug, PartialEq)]
pub struct Error {
    // Underlying error emitted from seaORM internals
    pub source: Option<DbErr>,
    // Enum representing which category of error
    pub error_kind: EntityApiErrorKind,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum EntityApiErrorKind {
    // Invalid search term
    InvalidQueryTerm,
    // Record not found
    RecordNotFound,
    // Record not updated
    RecordNotUpdated,
    // Record not authenticated
    RecordUnauthenticated,
    // A unique index rejected the write, ex. a second registration for the same event
    RecordAlreadyExists,
    // A foreign key blocked the write, ex. deleting a program that still has applications
    RecordInUse,
    // Errors related to interactions with the database itself. Ex DbError::Conn
    SystemError,
    // Validation error
    ValidationError,
    // Other errors
    Other,
}

impl Error {
    pub fn not_found() -> Self {
        Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Entity API Error: {self:?}")
    }
}

impl StdError for Error {}

/// The kind for a write the database refused on a constraint, if it was one.
fn constraint_violation(err: &DbErr) -> Option<EntityApiErrorKind> {
    let (DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
    | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))) = err
    else {
        return None;
    };
    match db_err.kind() {
        ErrorKind::UniqueViolation => Some(EntityApiErrorKind::RecordAlreadyExists),
        ErrorKind::ForeignKeyViolation => Some(EntityApiErrorKind::RecordInUse),
        _ => None,
    }
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        if let Some(error_kind) = constraint_violation(&err) {
            return Error {
                source: Some(err),
                error_kind,
            };
        }

        let error_kind = match err {
            DbErr::RecordNotFound(_) => EntityApiErrorKind::RecordNotFound,
            DbErr::RecordNotUpdated => EntityApiErrorKind::RecordNotUpdated,
            _ => EntityApiErrorKind::SystemError,
        };

        Error {
            source: Some(err),
            error_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found_kind() {
        let err = Error::from(DbErr::RecordNotFound("programs".to_string()));
        assert_eq!(err.error_kind, EntityApiErrorKind::RecordNotFound);
    }

    #[cfg(feature = "mock")]
    #[test]
    fn unique_index_violations_map_to_already_exists() {
        let err = Error::from(crate::db_errors::unique_violation());
        assert_eq!(err.error_kind, EntityApiErrorKind::RecordAlreadyExists);
    }

    #[cfg(feature = "mock")]
    #[test]
    fn foreign_key_violations_map_to_in_use() {
        let err = Error::from(crate::db_errors::foreign_key_violation());
        assert_eq!(err.error_kind, EntityApiErrorKind::RecordInUse);
    }

    #[test]
    fn connection_errors_map_to_system_error() {
        let err = Error::from(DbErr::Custom("connection reset".to_string()));
        assert_eq!(err.error_kind, EntityApiErrorKind::SystemError);
        assert!(err.source.is_some());
    }
}
