//! Constraint violations as a database driver reports them, for feeding to a
//! `MockDatabase`.

use sea_orm::sqlx::error::{DatabaseError, ErrorKind};
use sea_orm::{DbErr, RuntimeErr};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
struct ConstraintViolation {
    code: &'static str,
    message: &'static str,
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl StdError for ConstraintViolation {}

impl DatabaseError for ConstraintViolation {
    fn message(&self) -> &str {
        self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.code))
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        match self.code {
            "23505" => ErrorKind::UniqueViolation,
            "23503" => ErrorKind::ForeignKeyViolation,
            _ => ErrorKind::Other,
        }
    }
}

fn query_error(violation: ConstraintViolation) -> DbErr {
    DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(
        Box::new(violation),
    )))
}

/// SQLSTATE 23505, as raised by a unique index.
pub fn unique_violation() -> DbErr {
    query_error(ConstraintViolation {
        code: "23505",
        message: "duplicate key value violates unique constraint",
    })
}

/// SQLSTATE 23503, as raised by a restricting foreign key.
pub fn foreign_key_violation() -> DbErr {
    query_error(ConstraintViolation {
        code: "23503",
        message: "update or delete violates foreign key constraint",
    })
}
