use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A role a signed-in user may hold. A user may hold several at once.
#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Hash,
    EnumIter,
    Deserialize,
    Default,
    Serialize,
    DeriveActiveEnum,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "role")]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "startup")]
    #[default]
    Startup,
    #[sea_orm(string_value = "mentor")]
    Mentor,
    #[sea_orm(string_value = "investor")]
    Investor,
}

impl std::fmt::Display for Role {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(fmt, "admin"),
            Role::Startup => write!(fmt, "startup"),
            Role::Mentor => write!(fmt, "mentor"),
            Role::Investor => write!(fmt, "investor"),
        }
    }
}
