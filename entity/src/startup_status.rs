use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Where a startup stands in its relationship with the incubator.
#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    EnumIter,
    Deserialize,
    Default,
    Serialize,
    DeriveActiveEnum,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "startup_status")]
pub enum StartupStatus {
    #[sea_orm(string_value = "active")]
    #[default]
    Active,
    #[sea_orm(string_value = "graduated")]
    Graduated,
    #[sea_orm(string_value = "inactive")]
    Inactive,
}

impl std::fmt::Display for StartupStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupStatus::Active => write!(fmt, "active"),
            StartupStatus::Graduated => write!(fmt, "graduated"),
            StartupStatus::Inactive => write!(fmt, "inactive"),
        }
    }
}
