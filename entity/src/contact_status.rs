use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "contact_status")]
pub enum ContactStatus {
    #[sea_orm(string_value = "new")]
    #[default]
    New,
    #[sea_orm(string_value = "read")]
    Read,
    #[sea_orm(string_value = "archived")]
    Archived,
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactStatus::New => write!(fmt, "new"),
            ContactStatus::Read => write!(fmt, "read"),
            ContactStatus::Archived => write!(fmt, "archived"),
        }
    }
}
