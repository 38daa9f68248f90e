use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The stage of support an incubation program offers.
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
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "program_category")]
pub enum ProgramCategory {
    #[sea_orm(string_value = "pre_incubation")]
    PreIncubation,
    #[sea_orm(string_value = "incubation")]
    #[default]
    Incubation,
    #[sea_orm(string_value = "accelerator")]
    Accelerator,
}

impl std::fmt::Display for ProgramCategory {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgramCategory::PreIncubation => write!(fmt, "pre_incubation"),
            ProgramCategory::Incubation => write!(fmt, "incubation"),
            ProgramCategory::Accelerator => write!(fmt, "accelerator"),
        }
    }
}
