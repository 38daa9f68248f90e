use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Review state of a program application.
///
/// `Approved` and `Rejected` are terminal: once an application reaches either
/// one it can no longer move. `UnderReview` may be sent back to `Pending`.
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
#[sea_orm(
    rs_type = "String",
    db_type = "Enum",
    enum_name = "application_status"
)]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    #[sea_orm(string_value = "under_review")]
    UnderReview,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl ApplicationStatus {
    /// Approved and rejected applications are closed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Whether an application in this status may move to `next`.
    /// Staying in the same status is always allowed.
    pub fn can_transition_to(&self, next: Self) -> bool {
        if *self == next {
            return true;
        }
        if self.is_terminal() {
            return false;
        }
        match self {
            Self::Pending => matches!(
                next,
                Self::UnderReview | Self::Approved | Self::Rejected
            ),
            _ => matches!(next, Self::Pending | Self::Approved | Self::Rejected),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(fmt, "pending"),
            ApplicationStatus::UnderReview => write!(fmt, "under_review"),
            ApplicationStatus::Approved => write!(fmt, "approved"),
            ApplicationStatus::Rejected => write!(fmt, "rejected"),
        }
    }
}
