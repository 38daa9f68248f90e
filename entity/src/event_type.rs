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
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "event_type")]
pub enum EventType {
    #[sea_orm(string_value = "workshop")]
    #[default]
    Workshop,
    #[sea_orm(string_value = "webinar")]
    Webinar,
    #[sea_orm(string_value = "networking")]
    Networking,
    #[sea_orm(string_value = "demo_day")]
    DemoDay,
    #[sea_orm(string_value = "hackathon")]
    Hackathon,
    #[sea_orm(string_value = "other")]
    Other,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Workshop => write!(fmt, "workshop"),
            EventType::Webinar => write!(fmt, "webinar"),
            EventType::Networking => write!(fmt, "networking"),
            EventType::DemoDay => write!(fmt, "demo_day"),
            EventType::Hackathon => write!(fmt, "hackathon"),
            EventType::Other => write!(fmt, "other"),
        }
    }
}
