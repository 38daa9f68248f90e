use crate::event_type::EventType;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::events::Model)]
#[sea_orm(schema_name = "incubator_platform", table_name = "events")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    pub title: String,
    pub event_type: EventType,
    #[schema(value_type = String, format = Date)]
    pub date: Date,
    #[schema(value_type = Option<String>, example = "18:30:00")]
    pub time: Option<Time>,
    pub location: Option<String>,
    pub online_url: Option<String>,
    pub banner_url: Option<String>,
    pub description: String,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_registrations::Entity")]
    EventRegistrations,
}

impl Related<super::event_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventRegistrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
