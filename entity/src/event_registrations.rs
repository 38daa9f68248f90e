//! `SeaORM` Entity for event sign-ups. At most one row per (event, user),
//! enforced by a unique index.

use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::event_registrations::Model)]
#[sea_orm(schema_name = "incubator_platform", table_name = "event_registrations")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[serde(skip_deserializing)]
    pub event_id: Id,
    #[serde(skip_deserializing)]
    pub user_id: Id,
    /// Falls back to the account's name when blank
    #[serde(default)]
    pub full_name: String,
    /// Falls back to the account's email when blank
    #[serde(default)]
    pub email: String,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::events::Entity",
        from = "Column::EventId",
        to = "super::events::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Events,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_empty_body_deserializes_with_blank_contact_details() {
        let model: Model = serde_json::from_str("{}").unwrap();
        assert!(model.full_name.is_empty());
        assert!(model.email.is_empty());
    }

    #[test]
    fn server_owned_fields_are_ignored_in_the_body() {
        let event_id = Id::new_v4();
        let model: Model = serde_json::from_value(serde_json::json!({
            "event_id": event_id,
            "full_name": "Ada Founder",
        }))
        .unwrap();
        assert_eq!(model.event_id, Id::nil());
        assert_eq!(model.full_name, "Ada Founder");
        assert!(model.email.is_empty());
    }
}
