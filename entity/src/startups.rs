use crate::startup_status::StartupStatus;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::startups::Model)]
#[sea_orm(schema_name = "incubator_platform", table_name = "startups")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[serde(skip_deserializing)]
    pub owner_id: Option<Id>,
    pub name: String,
    #[serde(skip_deserializing)]
    #[sea_orm(unique)]
    pub slug: String,
    pub sector: String,
    pub stage: String,
    pub description: String,
    pub team_size: Option<i32>,
    pub traction: Option<String>,
    // Visibility and status are only changed through the admin console.
    #[serde(skip_deserializing)]
    pub is_public: bool,
    #[serde(skip_deserializing)]
    pub is_featured: bool,
    #[serde(skip_deserializing)]
    pub status: StartupStatus,
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
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
