use crate::application_status::ApplicationStatus;
use crate::program_category::ProgramCategory;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::applications::Model)]
#[sea_orm(schema_name = "incubator_platform", table_name = "applications")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[serde(skip_deserializing)]
    pub user_id: Id,
    #[schema(value_type = String, format = Uuid)]
    pub program_id: Id,
    pub startup_name: String,
    /// Copied from the program's category when the application is submitted
    #[serde(skip_deserializing)]
    pub program_type: ProgramCategory,
    /// Free-form answers to the program's application questions
    #[schema(value_type = Object)]
    pub answers: Json,
    #[serde(skip_deserializing)]
    pub status: ApplicationStatus,
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
        belongs_to = "super::programs::Entity",
        from = "Column::ProgramId",
        to = "super::programs::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Programs,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::programs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Programs.def()
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
    use sea_orm::sea_query::ForeignKeyAction;

    #[test]
    fn programs_with_applications_cannot_be_deleted() {
        assert_eq!(
            Relation::Programs.def().on_delete,
            Some(ForeignKeyAction::Restrict)
        );
        assert_eq!(
            Relation::Users.def().on_delete,
            Some(ForeignKeyAction::Cascade)
        );
    }
}
