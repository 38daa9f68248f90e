//! `SeaORM` Entity for the users table. A user's role set lives in
//! `user_roles` and is loaded alongside the user into [`Model::roles`].

use crate::roles::Role;
use crate::Id;
use axum_login::AuthUser;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::users::Model)] // OpenAPI schema
#[sea_orm(schema_name = "incubator_platform", table_name = "users")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[sea_orm(unique, indexed)]
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub password: String,
    /// Disabled accounts cannot sign in. Toggled by admins only.
    #[serde(skip_deserializing)]
    pub disabled: bool,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub created_at: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub updated_at: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[sea_orm(ignore)]
    pub roles: Vec<super::user_roles::Model>,
}

impl Model {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|user_role| user_role.role == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn role_set(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = Vec::with_capacity(self.roles.len());
        for user_role in &self.roles {
            if !roles.contains(&user_role.role) {
                roles.push(user_role.role);
            }
        }
        roles
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_roles::Entity")]
    UserRoles,
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
    #[sea_orm(has_many = "super::event_registrations::Entity")]
    EventRegistrations,
}

impl Related<super::user_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl Related<super::event_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventRegistrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl AuthUser for Model {
    type Id = Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    // Changing the password invalidates every existing session for the user.
    fn session_auth_hash(&self) -> &[u8] {
        self.password.as_bytes()
    }
}
