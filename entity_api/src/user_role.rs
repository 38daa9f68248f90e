use super::error::Error;
use chrono::Utc;
use entity::roles::Role;
use entity::user_roles::{ActiveModel, Column, Entity, Model};
use entity::Id;
use log::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

pub async fn delete_by_user_id(db: &impl ConnectionTrait, user_id: Id) -> Result<(), Error> {
    Entity::delete_many()
        .filter(Condition::all().add(Column::UserId.eq(user_id)))
        .exec(db)
        .await?;
    Ok(())
}

/// Replaces a user's whole role set in one transaction. Duplicates in
/// `roles` are collapsed.
pub async fn replace_roles(
    db: &impl TransactionTrait,
    user_id: Id,
    roles: &[Role],
) -> Result<Vec<Model>, Error> {
    debug!("Replacing roles of User {user_id} with {roles:?}");

    let txn = db.begin().await?;
    delete_by_user_id(&txn, user_id).await?;

    let now = Utc::now();
    let mut inserted: Vec<Model> = Vec::with_capacity(roles.len());
    for role in roles {
        if inserted.iter().any(|user_role| user_role.role == *role) {
            continue;
        }
        let active_model = ActiveModel {
            user_id: Set(user_id),
            role: Set(*role),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };
        inserted.push(active_model.insert(&txn).await?);
    }

    txn.commit().await?;
    Ok(inserted)
}
