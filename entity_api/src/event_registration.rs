use super::error::Error;
use chrono::Utc;
use entity::event_registrations::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder};

use log::*;

/// Signs `user_id` up for `event_id`. A second sign-up for the same pair is
/// rejected by the unique index and surfaces as `RecordAlreadyExists`.
pub async fn create(
    db: &DatabaseConnection,
    event_id: Id,
    user_id: Id,
    registration_model: Model,
) -> Result<Model, Error> {
    debug!("New Event Registration for event {event_id} by user {user_id}");

    let now = Utc::now();

    let registration_active_model: ActiveModel = ActiveModel {
        event_id: Set(event_id),
        user_id: Set(user_id),
        full_name: Set(registration_model.full_name),
        email: Set(registration_model.email),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(registration_active_model.insert(db).await?)
}

/// Cancels a sign-up. Returns whether a registration existed.
pub async fn delete_by_event_and_user(
    db: &DatabaseConnection,
    event_id: Id,
    user_id: Id,
) -> Result<bool, Error> {
    let result = Entity::delete_many()
        .filter(Column::EventId.eq(event_id))
        .filter(Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}

/// Registrations for one event, in sign-up order.
pub async fn find_by_event_id(db: &DatabaseConnection, event_id: Id) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::EventId.eq(event_id))
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?)
}
