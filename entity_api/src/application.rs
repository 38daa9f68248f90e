use super::error::Error;
use chrono::Utc;
use entity::application_status::ApplicationStatus;
use entity::applications::{ActiveModel, Column, Entity, Model};
use entity::program_category::ProgramCategory;
use entity::Id;
use sea_orm::{entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder, TryIntoModel};

use log::*;

/// Stores a new application in the `Pending` status. `program_type` is the
/// category of the program applied to at submission time.
pub async fn create(
    db: &DatabaseConnection,
    application_model: Model,
    user_id: Id,
    program_type: ProgramCategory,
) -> Result<Model, Error> {
    debug!("New Application Model to be inserted: {application_model:?}");

    let now = Utc::now();

    let application_active_model: ActiveModel = ActiveModel {
        user_id: Set(user_id),
        program_id: Set(application_model.program_id),
        startup_name: Set(application_model.startup_name),
        program_type: Set(program_type),
        answers: Set(application_model.answers),
        status: Set(ApplicationStatus::Pending),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(application_active_model.insert(db).await?)
}

pub async fn update_status(
    db: &DatabaseConnection,
    id: Id,
    status: ApplicationStatus,
) -> Result<Model, Error> {
    let application = find_by_id(db, id).await?;
    debug!(
        "Changing status of Application {id} from {} to {status}",
        application.status
    );

    let mut active_model: ActiveModel = application.into();
    active_model.status = Set(status);
    active_model.updated_at = Set(Utc::now().into());

    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

/// A user's own applications, newest first.
pub async fn find_by_user_id(db: &DatabaseConnection, user_id: Id) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?)
}
