use crate::error::Error;
use crate::startups::{ActiveModel, Column, Model};
use crate::validation::Validate;
use crate::{only_columns, users, Id};
use entity::startup_status::StartupStatus;
use entity_api::mutate::{self, IntoUpdateMap};
use log::*;
use sea_orm::{DatabaseConnection, IntoActiveModel};

pub use entity_api::startup::{
    find_all, find_by_id, find_by_owner_id, find_featured, find_public, find_public_by_slug,
};

/// Publishes or features a startup. Only `is_public` and `is_featured` are
/// taken from `params`.
pub async fn update_visibility(
    db: &DatabaseConnection,
    id: Id,
    params: impl IntoUpdateMap,
) -> Result<Model, Error> {
    let update_map = only_columns(params.into_update_map(), &["is_public", "is_featured"])?;
    let startup = find_by_id(db, id).await?;
    info!("Updating visibility of Startup {id}");
    Ok(
        mutate::update::<ActiveModel, Column>(db, startup.into_active_model(), update_map)
            .await?,
    )
}

pub async fn update_status(
    db: &DatabaseConnection,
    id: Id,
    status: StartupStatus,
) -> Result<Model, Error> {
    Ok(entity_api::startup::update_status(db, id, status).await?)
}

/// Creates or updates the signed-in founder's own startup.
pub async fn upsert_for_owner(
    db: &DatabaseConnection,
    user: &users::Model,
    startup_model: Model,
) -> Result<Model, Error> {
    startup_model.validate()?;
    Ok(entity_api::startup::upsert_for_owner(db, user.id, startup_model).await?)
}
