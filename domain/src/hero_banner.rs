use crate::error::Error;
use crate::hero_banners::Model;
use crate::validation::Validate;
use crate::Id;
use sea_orm::DatabaseConnection;

pub use entity_api::hero_banner::{delete_by_id, find_active, find_all, find_by_id};

pub async fn create(db: &DatabaseConnection, banner_model: Model) -> Result<Model, Error> {
    banner_model.validate()?;
    Ok(entity_api::hero_banner::create(db, banner_model).await?)
}

pub async fn update(db: &DatabaseConnection, id: Id, banner_model: Model) -> Result<Model, Error> {
    banner_model.validate()?;
    Ok(entity_api::hero_banner::update(db, id, banner_model).await?)
}
