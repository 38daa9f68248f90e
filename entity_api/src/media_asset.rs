use super::error::Error;
use chrono::Utc;
use entity::media_assets::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder};

use log::*;

/// Records an uploaded file. The bytes themselves are already in object
/// storage; `url` points at them.
pub async fn create(
    db: &DatabaseConnection,
    asset_model: Model,
    uploaded_by: Id,
) -> Result<Model, Error> {
    debug!("New MediaAsset Model to be inserted: {asset_model:?}");

    let now = Utc::now();

    let asset_active_model: ActiveModel = ActiveModel {
        file_name: Set(asset_model.file_name),
        url: Set(asset_model.url),
        content_type: Set(asset_model.content_type),
        size_bytes: Set(asset_model.size_bytes),
        alt_text: Set(asset_model.alt_text),
        uploaded_by: Set(Some(uploaded_by)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(asset_active_model.insert(db).await?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let asset = find_by_id(db, id).await?;
    asset.delete(db).await?;
    Ok(())
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

/// The media library, newest upload first.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?)
}
