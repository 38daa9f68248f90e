use super::error::Error;
use chrono::Utc;
use entity::hero_banners::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    DatabaseConnection, QueryOrder, TryIntoModel,
};

use log::*;

pub async fn create(db: &DatabaseConnection, banner_model: Model) -> Result<Model, Error> {
    debug!("New HeroBanner Model to be inserted: {banner_model:?}");

    let now = Utc::now();

    let banner_active_model: ActiveModel = ActiveModel {
        title: Set(banner_model.title),
        subtitle: Set(banner_model.subtitle),
        cta_label: Set(banner_model.cta_label),
        cta_href: Set(banner_model.cta_href),
        image_url: Set(banner_model.image_url),
        sort_order: Set(banner_model.sort_order),
        is_active: Set(banner_model.is_active),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(banner_active_model.insert(db).await?)
}

pub async fn update(db: &DatabaseConnection, id: Id, model: Model) -> Result<Model, Error> {
    let banner = find_by_id(db, id).await?;
    debug!("Existing HeroBanner model to be Updated: {banner:?}");

    let active_model: ActiveModel = ActiveModel {
        id: Unchanged(banner.id),
        title: Set(model.title),
        subtitle: Set(model.subtitle),
        cta_label: Set(model.cta_label),
        cta_href: Set(model.cta_href),
        image_url: Set(model.image_url),
        sort_order: Set(model.sort_order),
        is_active: Set(model.is_active),
        created_at: Unchanged(banner.created_at),
        updated_at: Set(Utc::now().into()),
    };

    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let banner = find_by_id(db, id).await?;
    banner.delete(db).await?;
    Ok(())
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .order_by_asc(Column::SortOrder)
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?)
}

/// Banners shown on the home page, in rotation order.
pub async fn find_active(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::IsActive.eq(true))
        .order_by_asc(Column::SortOrder)
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?)
}
