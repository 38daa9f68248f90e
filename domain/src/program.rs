use crate::error::Error;
use crate::programs::{Column, Entity, Model};
use crate::validation::Validate;
use crate::Id;
use entity_api::query::{self, IntoQueryFilterMap, QuerySort};
use sea_orm::{DatabaseConnection, Order};

pub use entity_api::program::{delete_by_id, find_active, find_active_by_slug, find_by_id};

pub async fn create(db: &DatabaseConnection, program_model: Model) -> Result<Model, Error> {
    program_model.validate()?;
    Ok(entity_api::program::create(db, program_model).await?)
}

pub async fn update(db: &DatabaseConnection, id: Id, program_model: Model) -> Result<Model, Error> {
    program_model.validate()?;
    Ok(entity_api::program::update(db, id, program_model).await?)
}

/// Every program, active or not, for the admin console. Ordered by name
/// unless `params` chooses otherwise.
pub async fn find_by<P>(db: &DatabaseConnection, params: P) -> Result<Vec<Model>, Error>
where
    P: IntoQueryFilterMap + QuerySort<Column>,
{
    Ok(query::find_with_params::<Entity, Column, P>(db, params, (Column::Name, Order::Asc)).await?)
}
