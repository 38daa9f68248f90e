use crate::contact_submissions::{Column, Entity, Model};
use crate::error::Error;
use crate::validation::Validate;
use entity_api::query::{self, IntoQueryFilterMap, QuerySort};
use log::*;
use sea_orm::{DatabaseConnection, Order};

pub use entity_api::contact_submission::{find_by_id, update_status};

/// Accepts a message from the public contact form.
pub async fn submit(db: &DatabaseConnection, submission_model: Model) -> Result<Model, Error> {
    submission_model.validate()?;
    let submission = entity_api::contact_submission::create(db, submission_model).await?;
    info!("Contact submission {} received", submission.id);
    Ok(submission)
}

/// The admin inbox, newest first unless `params` chooses another order.
pub async fn find_by<P>(db: &DatabaseConnection, params: P) -> Result<Vec<Model>, Error>
where
    P: IntoQueryFilterMap + QuerySort<Column>,
{
    Ok(
        query::find_with_params::<Entity, Column, P>(db, params, (Column::CreatedAt, Order::Desc))
            .await?,
    )
}
