use crate::error::Error;
use crate::mentors::{ActiveModel, Column, Model};
use crate::validation::Validate;
use crate::{only_columns, users, Id};
use entity_api::mutate::{self, IntoUpdateMap};
use log::*;
use sea_orm::{DatabaseConnection, IntoActiveModel};

pub use entity_api::mentor::{find_all, find_by_id, find_by_user_id};

/// Active mentors for the public directory. `expertise` keeps only mentors
/// listing that area, compared case-insensitively.
pub async fn find_public(
    db: &DatabaseConnection,
    expertise: Option<&str>,
) -> Result<Vec<Model>, Error> {
    let mentors = entity_api::mentor::find_active(db).await?;
    Ok(match expertise.map(str::trim).filter(|e| !e.is_empty()) {
        Some(expertise) => mentors
            .into_iter()
            .filter(|mentor| has_expertise(mentor, expertise))
            .collect(),
        None => mentors,
    })
}

fn has_expertise(mentor: &Model, expertise: &str) -> bool {
    let wanted = expertise.to_lowercase();
    mentor
        .expertise
        .iter()
        .any(|item| item.trim().to_lowercase() == wanted)
}

/// Shows or hides a mentor in the public directory. Only `is_active` is
/// taken from `params`.
pub async fn update_visibility(
    db: &DatabaseConnection,
    id: Id,
    params: impl IntoUpdateMap,
) -> Result<Model, Error> {
    let update_map = only_columns(params.into_update_map(), &["is_active"])?;
    let mentor = find_by_id(db, id).await?;
    info!("Updating visibility of Mentor {id}");
    Ok(
        mutate::update::<ActiveModel, Column>(db, mentor.into_active_model(), update_map)
            .await?,
    )
}

/// Creates or updates the signed-in mentor's own profile.
pub async fn upsert_for_user(
    db: &DatabaseConnection,
    user: &users::Model,
    mentor_model: Model,
) -> Result<Model, Error> {
    mentor_model.validate()?;
    Ok(entity_api::mentor::upsert_for_user(db, user.id, mentor_model).await?)
}
