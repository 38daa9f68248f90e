use super::error::Error;
use chrono::Utc;
use entity::mentors::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    ConnectionTrait, DatabaseConnection, QueryOrder, TryIntoModel,
};

use log::*;

/// Inserts a mentor profile. `user_id` links the profile to the mentor-role
/// account that maintains it; `is_active` decides public visibility.
pub async fn create(
    db: &impl ConnectionTrait,
    mentor_model: Model,
    user_id: Option<Id>,
    is_active: bool,
) -> Result<Model, Error> {
    debug!("New Mentor Model to be inserted: {mentor_model:?}");

    let now = Utc::now();

    let mentor_active_model: ActiveModel = ActiveModel {
        user_id: Set(user_id),
        name: Set(mentor_model.name),
        role: Set(mentor_model.role),
        expertise: Set(mentor_model.expertise),
        bio: Set(mentor_model.bio),
        companies: Set(mentor_model.companies),
        linkedin_url: Set(mentor_model.linkedin_url),
        photo_url: Set(mentor_model.photo_url),
        is_active: Set(is_active),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(mentor_active_model.insert(db).await?)
}

/// Creates or updates the profile owned by `user_id`. Visibility is left as
/// is on update; a newly created profile stays hidden until an admin shows it.
pub async fn upsert_for_user(
    db: &DatabaseConnection,
    user_id: Id,
    mentor_model: Model,
) -> Result<Model, Error> {
    match find_by_user_id(db, user_id).await? {
        Some(existing) => {
            debug!("Existing Mentor model to be Updated: {existing:?}");

            let active_model: ActiveModel = ActiveModel {
                id: Unchanged(existing.id),
                user_id: Unchanged(existing.user_id),
                name: Set(mentor_model.name),
                role: Set(mentor_model.role),
                expertise: Set(mentor_model.expertise),
                bio: Set(mentor_model.bio),
                companies: Set(mentor_model.companies),
                linkedin_url: Set(mentor_model.linkedin_url),
                photo_url: Set(mentor_model.photo_url),
                is_active: Unchanged(existing.is_active),
                created_at: Unchanged(existing.created_at),
                updated_at: Set(Utc::now().into()),
            };

            Ok(active_model.update(db).await?.try_into_model()?)
        }
        None => create(db, mentor_model, Some(user_id), false).await,
    }
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

pub async fn find_by_user_id(
    db: &DatabaseConnection,
    user_id: Id,
) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .one(db)
        .await?)
}

/// All mentor profiles regardless of visibility, for the admin console.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find().order_by_asc(Column::Name).all(db).await?)
}

/// Publicly visible mentors ordered by name.
pub async fn find_active(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::IsActive.eq(true))
        .order_by_asc(Column::Name)
        .all(db)
        .await?)
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mentor(user_id: Option<Id>, is_active: bool) -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            user_id,
            name: "Ada Mentor".to_owned(),
            role: "Partner".to_owned(),
            expertise: vec!["fundraising".to_owned(), "go-to-market".to_owned()],
            bio: "Two exits, now helping founders".to_owned(),
            companies: Some("Acme Ventures".to_owned()),
            linkedin_url: None,
            photo_url: None,
            is_active,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn upsert_for_user_creates_a_hidden_profile_when_none_exists() -> Result<(), Error> {
        let user_id = Id::new_v4();
        let created = mentor(Some(user_id), false);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .append_query_results([[created.clone()]])
            .into_connection();

        let profile = upsert_for_user(&db, user_id, created.clone()).await?;

        assert_eq!(profile.user_id, Some(user_id));
        assert!(!profile.is_active);
        assert_eq!(db.into_transaction_log().len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn upsert_for_user_updates_an_existing_profile() -> Result<(), Error> {
        let user_id = Id::new_v4();
        let existing = mentor(Some(user_id), true);
        let mut edited = existing.clone();
        edited.bio = "Three exits now".to_owned();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing.clone()]])
            .append_query_results([[edited.clone()]])
            .into_connection();

        let profile = upsert_for_user(&db, user_id, edited).await?;

        assert_eq!(profile.id, existing.id);
        assert_eq!(profile.bio, "Three exits now");
        assert!(profile.is_active);

        Ok(())
    }
}
