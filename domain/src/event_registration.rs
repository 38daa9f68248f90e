use crate::error::Error;
use crate::event_registrations::Model;
use crate::validation::Validate;
use crate::{users, Id};
use entity_api::{event, event_registration};
use log::*;
use sea_orm::DatabaseConnection;

pub use entity_api::event_registration::find_by_event_id;

/// Signs the current user up for an event. The name and email default to the
/// account's own when the form leaves them blank. A second sign-up for the
/// same event is a conflict.
pub async fn register(
    db: &DatabaseConnection,
    event_id: Id,
    user: &users::Model,
    mut registration_model: Model,
) -> Result<Model, Error> {
    if registration_model.full_name.trim().is_empty() {
        registration_model.full_name = user.full_name.clone();
    }
    if registration_model.email.trim().is_empty() {
        registration_model.email = user.email.clone();
    }
    registration_model.validate()?;

    // 404 for an unknown event rather than a foreign key failure
    event::find_by_id(db, event_id).await?;

    let registration =
        event_registration::create(db, event_id, user.id, registration_model).await?;
    info!("User {} registered for event {event_id}", user.id);
    Ok(registration)
}

pub async fn cancel(db: &DatabaseConnection, event_id: Id, user_id: Id) -> Result<(), Error> {
    if event_registration::delete_by_event_and_user(db, event_id, user_id).await? {
        Ok(())
    } else {
        Err(Error::not_found())
    }
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, EntityErrorKind, InternalErrorKind};
    use chrono::{NaiveDate, Utc};
    use entity::event_type::EventType;
    use entity::events;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn user() -> users::Model {
        let now = Utc::now();
        users::Model {
            id: Id::new_v4(),
            email: "ada@soilsense.io".to_owned(),
            full_name: "Ada Founder".to_owned(),
            password: String::new(),
            disabled: false,
            created_at: now.into(),
            updated_at: now.into(),
            roles: vec![],
        }
    }

    fn blank_registration() -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            event_id: Id::nil(),
            user_id: Id::nil(),
            full_name: String::new(),
            email: String::new(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn event(id: Id) -> events::Model {
        let now = Utc::now();
        events::Model {
            id,
            title: "Pitch Workshop".to_owned(),
            event_type: EventType::Workshop,
            date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            time: None,
            location: None,
            online_url: None,
            banner_url: None,
            description: "Sharpen your deck".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn register_fills_in_the_account_name_and_email() -> Result<(), Error> {
        let user = user();
        let event_id = Id::new_v4();
        let mut stored = blank_registration();
        stored.event_id = event_id;
        stored.user_id = user.id;
        stored.full_name = user.full_name.clone();
        stored.email = user.email.clone();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[event(event_id)]])
            .append_query_results([[stored.clone()]])
            .into_connection();

        let registration = register(&db, event_id, &user, blank_registration()).await?;

        assert_eq!(registration.email, user.email);
        let insert = format!("{:?}", db.into_transaction_log()[1]);
        assert!(insert.contains("ada@soilsense.io"));

        Ok(())
    }

    #[tokio::test]
    async fn registering_twice_for_one_event_is_a_conflict() {
        let user = user();
        let event_id = Id::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[event(event_id)]])
            .append_query_errors([entity_api::db_errors::unique_violation()])
            .into_connection();

        let result = register(&db, event_id, &user, blank_registration()).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Conflict))
        );
    }

    #[tokio::test]
    async fn cancel_without_a_registration_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let result = cancel(&db, Id::new_v4(), Id::new_v4()).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound))
        );
    }
}
