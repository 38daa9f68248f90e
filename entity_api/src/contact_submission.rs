use super::error::Error;
use chrono::Utc;
use entity::contact_status::ContactStatus;
use entity::contact_submissions::{ActiveModel, Entity, Model};
use entity::Id;
use sea_orm::{entity::prelude::*, ActiveValue::Set, DatabaseConnection, TryIntoModel};

use log::*;

/// Stores a message from the public contact form. Submissions always start
/// out `New`.
pub async fn create(db: &DatabaseConnection, submission_model: Model) -> Result<Model, Error> {
    debug!(
        "New ContactSubmission to be inserted from: {}",
        submission_model.email
    );

    let now = Utc::now();

    let submission_active_model: ActiveModel = ActiveModel {
        full_name: Set(submission_model.full_name),
        email: Set(submission_model.email),
        subject: Set(submission_model.subject),
        message: Set(submission_model.message),
        status: Set(ContactStatus::New),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(submission_active_model.insert(db).await?)
}

pub async fn update_status(
    db: &DatabaseConnection,
    id: Id,
    status: ContactStatus,
) -> Result<Model, Error> {
    let submission = find_by_id(db, id).await?;

    let mut active_model: ActiveModel = submission.into();
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

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn submission(status: ContactStatus) -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            full_name: "Grace Investor".to_owned(),
            email: "grace@fund.example".to_owned(),
            subject: "Demo day".to_owned(),
            message: "Can I attend the next demo day?".to_owned(),
            status,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn create_stores_the_submission_as_new() -> Result<(), Error> {
        let stored = submission(ContactStatus::New);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[stored.clone()]])
            .into_connection();

        let created = create(&db, submission(ContactStatus::Archived)).await?;

        assert_eq!(created.status, ContactStatus::New);
        let sql = format!("{:?}", db.into_transaction_log()[0]);
        assert!(sql.contains("new"));
        assert!(!sql.contains("archived"));

        Ok(())
    }

    #[tokio::test]
    async fn update_status_marks_a_submission_read() -> Result<(), Error> {
        let existing = submission(ContactStatus::New);
        let mut read = existing.clone();
        read.status = ContactStatus::Read;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing.clone()]])
            .append_query_results([[read.clone()]])
            .into_connection();

        let updated = update_status(&db, existing.id, ContactStatus::Read).await?;

        assert_eq!(updated.status, ContactStatus::Read);

        Ok(())
    }
}
