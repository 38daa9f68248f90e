use crate::applications::{Column, Entity, Model};
use crate::error::Error;
use crate::validation::Validate;
use crate::{users, Id};
use entity::application_status::ApplicationStatus;
use entity_api::query::{self, IntoQueryFilterMap, QuerySort};
use log::*;
use sea_orm::{DatabaseConnection, Order};

pub use entity_api::application::{find_by_id, find_by_user_id};

/// Submits an application on behalf of `user`. The program must exist and be
/// accepting applications; its category is recorded on the application.
pub async fn submit(
    db: &DatabaseConnection,
    user: &users::Model,
    application_model: Model,
) -> Result<Model, Error> {
    application_model.validate()?;

    let program = entity_api::program::find_by_id(db, application_model.program_id).await?;
    if !program.is_active {
        return Err(Error::validation(
            "program_id refers to a program that is not accepting applications",
        ));
    }

    let application =
        entity_api::application::create(db, application_model, user.id, program.category).await?;
    info!(
        "User {} applied to program {} ({})",
        user.id, program.id, program.category
    );
    Ok(application)
}

/// Moves an application through review. Approved and rejected applications
/// are final; asking for the status an application already has is a no-op.
pub async fn update_status(
    db: &DatabaseConnection,
    id: Id,
    status: ApplicationStatus,
) -> Result<Model, Error> {
    let application = find_by_id(db, id).await?;

    if application.status == status {
        return Ok(application);
    }
    if !application.status.can_transition_to(status) {
        warn!(
            "Rejected status change of Application {id} from {} to {status}",
            application.status
        );
        return Err(Error::validation(format!(
            "status cannot change from {} to {status}",
            application.status
        )));
    }

    Ok(entity_api::application::update_status(db, id, status).await?)
}

/// Applications for the review queue, newest first unless `params` chooses
/// another order.
pub async fn find_by<P>(db: &DatabaseConnection, params: P) -> Result<Vec<Model>, Error>
where
    P: IntoQueryFilterMap + QuerySort<Column>,
{
    Ok(
        query::find_with_params::<Entity, Column, P>(db, params, (Column::CreatedAt, Order::Desc))
            .await?,
    )
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, InternalErrorKind};
    use crate::programs;
    use chrono::Utc;
    use entity::program_category::ProgramCategory;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    fn application(status: ApplicationStatus) -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            user_id: Id::new_v4(),
            program_id: Id::new_v4(),
            startup_name: "Soil Sense".to_owned(),
            program_type: ProgramCategory::Incubation,
            answers: json!({}),
            status,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn applicant() -> users::Model {
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

    fn is_validation(err: &Error) -> bool {
        matches!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Validation(_))
        )
    }

    #[tokio::test]
    async fn approved_applications_are_final() {
        let approved = application(ApplicationStatus::Approved);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[approved.clone()]])
            .into_connection();

        let result = update_status(&db, approved.id, ApplicationStatus::Pending).await;

        assert!(is_validation(&result.unwrap_err()));
        // Only the lookup ran; nothing was written.
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn same_status_is_a_no_op() -> Result<(), Error> {
        let rejected = application(ApplicationStatus::Rejected);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[rejected.clone()]])
            .into_connection();

        let result = update_status(&db, rejected.id, ApplicationStatus::Rejected).await?;

        assert_eq!(result, rejected);
        assert_eq!(db.into_transaction_log().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn under_review_can_be_approved() -> Result<(), Error> {
        let under_review = application(ApplicationStatus::UnderReview);
        let mut approved = under_review.clone();
        approved.status = ApplicationStatus::Approved;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[under_review.clone()]])
            .append_query_results([[under_review.clone()]])
            .append_query_results([[approved.clone()]])
            .into_connection();

        let result = update_status(&db, under_review.id, ApplicationStatus::Approved).await?;

        assert_eq!(result.status, ApplicationStatus::Approved);
        Ok(())
    }

    #[tokio::test]
    async fn submitting_to_an_inactive_program_is_rejected() {
        let now = Utc::now();
        let input = application(ApplicationStatus::Pending);
        let program = programs::Model {
            id: input.program_id,
            name: "Winter Sprint 2023".to_owned(),
            slug: "winter-sprint-2023".to_owned(),
            description: "Closed cohort".to_owned(),
            duration: "4 weeks".to_owned(),
            category: ProgramCategory::Accelerator,
            application_url: None,
            image_url: None,
            is_active: false,
            created_at: now.into(),
            updated_at: now.into(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[program]])
            .into_connection();

        let result = submit(&db, &applicant(), input).await;

        assert!(is_validation(&result.unwrap_err()));
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn submitting_with_a_blank_startup_name_issues_no_statement() {
        let mut input = application(ApplicationStatus::Pending);
        input.startup_name = String::new();
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = submit(&db, &applicant(), input).await;

        assert!(is_validation(&result.unwrap_err()));
        assert!(db.into_transaction_log().is_empty());
    }
}
