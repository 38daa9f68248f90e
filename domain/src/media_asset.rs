use crate::error::Error;
use crate::media_assets::Model;
use crate::validation::Validate;
use crate::users;
use sea_orm::DatabaseConnection;

pub use entity_api::media_asset::{delete_by_id, find_all, find_by_id};

/// Records metadata for a file already uploaded to object storage.
pub async fn create(
    db: &DatabaseConnection,
    uploaded_by: &users::Model,
    asset_model: Model,
) -> Result<Model, Error> {
    asset_model.validate()?;
    Ok(entity_api::media_asset::create(db, asset_model, uploaded_by.id).await?)
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, InternalErrorKind};
    use crate::Id;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn uploader() -> users::Model {
        let now = Utc::now();
        users::Model {
            id: Id::new_v4(),
            email: "admin@incubator.local".to_owned(),
            full_name: "Site Admin".to_owned(),
            password: String::new(),
            disabled: false,
            created_at: now.into(),
            updated_at: now.into(),
            roles: vec![],
        }
    }

    fn asset(size_bytes: Option<i64>) -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            file_name: "demo-day.jpg".to_owned(),
            url: "https://cdn.example.com/demo-day.jpg".to_owned(),
            content_type: "image/jpeg".to_owned(),
            size_bytes,
            alt_text: Some("Founders on stage".to_owned()),
            uploaded_by: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn create_rejects_a_negative_size() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = create(&db, &uploader(), asset(Some(-1))).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Validation(
                "size_bytes must not be negative".to_owned()
            ))
        );
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn create_records_the_uploading_user() -> Result<(), Error> {
        let uploader = uploader();
        let stored = Model {
            uploaded_by: Some(uploader.id),
            ..asset(Some(48_213))
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[stored.clone()]])
            .into_connection();

        let created = create(&db, &uploader, asset(Some(48_213))).await?;

        assert_eq!(created.uploaded_by, Some(uploader.id));
        let insert = format!("{:?}", db.into_transaction_log()[0]);
        assert!(insert.contains(&uploader.id.to_string()));
        Ok(())
    }
}
