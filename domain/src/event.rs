use crate::error::Error;
use crate::events::{Column, Entity, Model};
use crate::validation::Validate;
use crate::Id;
use chrono::Utc;
use entity_api::query::{self, IntoQueryFilterMap, QuerySort};
use sea_orm::{DatabaseConnection, Order};

pub use entity_api::event::{delete_by_id, find_by_id};

pub async fn create(db: &DatabaseConnection, event_model: Model) -> Result<Model, Error> {
    event_model.validate()?;
    Ok(entity_api::event::create(db, event_model).await?)
}

pub async fn update(db: &DatabaseConnection, id: Id, event_model: Model) -> Result<Model, Error> {
    event_model.validate()?;
    Ok(entity_api::event::update(db, id, event_model).await?)
}

/// The public event calendar, ascending by date. With `upcoming_only`, past
/// events are left out.
pub async fn find_public(db: &DatabaseConnection, upcoming_only: bool) -> Result<Vec<Model>, Error> {
    if upcoming_only {
        Ok(entity_api::event::find_upcoming(db, Utc::now().date_naive(), None).await?)
    } else {
        Ok(entity_api::event::find_all(db).await?)
    }
}

pub async fn find_by<P>(db: &DatabaseConnection, params: P) -> Result<Vec<Model>, Error>
where
    P: IntoQueryFilterMap + QuerySort<Column>,
{
    Ok(query::find_with_params::<Entity, Column, P>(db, params, (Column::Date, Order::Asc)).await?)
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, InternalErrorKind};
    use chrono::NaiveDate;
    use entity::event_type::EventType;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn event(online_url: Option<&str>) -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            title: "Pitch Workshop".to_owned(),
            event_type: EventType::Workshop,
            date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            time: None,
            location: None,
            online_url: online_url.map(str::to_owned),
            banner_url: None,
            description: "Sharpen your deck".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn create_rejects_a_non_web_online_url_before_any_write() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = create(&db, event(Some("ftp://files.example.com/pitch"))).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Validation(
                "online_url must be an absolute http(s) URL".to_owned()
            ))
        );
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn update_of_a_missing_event_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let result = update(&db, Id::new_v4(), event(Some("https://meet.example.com/pitch"))).await;

        assert_eq!(result.unwrap_err().error_kind, Error::not_found().error_kind);
    }

    #[tokio::test]
    async fn find_public_upcoming_only_leaves_out_past_dates() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        find_public(&db, true).await?;

        let sql = format!("{:?}", db.into_transaction_log()[0]);
        assert!(sql.contains(r#"\"events\".\"date\" >= $1"#), "{sql}");
        assert!(!sql.contains("LIMIT"));
        Ok(())
    }

    #[tokio::test]
    async fn find_public_lists_every_event_without_upcoming_only() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![event(None)]])
            .into_connection();

        let events = find_public(&db, false).await?;

        assert_eq!(events.len(), 1);
        let sql = format!("{:?}", db.into_transaction_log()[0]);
        assert!(!sql.contains("WHERE"));
        Ok(())
    }
}
