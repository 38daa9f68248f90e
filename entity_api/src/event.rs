use super::error::Error;
use chrono::{NaiveDate, Utc};
use entity::events::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    DatabaseConnection, QueryOrder, QuerySelect, TryIntoModel,
};

use log::*;

pub async fn create(db: &DatabaseConnection, event_model: Model) -> Result<Model, Error> {
    debug!("New Event Model to be inserted: {event_model:?}");

    let now = Utc::now();

    let event_active_model: ActiveModel = ActiveModel {
        title: Set(event_model.title),
        event_type: Set(event_model.event_type),
        date: Set(event_model.date),
        time: Set(event_model.time),
        location: Set(event_model.location),
        online_url: Set(event_model.online_url),
        banner_url: Set(event_model.banner_url),
        description: Set(event_model.description),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(event_active_model.insert(db).await?)
}

pub async fn update(db: &DatabaseConnection, id: Id, model: Model) -> Result<Model, Error> {
    let event = find_by_id(db, id).await?;
    debug!("Existing Event model to be Updated: {event:?}");

    let active_model: ActiveModel = ActiveModel {
        id: Unchanged(event.id),
        title: Set(model.title),
        event_type: Set(model.event_type),
        date: Set(model.date),
        time: Set(model.time),
        location: Set(model.location),
        online_url: Set(model.online_url),
        banner_url: Set(model.banner_url),
        description: Set(model.description),
        created_at: Unchanged(event.created_at),
        updated_at: Set(Utc::now().into()),
    };

    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let event = find_by_id(db, id).await?;
    event.delete(db).await?;
    Ok(())
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

/// Every event, soonest first.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .order_by_asc(Column::Date)
        .order_by_asc(Column::Time)
        .all(db)
        .await?)
}

/// Events taking place on or after `today`, soonest first.
pub async fn find_upcoming(
    db: &DatabaseConnection,
    today: NaiveDate,
    limit: Option<u64>,
) -> Result<Vec<Model>, Error> {
    let mut query = Entity::find()
        .filter(Column::Date.gte(today))
        .order_by_asc(Column::Date)
        .order_by_asc(Column::Time);
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    Ok(query.all(db).await?)
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use entity::event_type::EventType;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn event(title: &str, date: NaiveDate) -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            title: title.to_owned(),
            event_type: EventType::DemoDay,
            date,
            time: None,
            location: Some("Main hall".to_owned()),
            online_url: None,
            banner_url: None,
            description: "Cohort pitches".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn find_upcoming_returns_rows_in_database_order() -> Result<(), Error> {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let rows = vec![
            event("Demo Day", today),
            event("Investor Mixer", today.succ_opt().unwrap()),
        ];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows.clone()])
            .into_connection();

        let events = find_upcoming(&db, today, Some(3)).await?;

        assert_eq!(events, rows);
        let statement = format!("{:?}", db.into_transaction_log()[0]);
        assert!(statement.contains("LIMIT"));
        assert!(statement.contains(">="));

        Ok(())
    }

    #[tokio::test]
    async fn update_returns_not_found_for_unknown_event() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let result = update(&db, Id::new_v4(), event("Ghost", today)).await;

        assert!(result.is_err());
    }
}
