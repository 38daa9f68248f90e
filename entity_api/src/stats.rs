//! Row counts backing the about page and the admin dashboard.

use super::error::Error;
use chrono::NaiveDate;
use entity::application_status::ApplicationStatus;
use entity::contact_status::ContactStatus;
use entity::roles::Role;
use entity::{applications, contact_submissions, events, mentors, programs, startups, user_roles};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
};

/// Counts the rows of `E` matching `condition`. An empty `Condition::all()`
/// counts the whole table.
pub async fn count_where<E>(db: &impl ConnectionTrait, condition: Condition) -> Result<u64, Error>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    Ok(E::find().filter(condition).count(db).await?)
}

pub async fn count_all<E>(db: &impl ConnectionTrait) -> Result<u64, Error>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    count_where::<E>(db, Condition::all()).await
}

pub async fn active_programs(db: &impl ConnectionTrait) -> Result<u64, Error> {
    count_where::<programs::Entity>(db, Condition::all().add(programs::Column::IsActive.eq(true)))
        .await
}

pub async fn active_mentors(db: &impl ConnectionTrait) -> Result<u64, Error> {
    count_where::<mentors::Entity>(db, Condition::all().add(mentors::Column::IsActive.eq(true)))
        .await
}

pub async fn public_startups(db: &impl ConnectionTrait) -> Result<u64, Error> {
    count_where::<startups::Entity>(db, Condition::all().add(startups::Column::IsPublic.eq(true)))
        .await
}

pub async fn featured_startups(db: &impl ConnectionTrait) -> Result<u64, Error> {
    count_where::<startups::Entity>(
        db,
        Condition::all().add(startups::Column::IsFeatured.eq(true)),
    )
    .await
}

/// Events dated on or after `today`.
pub async fn upcoming_events(db: &impl ConnectionTrait, today: NaiveDate) -> Result<u64, Error> {
    count_where::<events::Entity>(db, Condition::all().add(events::Column::Date.gte(today))).await
}

/// Events dated before `today`.
pub async fn events_held(db: &impl ConnectionTrait, today: NaiveDate) -> Result<u64, Error> {
    count_where::<events::Entity>(db, Condition::all().add(events::Column::Date.lt(today))).await
}

pub async fn applications_with_status(
    db: &impl ConnectionTrait,
    status: ApplicationStatus,
) -> Result<u64, Error> {
    count_where::<applications::Entity>(
        db,
        Condition::all().add(applications::Column::Status.eq(status)),
    )
    .await
}

pub async fn contact_submissions_with_status(
    db: &impl ConnectionTrait,
    status: ContactStatus,
) -> Result<u64, Error> {
    count_where::<contact_submissions::Entity>(
        db,
        Condition::all().add(contact_submissions::Column::Status.eq(status)),
    )
    .await
}

/// Accounts holding `role`, whatever other roles they also hold.
pub async fn users_with_role(db: &impl ConnectionTrait, role: Role) -> Result<u64, Error> {
    count_where::<user_roles::Entity>(db, Condition::all().add(user_roles::Column::Role.eq(role)))
        .await
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn active_programs_counts_only_active_rows() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(4)]])
            .into_connection();

        let count = active_programs(&db).await?;

        assert_eq!(count, 4);
        let sql = format!("{:?}", db.into_transaction_log()[0]);
        assert!(sql.contains("COUNT(*)"));
        assert!(sql.contains("is_active"));

        Ok(())
    }

    #[tokio::test]
    async fn events_held_counts_past_dates() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(12)]])
            .into_connection();

        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let count = events_held(&db, today).await?;

        assert_eq!(count, 12);
        let sql = format!("{:?}", db.into_transaction_log()[0]);
        assert!(sql.contains(" < $1"));

        Ok(())
    }

    #[tokio::test]
    async fn users_with_role_counts_role_rows() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(2)]])
            .into_connection();

        let count = users_with_role(&db, Role::Investor).await?;

        assert_eq!(count, 2);
        let sql = format!("{:?}", db.into_transaction_log()[0]);
        assert!(sql.contains("user_roles"));
        assert!(sql.contains("investor"));

        Ok(())
    }
}
