//! Counts and recent-activity feeds shown on the admin dashboard.

use crate::error::Error;
use crate::{applications, events, mentors, programs, startups, users};
use chrono::Utc;
use entity::application_status::ApplicationStatus;
use entity::contact_status::ContactStatus;
use entity::roles::Role;
use entity_api::{query, stats};
use sea_orm::strum::IntoEnumIterator;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// How many rows each recent-activity feed holds.
pub const RECENT_LIMIT: u64 = 5;

#[derive(Debug, Default, PartialEq, Serialize, ToSchema)]
pub struct Dashboard {
    pub programs_total: u64,
    pub programs_active: u64,
    pub events_total: u64,
    pub events_upcoming: u64,
    pub mentors_total: u64,
    pub mentors_active: u64,
    pub startups_total: u64,
    pub startups_public: u64,
    pub startups_featured: u64,
    /// Keyed by application status, e.g. `"pending"`
    pub applications_by_status: BTreeMap<String, u64>,
    pub new_contact_submissions: u64,
    pub users_total: u64,
    pub investors_total: u64,
    /// Newest first
    pub recent_applications: Vec<applications::Model>,
    /// Newest first
    pub recent_users: Vec<users::Model>,
    /// Newest first
    pub recent_events: Vec<events::Model>,
}

pub async fn summary(db: &DatabaseConnection) -> Result<Dashboard, Error> {
    let today = Utc::now().date_naive();

    let mut applications_by_status = BTreeMap::new();
    for status in ApplicationStatus::iter() {
        applications_by_status.insert(
            status.to_string(),
            stats::applications_with_status(db, status).await?,
        );
    }

    Ok(Dashboard {
        programs_total: stats::count_all::<programs::Entity>(db).await?,
        programs_active: stats::active_programs(db).await?,
        events_total: stats::count_all::<events::Entity>(db).await?,
        events_upcoming: stats::upcoming_events(db, today).await?,
        mentors_total: stats::count_all::<mentors::Entity>(db).await?,
        mentors_active: stats::active_mentors(db).await?,
        startups_total: stats::count_all::<startups::Entity>(db).await?,
        startups_public: stats::public_startups(db).await?,
        startups_featured: stats::featured_startups(db).await?,
        applications_by_status,
        new_contact_submissions: stats::contact_submissions_with_status(db, ContactStatus::New)
            .await?,
        users_total: stats::count_all::<users::Entity>(db).await?,
        investors_total: stats::users_with_role(db, Role::Investor).await?,
        recent_applications: query::find_newest::<applications::Entity, _>(
            db,
            applications::Column::CreatedAt,
            RECENT_LIMIT,
        )
        .await?,
        recent_users: query::find_newest::<users::Entity, _>(
            db,
            users::Column::CreatedAt,
            RECENT_LIMIT,
        )
        .await?,
        recent_events: query::find_newest::<events::Entity, _>(
            db,
            events::Column::CreatedAt,
            RECENT_LIMIT,
        )
        .await?,
    })
}
