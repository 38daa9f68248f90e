//! Aggregates behind the public home and about pages.

use crate::error::Error;
use crate::{events, hero_banners, programs, startups};
use chrono::Utc;
use entity_api::stats;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use service::config::Config;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HomePage {
    pub hero_banners: Vec<hero_banners::Model>,
    pub programs: Vec<programs::Model>,
    pub upcoming_events: Vec<events::Model>,
    pub featured_startups: Vec<startups::Model>,
}

#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct AboutStats {
    pub active_programs: u64,
    pub public_startups: u64,
    pub active_mentors: u64,
    pub events_held: u64,
}

/// Active banners, the newest active programs, the next upcoming events and
/// featured startups. Each list is capped by its `home_*_limit` setting.
pub async fn home(db: &DatabaseConnection, config: &Config) -> Result<HomePage, Error> {
    let today = Utc::now().date_naive();

    Ok(HomePage {
        hero_banners: entity_api::hero_banner::find_active(db).await?,
        programs: entity_api::program::find_latest_active(db, config.home_latest_programs_limit)
            .await?,
        upcoming_events: entity_api::event::find_upcoming(
            db,
            today,
            Some(config.home_upcoming_events_limit),
        )
        .await?,
        featured_startups: entity_api::startup::find_featured(
            db,
            config.home_featured_startups_limit,
        )
        .await?,
    })
}

pub async fn about(db: &DatabaseConnection) -> Result<AboutStats, Error> {
    let today = Utc::now().date_naive();

    Ok(AboutStats {
        active_programs: stats::active_programs(db).await?,
        public_startups: stats::public_startups(db).await?,
        active_mentors: stats::active_mentors(db).await?,
        events_held: stats::events_held(db, today).await?,
    })
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn test_config() -> Config {
        use clap::Parser;
        Config::parse_from(["incubator_platform_rs"])
    }

    fn count_row(n: i64) -> [BTreeMap<&'static str, Value>; 1] {
        [BTreeMap::from([("num_items", Value::BigInt(Some(n)))])]
    }

    #[tokio::test]
    async fn about_reports_each_count() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([count_row(3)])
            .append_query_results([count_row(8)])
            .append_query_results([count_row(5)])
            .append_query_results([count_row(21)])
            .into_connection();

        let about = about(&db).await?;

        assert_eq!(
            about,
            AboutStats {
                active_programs: 3,
                public_startups: 8,
                active_mentors: 5,
                events_held: 21,
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn home_lists_the_newest_active_programs_first() -> Result<(), Error> {
        let now = chrono::Utc::now();
        let newest = programs::Model {
            id: entity::Id::new_v4(),
            name: "Spring Accelerator".to_owned(),
            slug: "spring-accelerator".to_owned(),
            description: "Twelve weeks of hands-on support".to_owned(),
            duration: "12 weeks".to_owned(),
            category: entity::program_category::ProgramCategory::Accelerator,
            application_url: None,
            image_url: None,
            is_active: true,
            created_at: now.into(),
            updated_at: now.into(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<hero_banners::Model>::new()])
            .append_query_results([[newest.clone()]])
            .append_query_results([Vec::<events::Model>::new()])
            .append_query_results([Vec::<startups::Model>::new()])
            .into_connection();

        let mut config = test_config();
        config.home_latest_programs_limit = 2;
        let page = home(&db, &config).await?;

        assert_eq!(page.programs, vec![newest]);
        let log = db.into_transaction_log();
        let programs_query = format!("{:?}", log[1]);
        assert!(programs_query.contains(r#"ORDER BY \"programs\".\"created_at\" DESC"#));
        assert!(programs_query.contains("LIMIT"));
        assert!(programs_query.contains("BigUnsigned(Some(2))"));
        Ok(())
    }
}
