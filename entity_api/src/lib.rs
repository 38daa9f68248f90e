use chrono::{Days, NaiveTime, Utc};
use sea_orm::{DatabaseConnection, Value};
use serde_json::json;
use std::collections::HashMap;

pub use entity::{
    applications, contact_submissions, event_registrations, events, hero_banners, media_assets,
    mentors, programs, startups, user_roles, users, Id,
};

pub mod application;
pub mod contact_submission;
#[cfg(feature = "mock")]
pub mod db_errors;
pub mod error;
pub mod event;
pub mod event_registration;
pub mod hero_banner;
pub mod media_asset;
pub mod mentor;
pub mod mutate;
pub mod program;
pub mod query;
pub mod slug;
pub mod startup;
pub mod stats;
pub mod user;
pub mod user_role;

/// `QueryFilterMap` is a data structure that serves as a bridge for translating filter parameters
/// between different layers of the application. It is essentially a wrapper around a `HashMap`
/// where the keys are filter parameter names (as `String`) and the values are optional `Value` types
/// from `sea_orm`.
///
/// This structure is particularly useful in scenarios where you need to pass filter parameters
/// from a web request down to the database query layer in a type-safe and organized manner.
///
/// # Example
///
/// ```
/// use sea_orm::Value;
/// use entity_api::QueryFilterMap;
///
/// let mut query_filter_map = QueryFilterMap::new();
/// query_filter_map.insert("status".to_string(), Some(Value::String(Some(Box::new("pending".to_string())))));
/// let filter_value = query_filter_map.get("status");
/// ```
pub struct QueryFilterMap {
    map: HashMap<String, Option<Value>>,
}

impl QueryFilterMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        // HashMap.get returns an Option and so we need to "flatten" this to a single Option
        self.map
            .get(key)
            .and_then(|inner_option| inner_option.clone())
    }

    pub fn insert(&mut self, key: String, value: Option<Value>) {
        self.map.insert(key, value);
    }
}

impl Default for QueryFilterMap {
    fn default() -> Self {
        Self::new()
    }
}

/// `IntoQueryFilterMap` is a trait that provides a method for converting a struct into a `QueryFilterMap`.
/// This is particularly useful for translating data between different layers of the application,
/// such as from web request parameters to database query filters.
///
/// Implementing this trait for a struct allows you to define how the fields of the struct should be
/// mapped to the keys and values of the `QueryFilterMap`. This ensures that the data is passed
/// in a type-safe and organized manner.
///
/// # Example
///
/// ```
/// use entity_api::QueryFilterMap;
/// use entity_api::IntoQueryFilterMap;
///
/// #[derive(Debug)]
/// struct InboxParams {
///     status: String,
/// }
///
/// impl IntoQueryFilterMap for InboxParams {
///     fn into_query_filter_map(self) -> QueryFilterMap {
///         let mut query_filter_map = QueryFilterMap::new();
///         query_filter_map.insert(
///             "status".to_string(),
///             Some(sea_orm::Value::String(Some(Box::new(self.status)))),
///         );
///         query_filter_map
///     }
/// }
/// ```
pub trait IntoQueryFilterMap {
    fn into_query_filter_map(self) -> QueryFilterMap;
}

/// Fills a freshly migrated database with demo content: one account per role, a few
/// programs, events, mentors and startups, and a pair of hero banners.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), error::Error> {
    use entity::event_type::EventType;
    use entity::program_category::ProgramCategory;
    use entity::roles::Role;
    use entity::startup_status::StartupStatus;

    let now = Utc::now();
    let today = now.date_naive();

    let account = |email: &str, full_name: &str| users::Model {
        id: Id::nil(),
        email: email.to_owned(),
        full_name: full_name.to_owned(),
        password: "password".to_owned(),
        disabled: false,
        created_at: now.into(),
        updated_at: now.into(),
        roles: vec![],
    };

    // Migrations already create the admin account on a fresh database
    if user::find_by_email(db, "admin@incubator.local")
        .await?
        .is_none()
    {
        user::create_with_role(db, account("admin@incubator.local", "Site Admin"), Role::Admin)
            .await?;
    }
    let founder = user::create_with_role(
        db,
        account("founder@incubator.local", "Ada Founder"),
        Role::Startup,
    )
    .await?;
    let mentor_user = user::create_with_role(
        db,
        account("mentor@incubator.local", "Marcus Mentor"),
        Role::Mentor,
    )
    .await?;
    user::create_with_role(
        db,
        account("investor@incubator.local", "Ivy Investor"),
        Role::Investor,
    )
    .await?;

    let new_program = |name: &str, duration: &str, category: ProgramCategory, is_active: bool| {
        programs::Model {
            id: Id::nil(),
            name: name.to_owned(),
            slug: String::new(),
            description: format!("{name}: mentoring, workspace and a demo day at the end."),
            duration: duration.to_owned(),
            category,
            application_url: None,
            image_url: None,
            is_active,
            created_at: now.into(),
            updated_at: now.into(),
        }
    };

    let incubation = program::create(
        db,
        new_program("Core Incubation", "6 months", ProgramCategory::Incubation, true),
    )
    .await?;
    program::create(
        db,
        new_program("Idea Lab", "8 weeks", ProgramCategory::PreIncubation, true),
    )
    .await?;
    program::create(
        db,
        new_program("Scale Accelerator", "12 weeks", ProgramCategory::Accelerator, true),
    )
    .await?;
    program::create(
        db,
        new_program("Winter Sprint 2023", "4 weeks", ProgramCategory::Accelerator, false),
    )
    .await?;

    let new_event = |title: &str, event_type: EventType, date, time| events::Model {
        id: Id::nil(),
        title: title.to_owned(),
        event_type,
        date,
        time,
        location: Some("Incubator Hall".to_owned()),
        online_url: None,
        banner_url: None,
        description: format!("{title} at the incubator."),
        created_at: now.into(),
        updated_at: now.into(),
    };

    let workshop_date = today.checked_add_days(Days::new(7)).unwrap_or(today);
    let demo_day_date = today.checked_add_days(Days::new(30)).unwrap_or(today);
    let past_date = today.checked_sub_days(Days::new(30)).unwrap_or(today);

    event::create(
        db,
        new_event(
            "Pitch Deck Workshop",
            EventType::Workshop,
            workshop_date,
            NaiveTime::from_hms_opt(18, 0, 0),
        ),
    )
    .await?;
    event::create(
        db,
        new_event("Spring Demo Day", EventType::DemoDay, demo_day_date, None),
    )
    .await?;
    event::create(
        db,
        new_event(
            "Founders Mixer",
            EventType::Networking,
            past_date,
            NaiveTime::from_hms_opt(19, 30, 0),
        ),
    )
    .await?;

    let new_mentor = |name: &str, role: &str, expertise: &[&str]| mentors::Model {
        id: Id::nil(),
        user_id: None,
        name: name.to_owned(),
        role: role.to_owned(),
        expertise: expertise.iter().map(|e| (*e).to_owned()).collect(),
        bio: format!("{name} has advised early-stage teams for a decade."),
        companies: None,
        linkedin_url: None,
        photo_url: None,
        is_active: true,
        created_at: now.into(),
        updated_at: now.into(),
    };

    mentor::create(
        db,
        new_mentor("Marcus Mentor", "Partner, Seed Fund", &["Fundraising", "SaaS"]),
        Some(mentor_user.id),
        true,
    )
    .await?;
    mentor::create(
        db,
        new_mentor("Priya Rao", "CTO", &["Engineering", "AI"]),
        None,
        true,
    )
    .await?;

    let new_startup = |name: &str, sector: &str, stage: &str, is_featured: bool| startups::Model {
        id: Id::nil(),
        owner_id: None,
        name: name.to_owned(),
        slug: String::new(),
        sector: sector.to_owned(),
        stage: stage.to_owned(),
        description: format!("{name} is building in {sector}."),
        team_size: Some(5),
        traction: None,
        is_public: true,
        is_featured,
        status: StartupStatus::Active,
        created_at: now.into(),
        updated_at: now.into(),
    };

    startup::create(db, new_startup("Soil Sense", "AgriTech", "MVP", true), Some(founder.id)).await?;
    startup::create(db, new_startup("Ledgerly", "FinTech", "Seed", true), None).await?;
    startup::create(db, new_startup("Clinicly", "HealthTech", "Idea", false), None).await?;

    application::create(
        db,
        applications::Model {
            id: Id::nil(),
            user_id: founder.id,
            program_id: incubation.id,
            startup_name: "Soil Sense".to_owned(),
            program_type: incubation.category,
            answers: json!({"problem": "Farmers over-water their fields"}),
            status: Default::default(),
            created_at: now.into(),
            updated_at: now.into(),
        },
        founder.id,
        incubation.category,
    )
    .await?;

    let new_banner = |title: &str, cta_href: &str, sort_order: i32| hero_banners::Model {
        id: Id::nil(),
        title: title.to_owned(),
        subtitle: None,
        cta_label: Some("Learn more".to_owned()),
        cta_href: Some(cta_href.to_owned()),
        image_url: None,
        sort_order,
        is_active: true,
        created_at: now.into(),
        updated_at: now.into(),
    };

    hero_banner::create(db, new_banner("Build your startup with us", "/programs", 0)).await?;
    hero_banner::create(db, new_banner("Spring Demo Day is coming", "/events", 1)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_filter_map_flattens_missing_and_empty_values() {
        let mut map = QueryFilterMap::new();
        map.insert("status".to_string(), None);
        assert!(map.get("status").is_none());
        assert!(map.get("program_id").is_none());
    }
}
