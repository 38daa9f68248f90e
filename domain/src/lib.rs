//! This module re-exports various items from the `entity_api` crate.
//!
//! The purpose of this re-export is to ensure that consumers of the `domain` crate do not need to
//! directly depend on the `entity_api` crate. By re-exporting these items, we provide a clear and
//! consistent interface for working with query filters within the domain layer, while encapsulating
//! the underlying implementation details remain in the `entity_api` crate.
pub use entity_api::{
    mutate::{IntoUpdateMap, UpdateMap},
    query::{IntoQueryFilterMap, QuerySort},
    QueryFilterMap,
};

// Re-exports from `entity` crate via `entity_api`
pub use entity_api::{
    applications, contact_submissions, event_registrations, events, hero_banners, media_assets,
    mentors, programs, startups, user_roles, users, Id,
};

#[cfg(feature = "mock")]
pub use entity_api::db_errors;

pub use entity::{
    application_status, contact_status, event_type, program_category, roles, startup_status,
};

pub mod application;
pub mod contact_submission;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod event_registration;
pub mod hero_banner;
pub mod media_asset;
pub mod mentor;
pub mod program;
pub mod site;
pub mod startup;
pub mod user;
pub mod validation;

/// Keeps only the `allowed` columns of an update. An update that touches none
/// of them is rejected.
pub(crate) fn only_columns(
    mut update_map: UpdateMap,
    allowed: &[&str],
) -> Result<UpdateMap, error::Error> {
    let mut restricted = UpdateMap::new();
    for column in allowed {
        if let Some(value) = update_map.remove(column) {
            restricted.insert((*column).to_string(), Some(value));
        }
    }
    if restricted.is_empty() {
        return Err(error::Error::validation(format!(
            "expected at least one of: {}",
            allowed.join(", ")
        )));
    }
    Ok(restricted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Value;

    #[test]
    fn only_columns_drops_everything_else() {
        let mut map = UpdateMap::new();
        map.insert("is_public".to_string(), Some(Value::Bool(Some(true))));
        map.insert("status".to_string(), Some(Value::Bool(Some(true))));

        let restricted = only_columns(map, &["is_public", "is_featured"]).unwrap();

        assert!(restricted.get("is_public").is_some());
        assert!(restricted.get("status").is_none());
    }

    #[test]
    fn only_columns_rejects_an_empty_update() {
        assert!(only_columns(UpdateMap::new(), &["is_active"]).is_err());
    }
}
