use sea_orm::Value;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use domain::{IntoUpdateMap, UpdateMap};

/// Query for the public mentor directory
#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct PublicParams {
    /// Keep only mentors listing this area of expertise (case-insensitive)
    pub(crate) expertise: Option<String>,
}

/// Body for showing or hiding a mentor in the public directory
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = MentorVisibilityParams)]
pub(crate) struct VisibilityParams {
    pub(crate) is_active: Option<bool>,
}

impl IntoUpdateMap for VisibilityParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        update_map.insert(
            "is_active".to_string(),
            self.is_active.map(|is_active| Value::Bool(Some(is_active))),
        );
        update_map
    }
}
