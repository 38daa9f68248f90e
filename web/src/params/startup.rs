use sea_orm::Value;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use domain::{startup_status::StartupStatus, IntoUpdateMap, UpdateMap};

/// Query for the public startup portfolio
#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct PublicParams {
    pub(crate) sector: Option<String>,
    pub(crate) stage: Option<String>,
}

/// Body for publishing or featuring a startup. Omitted flags are left as they are.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = StartupVisibilityParams)]
pub(crate) struct VisibilityParams {
    pub(crate) is_public: Option<bool>,
    pub(crate) is_featured: Option<bool>,
}

impl IntoUpdateMap for VisibilityParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        update_map.insert(
            "is_public".to_string(),
            self.is_public.map(|is_public| Value::Bool(Some(is_public))),
        );
        update_map.insert(
            "is_featured".to_string(),
            self.is_featured
                .map(|is_featured| Value::Bool(Some(is_featured))),
        );
        update_map
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = StartupStatusParams)]
pub(crate) struct StatusParams {
    pub(crate) status: StartupStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_params_only_map_the_flags_sent() {
        let update_map = VisibilityParams {
            is_public: Some(true),
            is_featured: None,
        }
        .into_update_map();

        assert_eq!(update_map.get("is_public"), Some(&Value::Bool(Some(true))));
        assert!(update_map.get("is_featured").is_none());
    }

    #[test]
    fn empty_visibility_params_produce_an_empty_update() {
        let update_map = VisibilityParams {
            is_public: None,
            is_featured: None,
        }
        .into_update_map();

        assert!(update_map.is_empty());
    }
}
