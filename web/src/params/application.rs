use sea_orm::{Order, Value};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::sort::SortOrder;
use domain::{
    application_status::ApplicationStatus, applications, Id, IntoQueryFilterMap, QueryFilterMap,
    QuerySort,
};

/// Sortable fields for applications
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = "created_at")]
pub(crate) enum SortField {
    #[serde(rename = "created_at")]
    CreatedAt,
    #[serde(rename = "startup_name")]
    StartupName,
    #[serde(rename = "status")]
    Status,
}

/// Query for the admin review queue
#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    pub(crate) status: Option<ApplicationStatus>,
    #[param(value_type = Option<String>, format = Uuid)]
    pub(crate) program_id: Option<Id>,
    pub(crate) sort_by: Option<SortField>,
    pub(crate) sort_order: Option<SortOrder>,
}

impl IntoQueryFilterMap for IndexParams {
    fn into_query_filter_map(self) -> QueryFilterMap {
        let mut query_filter_map = QueryFilterMap::new();
        if let Some(status) = self.status {
            query_filter_map.insert(
                "status".to_string(),
                Some(Value::String(Some(Box::new(status.to_string())))),
            );
        }
        if let Some(program_id) = self.program_id {
            query_filter_map.insert(
                "program_id".to_string(),
                Some(Value::Uuid(Some(Box::new(program_id)))),
            );
        }
        query_filter_map
    }
}

impl QuerySort<applications::Column> for IndexParams {
    fn get_sort_column(&self) -> Option<applications::Column> {
        self.sort_by.as_ref().map(|field| match field {
            SortField::CreatedAt => applications::Column::CreatedAt,
            SortField::StartupName => applications::Column::StartupName,
            SortField::Status => applications::Column::Status,
        })
    }

    fn get_sort_order(&self) -> Option<Order> {
        self.sort_order.as_ref().map(Order::from)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = ApplicationStatusParams)]
pub(crate) struct StatusParams {
    pub(crate) status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_given_filters_reach_the_query() {
        let program_id = Id::new_v4();
        let params = IndexParams {
            status: Some(ApplicationStatus::UnderReview),
            program_id: Some(program_id),
            sort_by: None,
            sort_order: None,
        };
        let query_filter_map = params.into_query_filter_map();

        assert_eq!(
            query_filter_map.get("status"),
            Some(Value::String(Some(Box::new("under_review".to_string()))))
        );
        assert_eq!(
            query_filter_map.get("program_id"),
            Some(Value::Uuid(Some(Box::new(program_id))))
        );
    }

    #[test]
    fn sort_order_without_field_leaves_column_unset() {
        let params = IndexParams {
            status: None,
            program_id: None,
            sort_by: None,
            sort_order: Some(SortOrder::Desc),
        };
        assert!(params.get_sort_column().is_none());
        assert_eq!(params.get_sort_order(), Some(Order::Desc));
    }
}
