use sea_orm::{Order, Value};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::sort::SortOrder;
use domain::{
    contact_status::ContactStatus, contact_submissions, IntoQueryFilterMap, QueryFilterMap,
    QuerySort,
};

/// Sortable fields for the contact inbox
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = "created_at")]
pub(crate) enum SortField {
    #[serde(rename = "created_at")]
    CreatedAt,
    #[serde(rename = "subject")]
    Subject,
}

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    pub(crate) status: Option<ContactStatus>,
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
        query_filter_map
    }
}

impl QuerySort<contact_submissions::Column> for IndexParams {
    fn get_sort_column(&self) -> Option<contact_submissions::Column> {
        self.sort_by.as_ref().map(|field| match field {
            SortField::CreatedAt => contact_submissions::Column::CreatedAt,
            SortField::Subject => contact_submissions::Column::Subject,
        })
    }

    fn get_sort_order(&self) -> Option<Order> {
        self.sort_order.as_ref().map(Order::from)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = ContactStatusParams)]
pub(crate) struct StatusParams {
    pub(crate) status: ContactStatus,
}
