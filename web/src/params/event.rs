use sea_orm::Order;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::sort::SortOrder;
use domain::{events, IntoQueryFilterMap, QueryFilterMap, QuerySort};

/// Sortable fields for events
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = "date")]
pub(crate) enum SortField {
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "created_at")]
    CreatedAt,
}

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    pub(crate) sort_by: Option<SortField>,
    pub(crate) sort_order: Option<SortOrder>,
}

impl IntoQueryFilterMap for IndexParams {
    fn into_query_filter_map(self) -> QueryFilterMap {
        QueryFilterMap::new()
    }
}

impl QuerySort<events::Column> for IndexParams {
    fn get_sort_column(&self) -> Option<events::Column> {
        self.sort_by.as_ref().map(|field| match field {
            SortField::Date => events::Column::Date,
            SortField::Title => events::Column::Title,
            SortField::CreatedAt => events::Column::CreatedAt,
        })
    }

    fn get_sort_order(&self) -> Option<Order> {
        self.sort_order.as_ref().map(Order::from)
    }
}

/// Query for the public event calendar
#[derive(Debug, Default, Deserialize, IntoParams)]
pub(crate) struct PublicParams {
    /// Only events dated today or later
    #[serde(default)]
    pub(crate) upcoming: bool,
}
