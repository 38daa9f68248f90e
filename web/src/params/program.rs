use sea_orm::Order;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::sort::SortOrder;
use domain::{
    program_category::ProgramCategory, programs, IntoQueryFilterMap, QueryFilterMap, QuerySort,
};

/// Sortable fields for programs
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = "name")]
pub(crate) enum SortField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "created_at")]
    CreatedAt,
    #[serde(rename = "updated_at")]
    UpdatedAt,
}

/// Query for the admin program list
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

impl QuerySort<programs::Column> for IndexParams {
    fn get_sort_column(&self) -> Option<programs::Column> {
        self.sort_by.as_ref().map(|field| match field {
            SortField::Name => programs::Column::Name,
            SortField::CreatedAt => programs::Column::CreatedAt,
            SortField::UpdatedAt => programs::Column::UpdatedAt,
        })
    }

    fn get_sort_order(&self) -> Option<Order> {
        self.sort_order.as_ref().map(Order::from)
    }
}

/// Query for the public program list
#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct PublicParams {
    pub(crate) category: Option<ProgramCategory>,
}
