use crate::{error::Error, QueryFilterMap};
use sea_orm::strum::IntoEnumIterator;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
};

pub use crate::IntoQueryFilterMap;

/// Lets a parameter struct choose which column, and in which direction, a
/// collection is ordered by.
pub trait QuerySort<C: ColumnTrait> {
    fn get_sort_column(&self) -> Option<C>;
    fn get_sort_order(&self) -> Option<Order>;
}

/// The `limit` newest records of `E`, ordered by `created_at` descending.
pub async fn find_newest<E, C>(
    db: &impl ConnectionTrait,
    created_at: C,
    limit: u64,
) -> Result<Vec<E::Model>, Error>
where
    E: EntityTrait<Column = C>,
    C: ColumnTrait,
{
    Ok(E::find()
        .order_by_desc(created_at)
        .limit(limit)
        .all(db)
        .await?)
}

/// Find all records of an entity by the given query filter map, ordering the
/// result by `sort` when given.
pub async fn find_by_sorted<E, C>(
    db: &impl ConnectionTrait,
    query_filter_map: QueryFilterMap,
    sort: Option<(C, Order)>,
) -> Result<Vec<E::Model>, Error>
where
    E: EntityTrait<Column = C>,
    C: ColumnTrait + IntoEnumIterator,
{
    let mut query = E::find();

    // We iterate through the entity's defined columns so that we only attempt
    // to filter by columns that exist.
    for column in C::iter() {
        if let Some(value) = query_filter_map.get(&column.to_string()) {
            query = query.filter(column.eq(value));
        }
    }

    if let Some((column, order)) = sort {
        query = query.order_by(column, order);
    }

    Ok(query.all(db).await?)
}

/// Runs [`find_by_sorted`] for a parameter struct that carries both filters and
/// a sort choice, falling back to `default_sort` when the caller gave none.
pub async fn find_with_params<E, C, P>(
    db: &impl ConnectionTrait,
    params: P,
    default_sort: (C, Order),
) -> Result<Vec<E::Model>, Error>
where
    E: EntityTrait<Column = C>,
    C: ColumnTrait + IntoEnumIterator,
    P: IntoQueryFilterMap + QuerySort<C>,
{
    let sort = match params.get_sort_column() {
        Some(column) => (column, params.get_sort_order().unwrap_or(Order::Asc)),
        None => default_sort,
    };
    find_by_sorted::<E, C>(db, params.into_query_filter_map(), Some(sort)).await
}
