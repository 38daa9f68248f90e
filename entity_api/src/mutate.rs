use crate::error::Error;
use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, Value,
};
use std::collections::HashMap;

const UPDATED_AT: &str = "updated_at";

/// Applies a partial update to an existing record.
///
/// Only the columns named in `update_map` are written; every other field keeps
/// its stored value. When the entity has an `updated_at` column and the map
/// does not set it explicitly, it is stamped with the current time.
///
/// This backs the admin toggles (mentor visibility, startup featured flag, etc.)
/// where the client sends just the fields being flipped.
pub async fn update<A, C>(
    db: &impl ConnectionTrait,
    mut active_model: A,
    mut update_map: UpdateMap,
) -> Result<<A::Entity as EntityTrait>::Model, Error>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    C: ColumnTrait,
    A::Entity: EntityTrait<Column = C>,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    if update_map.get(UPDATED_AT).is_none() {
        update_map.insert(
            UPDATED_AT.to_string(),
            Some(Value::ChronoDateTimeWithTimeZone(Some(Box::new(
                Utc::now().into(),
            )))),
        );
    }

    for column in C::iter() {
        if let Some(value) = update_map.get(&column.to_string()) {
            active_model.set(column, value.clone());
        }
    }
    Ok(active_model.update(db).await?)
}

/// Column name to new value, for partial updates.
#[derive(Default)]
pub struct UpdateMap {
    map: HashMap<String, Option<Value>>,
}

impl UpdateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value for `key`, or `None` when the key is absent or was inserted as `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key).and_then(|opt| opt.as_ref())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.map.remove(key).and_then(|opt| opt)
    }

    pub fn insert(&mut self, key: String, value: Option<Value>) {
        self.map.insert(key, value);
    }

    pub fn is_empty(&self) -> bool {
        self.map.values().all(Option::is_none)
    }
}

/// Converts a request payload into the set of columns it changes.
pub trait IntoUpdateMap {
    fn into_update_map(self) -> UpdateMap;
}
