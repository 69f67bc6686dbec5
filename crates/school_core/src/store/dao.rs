//! Generic access object over one named collection.
//!
//! # Responsibility
//! - Upsert, delete, look up and list typed records by `id`.
//! - Encode records as JSON documents keyed by their id.
//!
//! # Invariants
//! - `save` is an upsert inside one write transaction.
//! - `delete` of an absent id succeeds and changes nothing.
//! - `get_all` returns rows in primary-key order.

use super::{Collection, Store, StoreError, StoreResult};
use crate::model::additional_service::AdditionalService;
use crate::model::course::Course;
use crate::model::student::Student;
use log::{debug, warn};
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

/// Entity that can be persisted into a named collection.
pub trait Record: Serialize + DeserializeOwned + Send + 'static {
    const COLLECTION: Collection;

    fn record_id(&self) -> &str;
}

impl Record for Student {
    const COLLECTION: Collection = Collection::Students;

    fn record_id(&self) -> &str {
        self.id()
    }
}

impl Record for Course {
    const COLLECTION: Collection = Collection::Courses;

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for AdditionalService {
    const COLLECTION: Collection = Collection::Services;

    fn record_id(&self) -> &str {
        &self.id
    }
}

/// Async CRUD gateway bound to `T::COLLECTION`.
pub struct Dao<T: Record> {
    store: Arc<Store>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Dao<T> {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Inserts `entity`, replacing any record with the same id.
    pub async fn save(&self, entity: &T) -> StoreResult<()> {
        let id = entity.record_id().to_string();
        let body = serde_json::to_string(entity)?;
        let sql = format!(
            "INSERT INTO {} (id, body) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET body = excluded.body;",
            T::COLLECTION.name()
        );

        let log_id = id.clone();
        let result = self
            .store
            .run(move |conn| {
                let tx = conn.transaction()?;
                tx.execute(&sql, params![id, body])?;
                tx.commit()?;
                Ok(())
            })
            .await;
        log_outcome("dao_save", T::COLLECTION, &log_id, &result);
        result
    }

    /// Removes the record with `id` if present.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1;", T::COLLECTION.name());
        let key = id.to_string();

        let result = self
            .store
            .run(move |conn| {
                let tx = conn.transaction()?;
                tx.execute(&sql, [key])?;
                tx.commit()?;
                Ok(())
            })
            .await;
        log_outcome("dao_delete", T::COLLECTION, id, &result);
        result
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<T>> {
        let sql = format!("SELECT body FROM {} WHERE id = ?1;", T::COLLECTION.name());
        let key = id.to_string();

        let body = self
            .store
            .run(move |conn| {
                let body = conn
                    .query_row(&sql, [key], |row| row.get::<_, String>(0))
                    .optional()?;
                Ok(body)
            })
            .await?;

        body.map(|text| serde_json::from_str::<T>(&text))
            .transpose()
            .map_err(StoreError::from)
    }

    /// Every record in the collection, in primary-key order.
    pub async fn get_all(&self) -> StoreResult<Vec<T>> {
        let sql = format!("SELECT body FROM {} ORDER BY id;", T::COLLECTION.name());

        let bodies = self
            .store
            .run(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
                let mut bodies = Vec::new();
                for row in rows {
                    bodies.push(row?);
                }
                Ok(bodies)
            })
            .await?;

        debug!(
            "event=dao_get_all module=store status=ok collection={} count={}",
            T::COLLECTION,
            bodies.len()
        );
        bodies
            .iter()
            .map(|text| serde_json::from_str::<T>(text).map_err(StoreError::from))
            .collect()
    }

    /// Records matching `keep`, scanned from `get_all()`.
    pub async fn filter(&self, keep: impl Fn(&T) -> bool) -> StoreResult<Vec<T>> {
        let mut records = self.get_all().await?;
        records.retain(|record| keep(record));
        Ok(records)
    }
}

fn log_outcome(event: &str, collection: Collection, id: &str, result: &StoreResult<()>) {
    match result {
        Ok(()) => debug!("event={event} module=store status=ok collection={collection} id={id}"),
        Err(err) => warn!(
            "event={event} module=store status=error collection={collection} id={id} error={err}"
        ),
    }
}
