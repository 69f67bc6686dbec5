//! Lazily opened, shared store handle.
//!
//! # Invariants
//! - Concurrent `open()` calls share one in-flight initialization.
//! - Blocking SQLite work never runs on an async worker thread.

use super::{StoreError, StoreResult};
use crate::db::{open_db, open_db_in_memory};
use log::{debug, info};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;

/// Where the school database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    /// Private to one `Store`; contents vanish with it.
    Memory,
}

impl StoreLocation {
    fn connect(&self) -> StoreResult<Connection> {
        match self {
            Self::File(path) => open_db(path),
            Self::Memory => open_db_in_memory(),
        }
    }

    fn mode(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Memory => "memory",
        }
    }
}

type SharedConnection = Arc<Mutex<Connection>>;

/// Handle to the school database, shared by every `Dao`.
pub struct Store {
    location: StoreLocation,
    conn: OnceCell<SharedConnection>,
    opened: AtomicUsize,
}

impl Store {
    /// Creates an unopened handle. No I/O happens until `open()`.
    pub fn new(location: StoreLocation) -> Self {
        Self {
            location,
            conn: OnceCell::new(),
            opened: AtomicUsize::new(0),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(StoreLocation::Memory)
    }

    /// Opens the database once; later calls reuse the same connection.
    pub async fn open(&self) -> StoreResult<()> {
        self.conn
            .get_or_try_init(|| async {
                let location = self.location.clone();
                let conn = tokio::task::spawn_blocking(move || location.connect()).await??;
                self.opened.fetch_add(1, Ordering::SeqCst);
                info!(
                    "event=store_open module=store status=ok mode={}",
                    self.location.mode()
                );
                Ok::<_, StoreError>(Arc::new(Mutex::new(conn)))
            })
            .await?;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.conn.initialized()
    }

    /// Number of underlying connections this handle has opened (0 or 1).
    pub fn connections_opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Runs `op` against the connection on the blocking pool.
    ///
    /// Fails with `NotInitialized` when `open()` has not completed.
    pub(crate) async fn run<R, F>(&self, op: F) -> StoreResult<R>
    where
        F: FnOnce(&mut Connection) -> StoreResult<R> + Send + 'static,
        R: Send + 'static,
    {
        let conn = self.conn.get().cloned().ok_or_else(|| {
            debug!("event=store_run module=store status=error error_code=not_initialized");
            StoreError::NotInitialized
        })?;

        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().map_err(|_| StoreError::Poisoned)?;
            op(&mut *guard)
        })
        .await?
    }
}
