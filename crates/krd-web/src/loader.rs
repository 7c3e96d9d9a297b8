//! Per-request record loading.
//!
//! A [`Loader`] owns the mount scope of one page render. Fetches run on the
//! blocking pool and land in slots of that scope, so a fetch that finishes
//! after the request was dropped, or after a newer fetch on the same slot,
//! is discarded.

use krd_core::normalize::{Shape, normalize_as};
use krd_core::record::Record;
use krd_core::scope::{Scope, Slot};
use krd_core::source::{DEFAULT_VIEW, RecordSource};
use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct Loader {
    source: Arc<dyn RecordSource>,
    scope: Scope,
}

impl Loader {
    pub fn mount(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            scope: Scope::mount(),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn slot(&self) -> Slot<Vec<Record>> {
        self.scope.slot()
    }

    /// Issues a fetch of `table` into `slot`. The task resolves to whether
    /// its result was applied.
    pub fn spawn_fetch(&self, slot: &Slot<Vec<Record>>, table: &str) -> JoinHandle<bool> {
        let ticket = slot.begin();
        let slot = slot.clone();
        let source = Arc::clone(&self.source);
        let table = table.to_string();
        tokio::task::spawn_blocking(move || {
            let records = source.fetch(&table, DEFAULT_VIEW);
            slot.settle(ticket, records)
        })
    }

    /// Fetches `table` and keeps the records that fit `T`.
    pub async fn load<T: Shape>(&self, table: &str) -> Vec<T> {
        let slot = self.slot();
        match self.spawn_fetch(&slot, table).await {
            Ok(true) => normalize_as(slot.take().unwrap_or_default()),
            Ok(false) => Vec::new(),
            Err(err) => {
                tracing::error!(table, error = %err, "record fetch task failed");
                Vec::new()
            }
        }
    }
}
