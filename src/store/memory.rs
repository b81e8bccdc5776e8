//! In-memory store
//!
//! Keeps rows in a `Vec` behind a mutex, in insertion order. Behaves like the
//! persistent store for every query shape, which makes it the fake of choice
//! for controller and command tests.

use super::{RecordStore, RowQuery, StoreError};
use crate::model::{NewProtocolRow, ProtocolId, ProtocolRow, ProtocolStatus};
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<ProtocolRow>,
    next_id: u64,
}

/// A `protocols` table that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the table with existing rows; new ids continue after the largest one
    #[must_use]
    pub fn with_rows(rows: Vec<ProtocolRow>) -> Self {
        let next_id = rows.iter().map(|row| row.id.0 + 1).max().unwrap_or(0);
        Self {
            table: Mutex::new(Table { rows, next_id }),
        }
    }

    /// Number of rows, regardless of status
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the table lock is poisoned.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.rows.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, StoreError> {
        self.table
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }
}

impl RecordStore for MemoryStore {
    fn select(&self, query: &RowQuery) -> Result<Vec<ProtocolRow>, StoreError> {
        let table = self.lock()?;
        Ok(query.apply(table.rows.iter().cloned()))
    }

    fn insert(&self, row: NewProtocolRow) -> Result<ProtocolRow, StoreError> {
        let mut table = self.lock()?;
        let id = ProtocolId(table.next_id);
        table.next_id += 1;

        let stored = row.into_row(id, Utc::now());
        table.rows.push(stored.clone());
        Ok(stored)
    }

    fn set_status(&self, id: ProtocolId, status: ProtocolStatus) -> Result<ProtocolRow, StoreError> {
        let mut table = self.lock()?;
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        row.status = status;
        row.updated_at = Some(Utc::now());
        Ok(row.clone())
    }
}
