//! Persistent store backed by sled
//!
//! Uses a single sled tree:
//! - `protocols`: big-endian `ProtocolId` -> bincode-encoded `ProtocolRow`
//!
//! Ids come from sled's monotonic id generator, so key order is creation
//! order and an unordered scan returns rows oldest first.

use super::{RecordStore, RowQuery, StoreError};
use crate::model::{NewProtocolRow, ProtocolId, ProtocolRow, ProtocolStatus};
use chrono::Utc;
use sled::{Db, Tree};
use std::path::Path;
use tracing::debug;

fn encode(row: &ProtocolRow) -> Result<Vec<u8>, StoreError> {
    Ok(bincode::serde::encode_to_vec(row, bincode::config::standard())?)
}

fn decode(bytes: &[u8]) -> Result<ProtocolRow, StoreError> {
    let (row, _): (ProtocolRow, usize) =
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
    Ok(row)
}

/// sled-backed `protocols` table
pub struct SledStore {
    db: Db,
    protocols: Tree,
}

impl SledStore {
    /// Opens or creates a store at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use protodir::store::SledStore;
    /// let store = SledStore::open("directory_db").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database or its tree cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path.as_ref())?;
        let protocols = db.open_tree("protocols")?;
        debug!(path = %path.as_ref().display(), rows = protocols.len(), "opened protocol store");
        Ok(Self { db, protocols })
    }

    /// Get one row by id
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read or decoding fails.
    pub fn get(&self, id: ProtocolId) -> Result<Option<ProtocolRow>, StoreError> {
        match self.protocols.get(id.to_key())? {
            Some(value) => Ok(Some(decode(&value)?)),
            None => Ok(None),
        }
    }

    /// All rows in creation order
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if iteration or decoding fails.
    pub fn list_all(&self) -> Result<Vec<ProtocolRow>, StoreError> {
        let mut rows = Vec::new();
        for result in &self.protocols {
            let (_, value) = result?;
            rows.push(decode(&value)?);
        }
        Ok(rows)
    }

    /// Get the number of rows in the store
    #[must_use]
    pub fn count(&self) -> usize {
        self.protocols.len()
    }

    /// Flush all pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the flush operation fails.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }

    /// Remove every row
    ///
    /// # Warning
    /// This operation is irreversible!
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if clearing the tree fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.protocols.clear()?;
        Ok(())
    }

    fn put(&self, row: &ProtocolRow) -> Result<(), StoreError> {
        self.protocols.insert(row.id.to_key(), encode(row)?)?;
        Ok(())
    }
}

impl RecordStore for SledStore {
    fn select(&self, query: &RowQuery) -> Result<Vec<ProtocolRow>, StoreError> {
        let rows = self.list_all()?;
        Ok(query.apply(rows))
    }

    fn insert(&self, row: NewProtocolRow) -> Result<ProtocolRow, StoreError> {
        let id = ProtocolId(self.db.generate_id()?);
        let stored = row.into_row(id, Utc::now());
        self.put(&stored)?;
        debug!(%id, name = %stored.name, status = %stored.status, "inserted protocol row");
        Ok(stored)
    }

    fn set_status(&self, id: ProtocolId, status: ProtocolStatus) -> Result<ProtocolRow, StoreError> {
        let mut row = self.get(id)?.ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        row.status = status;
        row.updated_at = Some(Utc::now());
        self.put(&row)?;
        debug!(%id, %status, "changed protocol status");
        Ok(row)
    }
}

impl Drop for SledStore {
    fn drop(&mut self) {
        // Best-effort flush; callers needing durability call flush() themselves.
        let _ = self.db.flush();
    }
}
