//! Record store gateway
//!
//! The directory reads and writes a single table of protocol submissions.
//! [`RecordStore`] is the capability the rest of the crate consumes; it is
//! always passed in explicitly, never reached through a global.
//!
//! Backends:
//! - [`SledStore`]: persistent, embedded sled database
//! - [`MemoryStore`]: in-process table, used by tests and dry runs

use crate::model::{NewProtocolRow, ProtocolId, ProtocolRow, ProtocolStatus};

pub mod error;
pub mod memory;
pub mod query;
pub mod sled_store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use query::{RowQuery, SortOrder};
pub use sled_store::SledStore;

/// Row-based query capability over the `protocols` table
pub trait RecordStore {
    /// Rows matching `query`, filtered, ordered and limited
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    fn select(&self, query: &RowQuery) -> Result<Vec<ProtocolRow>, StoreError>;

    /// Insert a row and return it as stored (insert-with-returning)
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the row cannot be written.
    fn insert(&self, row: NewProtocolRow) -> Result<ProtocolRow, StoreError>;

    /// Change the moderation status of one row
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row has `id`, or another
    /// `StoreError` if the write fails.
    fn set_status(&self, id: ProtocolId, status: ProtocolStatus) -> Result<ProtocolRow, StoreError>;

    /// Exactly one row matching `query`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoRows` or `StoreError::MultipleRows` when the
    /// query does not match exactly one row.
    fn select_single(&self, query: &RowQuery) -> Result<ProtocolRow, StoreError> {
        let mut rows = self.select(query)?;
        match rows.len() {
            0 => Err(StoreError::NoRows),
            1 => Ok(rows.remove(0)),
            n => Err(StoreError::MultipleRows(n)),
        }
    }
}
