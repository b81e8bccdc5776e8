//! Testing utilities for protodir
//!
//! Fixtures for rows and records, a store that always fails, and a
//! `TestStore` wrapper for a throwaway sled store.
//!
//! Only available when compiled with `cfg(test)`.

use crate::model::{NewProtocolRow, ProtocolId, ProtocolRecord, ProtocolRow, ProtocolStatus};
use crate::store::{RecordStore, RowQuery, SledStore, StoreError};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::path::Path;
use tempfile::TempDir;

/// Creation time of the fixture with id 0; later ids are one minute apart
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

/// An approved row whose `created_at` grows with `id`
pub fn approved_row(id: u64, name: &str, tags: Option<&str>) -> ProtocolRow {
    ProtocolRow {
        id: ProtocolId(id),
        name: name.to_string(),
        description: "An agent-to-agent protocol".to_string(),
        features: "Streaming\nDiscovery".to_string(),
        tags: tags.map(str::to_string),
        github_url: None,
        created_by: "Example Labs".to_string(),
        contact_email: Some("team@example.com".to_string()),
        website_link: None,
        logo_url: None,
        status: ProtocolStatus::Approved,
        created_at: base_time() + Duration::minutes(i64::try_from(id).unwrap()),
        updated_at: None,
    }
}

pub fn pending_row(id: u64, name: &str, tags: Option<&str>) -> ProtocolRow {
    ProtocolRow {
        status: ProtocolStatus::Pending,
        ..approved_row(id, name, tags)
    }
}

/// An approved record, as the mapper would produce it
pub fn record(id: u64, name: &str, tags: Option<&str>) -> ProtocolRecord {
    approved_row(id, name, tags).into()
}

/// A pending insert with the mandatory columns filled in
pub fn new_row(name: &str) -> NewProtocolRow {
    NewProtocolRow {
        name: name.to_string(),
        description: "An agent-to-agent protocol".to_string(),
        features: "Streaming".to_string(),
        tags: None,
        github_url: None,
        created_by: "Example Labs".to_string(),
        contact_email: Some("team@example.com".to_string()),
        website_link: None,
        logo_url: None,
        status: ProtocolStatus::Pending,
    }
}

/// Store whose every call fails with `StoreError::Unavailable`
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Unavailable(self.message.clone())
    }
}

impl RecordStore for FailingStore {
    fn select(&self, _query: &RowQuery) -> Result<Vec<ProtocolRow>, StoreError> {
        Err(self.error())
    }

    fn insert(&self, _row: NewProtocolRow) -> Result<ProtocolRow, StoreError> {
        Err(self.error())
    }

    fn set_status(&self, _id: ProtocolId, _status: ProtocolStatus) -> Result<ProtocolRow, StoreError> {
        Err(self.error())
    }
}

/// Wrapper for a temporary sled store that is removed on drop
pub struct TestStore {
    // Field order matters: the store must close before the directory goes.
    store: SledStore,
    dir: TempDir,
}

impl TestStore {
    /// # Panics
    /// Panics if the temporary directory or the store cannot be created.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = SledStore::open(dir.path().join("store")).expect("Failed to open test store");
        Self { store, dir }
    }

    pub const fn store(&self) -> &SledStore {
        &self.store
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
