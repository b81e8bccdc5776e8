//! Storage-shaped rows of the `protocols` table
//!
//! Column names follow the stored schema (`snake_case`). Rows are persisted
//! with bincode in serde mode, so the field order here is the on-disk layout:
//! append new columns at the end.

use super::{ProtocolId, ProtocolStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored row, as returned by a store query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolRow {
    pub id: ProtocolId,
    pub name: String,
    pub description: String,
    pub features: String,
    pub tags: Option<String>,
    pub github_url: Option<String>,
    pub created_by: String,
    pub contact_email: Option<String>,
    pub website_link: Option<String>,
    pub logo_url: Option<String>,
    pub status: ProtocolStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Column values for an insert; the store assigns `id` and timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProtocolRow {
    pub name: String,
    pub description: String,
    pub features: String,
    pub tags: Option<String>,
    pub github_url: Option<String>,
    pub created_by: String,
    pub contact_email: Option<String>,
    pub website_link: Option<String>,
    pub logo_url: Option<String>,
    pub status: ProtocolStatus,
}

impl NewProtocolRow {
    /// Materialize the row with store-assigned values
    #[must_use]
    pub fn into_row(self, id: ProtocolId, created_at: DateTime<Utc>) -> ProtocolRow {
        ProtocolRow {
            id,
            name: self.name,
            description: self.description,
            features: self.features,
            tags: self.tags,
            github_url: self.github_url,
            created_by: self.created_by,
            contact_email: self.contact_email,
            website_link: self.website_link,
            logo_url: self.logo_url,
            status: self.status,
            created_at,
            updated_at: None,
        }
    }
}
