//! Protocol data model
//!
//! Two shapes describe the same listing:
//!
//! - **`ProtocolRow`**: the storage shape, one row of the `protocols` table with
//!   storage-case column names (`github_url`, `created_by`, ...)
//! - **`ProtocolRecord`**: the display shape used by every catalog view
//!
//! The [`mapper`] module converts between the two. Rows are the only thing the
//! store ever returns; records are the only thing views ever see.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod mapper;
pub mod row;

pub use row::{NewProtocolRow, ProtocolRow};

/// Opaque identifier assigned by the store when a row is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolId(pub u64);

impl ProtocolId {
    /// Big-endian key bytes, so store iteration follows creation order
    #[must_use]
    pub const fn to_key(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProtocolId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Moderation status of a listing
///
/// Only `Approved` listings are ever shown by catalog views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolStatus {
    /// Submitted and waiting for a moderator
    #[default]
    Pending,
    /// Publicly visible
    Approved,
}

impl ProtocolStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }

    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for ProtocolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            other => Err(format!("unknown protocol status '{other}'")),
        }
    }
}

/// A protocol listing as the catalog views see it
///
/// `tags` and `features` keep their delimited wire form so that search can
/// match against the raw strings; use [`ProtocolRecord::tag_list`] and
/// [`ProtocolRecord::feature_list`] for the split views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolRecord {
    pub id: ProtocolId,
    pub name: String,
    pub description: String,
    pub features: String,
    pub tags: Option<String>,
    pub github_url: Option<String>,
    pub website_link: Option<String>,
    pub contact_email: Option<String>,
    pub logo_url: Option<String>,
    pub created_by: String,
    pub status: ProtocolStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProtocolRecord {
    /// Tags split on `,` and trimmed, empty pieces dropped
    #[must_use]
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(split_tags)
            .unwrap_or_default()
    }

    /// Features as individual lines
    ///
    /// Features are split on newlines. A single line that still contains
    /// commas is treated as a comma-separated list instead.
    #[must_use]
    pub fn feature_list(&self) -> Vec<&str> {
        let lines: Vec<&str> = self
            .features
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() == 1 && lines[0].contains(',') {
            return split_tags(lines[0]);
        }
        lines
    }

    /// Whether catalog views may show this record
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.status.is_public()
    }

    /// Timestamp used for sitemap freshness
    #[must_use]
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

/// Split a comma-delimited label string, trimming and dropping empty pieces
#[must_use]
pub fn split_tags(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect()
}
