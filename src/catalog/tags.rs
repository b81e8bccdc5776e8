//! Facet tag index
//!
//! Tags are rendered as filter chips in the order they are first seen across
//! the catalog, so the index is a list, not a sorted set.

use crate::model::{ProtocolRecord, split_tags};

/// Deduplicated facet tags in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: Vec<String>,
}

impl TagIndex {
    /// Build the index from records in catalog order
    #[must_use]
    pub fn build(records: &[ProtocolRecord]) -> Self {
        let mut tags: Vec<String> = Vec::new();
        for raw in records.iter().filter_map(|record| record.tags.as_deref()) {
            for tag in split_tags(raw) {
                if !tags.iter().any(|seen| seen == tag) {
                    tags.push(tag.to_string());
                }
            }
        }
        Self { tags }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|seen| seen == tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
