//! Search and tag filtering over the fetched catalog
//!
//! A record passes when it satisfies both predicates:
//!
//! - **Text**: the query is empty, or its lowercase form is a substring of the
//!   lowercase name, description, or raw tag string.
//! - **Tags**: no tag is selected, or every selected tag (lowercased) is a
//!   substring of the lowercase raw tag string.
//!
//! Tag matching is substring containment, not membership: selecting `a`
//! also matches a record tagged `api`. Existing catalog users see that
//! behavior today, so it is kept as is.

use crate::model::ProtocolRecord;

/// Free-text query plus selected facet tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    query: String,
    selected_tags: Vec<String>,
}

impl CatalogFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.select(tag.into());
        }
        self
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[must_use]
    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    #[must_use]
    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    /// Add a tag to the selection; selecting twice is a no-op
    pub fn select(&mut self, tag: String) {
        if !self.is_selected(&tag) {
            self.selected_tags.push(tag);
        }
    }

    /// Select the tag if absent, deselect it if present
    pub fn toggle(&mut self, tag: &str) {
        if self.is_selected(tag) {
            self.selected_tags.retain(|t| t != tag);
        } else {
            self.selected_tags.push(tag.to_string());
        }
    }

    /// True when neither a query nor a tag narrows the catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.selected_tags.is_empty()
    }

    #[must_use]
    pub fn matches_text(&self, record: &ProtocolRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.description.to_lowercase().contains(&needle)
            || record
                .tags
                .as_deref()
                .is_some_and(|tags| tags.to_lowercase().contains(&needle))
    }

    #[must_use]
    pub fn matches_tags(&self, record: &ProtocolRecord) -> bool {
        if self.selected_tags.is_empty() {
            return true;
        }
        let Some(tags) = record.tags.as_deref() else {
            return false;
        };
        let haystack = tags.to_lowercase();
        self.selected_tags
            .iter()
            .all(|tag| haystack.contains(&tag.to_lowercase()))
    }

    #[must_use]
    pub fn matches(&self, record: &ProtocolRecord) -> bool {
        self.matches_text(record) && self.matches_tags(record)
    }

    /// Matching records in their original relative order
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [ProtocolRecord]) -> Vec<&'a ProtocolRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}
