//! Row query composition
//!
//! `RowQuery` describes the handful of query shapes the directory needs from
//! its store: equality on status, inequality on id, a case-insensitive name
//! pattern, ordering by creation time, and a row limit. Backends may push the
//! query down; the embedded ones scan and call [`RowQuery::apply`].
//!
//! ```
//! use protodir::store::{RowQuery, SortOrder};
//!
//! let query = RowQuery::approved()
//!     .order_by_created(SortOrder::Descending)
//!     .limit(3);
//! assert_eq!(query.row_limit(), Some(3));
//! ```

use crate::model::{ProtocolId, ProtocolRow, ProtocolStatus};
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Direction for ordering by `created_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A composable query over the `protocols` table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowQuery {
    status: Option<ProtocolStatus>,
    exclude_id: Option<ProtocolId>,
    name_pattern: Option<String>,
    order: Option<SortOrder>,
    limit: Option<usize>,
}

impl RowQuery {
    /// Query matching every row
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Query matching publicly visible rows only
    #[must_use]
    pub fn approved() -> Self {
        Self::new().eq_status(ProtocolStatus::Approved)
    }

    /// `status = <status>`
    #[must_use]
    pub const fn eq_status(mut self, status: ProtocolStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// `id <> <id>`
    #[must_use]
    pub const fn neq_id(mut self, id: ProtocolId) -> Self {
        self.exclude_id = Some(id);
        self
    }

    /// `name ILIKE <pattern>`; `%` matches any run, `_` any single character
    #[must_use]
    pub fn ilike_name(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = Some(pattern.into());
        self
    }

    /// `ORDER BY created_at <order>`
    #[must_use]
    pub const fn order_by_created(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// `LIMIT <n>`
    #[must_use]
    pub const fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    #[must_use]
    pub const fn row_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Whether a single row satisfies the filter part of the query
    #[must_use]
    pub fn matches(&self, row: &ProtocolRow) -> bool {
        match self.name_matcher() {
            Ok(matcher) => self.matches_with(matcher.as_ref(), row),
            Err(_) => false,
        }
    }

    fn name_matcher(&self) -> Result<Option<Regex>, regex::Error> {
        self.name_pattern.as_deref().map(like_matcher).transpose()
    }

    fn matches_with(&self, name: Option<&Regex>, row: &ProtocolRow) -> bool {
        if self.status.is_some_and(|status| row.status != status) {
            return false;
        }
        if self.exclude_id.is_some_and(|id| row.id == id) {
            return false;
        }
        name.is_none_or(|matcher| matcher.is_match(&row.name))
    }

    /// Filter, order and limit rows given in storage order
    ///
    /// Rows created at the same instant are ordered by id in the same
    /// direction, so "newest first" also puts the later insert first.
    #[must_use]
    pub fn apply(&self, rows: impl IntoIterator<Item = ProtocolRow>) -> Vec<ProtocolRow> {
        let name = match self.name_matcher() {
            Ok(name) => name,
            Err(err) => {
                warn!(error = %err, "name pattern does not compile, matching nothing");
                return Vec::new();
            }
        };
        let mut selected: Vec<ProtocolRow> = rows
            .into_iter()
            .filter(|row| self.matches_with(name.as_ref(), row))
            .collect();

        match self.order {
            Some(SortOrder::Ascending) => {
                selected.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
            }
            Some(SortOrder::Descending) => {
                selected.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
            }
            None => {}
        }

        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }
        selected
    }
}

/// Translate a SQL `LIKE` pattern into an anchored regex source
///
/// `%` becomes `.*`, `_` becomes `.`, and `\x` is a literal `x`.
fn like_to_regex(pattern: &str) -> String {
    let mut source = String::from("^");
    let mut literal = String::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '%' | '_' => {
                source.push_str(&regex::escape(&literal));
                literal.clear();
                source.push_str(if c == '%' { ".*" } else { "." });
            }
            '\\' => literal.push(chars.next().unwrap_or('\\')),
            other => literal.push(other),
        }
    }
    source.push_str(&regex::escape(&literal));
    source.push('$');
    source
}

/// Compile a case-insensitive `LIKE` pattern
///
/// # Errors
///
/// Returns `regex::Error` if the translated pattern exceeds the regex size limits.
pub fn like_matcher(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&like_to_regex(pattern))
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
}

/// Case-insensitive SQL `LIKE` match; a pattern that cannot compile matches nothing
#[must_use]
pub fn ilike(pattern: &str, value: &str) -> bool {
    like_matcher(pattern).is_ok_and(|matcher| matcher.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{approved_row, pending_row};
    use chrono::Duration;

    #[test]
    fn test_ilike_exact_is_case_insensitive() {
        assert!(ilike("agent mesh", "Agent Mesh"));
        assert!(ilike("AGENT MESH", "agent mesh"));
        assert!(!ilike("agent mesh", "agent mesh v2"));
        assert!(!ilike("agent mesh v2", "agent mesh"));
    }

    #[test]
    fn test_ilike_wildcards() {
        assert!(ilike("agent%", "Agent Mesh"));
        assert!(ilike("%mesh", "Agent Mesh"));
        assert!(ilike("%ent%es%", "Agent Mesh"));
        assert!(ilike("a_ent mesh", "Agent Mesh"));
        assert!(!ilike("a_ent", "Agent Mesh"));
        assert!(ilike("%", ""));
        assert!(!ilike("_", ""));
    }

    #[test]
    fn test_ilike_escaped_wildcard_is_literal() {
        assert!(ilike("100\\%", "100%"));
        assert!(!ilike("100\\%", "1000"));
        assert!(ilike("a\\_b", "a_b"));
        assert!(!ilike("a\\_b", "axb"));
    }

    #[test]
    fn test_ilike_regex_metacharacters_are_literal() {
        assert!(ilike("a2a (beta)", "A2A (Beta)"));
        assert!(ilike("c++ bus", "C++ Bus"));
        assert!(ilike("%[rpc]%", "Mesh [RPC] v1"));
        assert!(!ilike("a.b", "axb"));
        assert!(!ilike("mesh$", "mesh"));
    }

    #[test]
    fn test_like_to_regex_translation() {
        assert_eq!(like_to_regex("a%b_c"), "^a.*b.c$");
        assert_eq!(like_to_regex("1.0\\%"), "^1\\.0%$");
    }

    #[test]
    fn test_same_instant_orders_by_id() {
        let rows: Vec<_> = (1..=3)
            .map(|i| {
                let mut row = approved_row(i, &format!("P{i}"), None);
                row.created_at = approved_row(0, "base", None).created_at;
                row
            })
            .collect();

        let newest: Vec<_> = RowQuery::approved()
            .order_by_created(SortOrder::Descending)
            .apply(rows.clone())
            .into_iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(newest, vec![3, 2, 1]);

        let oldest: Vec<_> = RowQuery::approved()
            .order_by_created(SortOrder::Ascending)
            .apply(rows)
            .into_iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(oldest, vec![1, 2, 3]);
    }

    #[test]
    fn test_status_filter() {
        let query = RowQuery::approved();
        assert!(query.matches(&approved_row(1, "A", None)));
        assert!(!query.matches(&pending_row(2, "B", None)));
    }

    #[test]
    fn test_neq_id_excludes_one_row() {
        let query = RowQuery::new().neq_id(ProtocolId(2));
        let rows = vec![approved_row(1, "A", None), approved_row(2, "B", None), approved_row(3, "C", None)];
        let ids: Vec<_> = query.apply(rows).into_iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_order_desc_and_limit() {
        let mut rows = Vec::new();
        for i in 0..5 {
            let mut row = approved_row(i, &format!("P{i}"), None);
            row.created_at += Duration::minutes(i64::try_from(i).unwrap());
            rows.push(row);
        }

        let query = RowQuery::approved().order_by_created(SortOrder::Descending).limit(3);
        let ids: Vec<_> = query.apply(rows).into_iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![4, 3, 2]);
    }

    #[test]
    fn test_unordered_keeps_storage_order() {
        let rows = vec![approved_row(9, "Z", None), approved_row(1, "A", None)];
        let ids: Vec<_> = RowQuery::new().apply(rows).into_iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![9, 1]);
    }
}
