//! Catalog browse session
//!
//! Provides a stateful API over one fetch of the catalog:
//! ```
//! use protodir::catalog::{CatalogController, CatalogPhase};
//! use protodir::store::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let mut catalog = CatalogController::default();
//! catalog.load(&store);
//!
//! assert_eq!(catalog.phase(), &CatalogPhase::Ready);
//! catalog.search("mesh");
//! let view = catalog.view().unwrap();
//! assert!(view.items.is_empty());
//! ```
//!
//! The controller starts in `Loading`, moves once to `Ready` or `Failed`, and
//! never goes back. Every read recomputes the filtered page from the full set.

use super::error::CatalogError;
use super::fetch_approved;
use super::filter::CatalogFilter;
use super::paginate::{PageItem, Paginator, page_range};
use super::tags::TagIndex;
use crate::model::ProtocolRecord;
use crate::store::RecordStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, warn};

/// Lifecycle of a browse session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogPhase {
    /// Fetch in flight; render placeholders
    Loading,
    /// Catalog fetched, possibly empty
    Ready,
    /// Fetch failed; terminal until a new session is created
    Failed(String),
}

/// One-shot message for the user, raised when a fetch fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

/// Why a page has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The catalog itself is empty
    NoSubmissions,
    /// The catalog has listings, but none pass the current filters
    NoMatches,
}

impl EmptyState {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoSubmissions => "No protocols have been submitted yet. Be the first to submit one!",
            Self::NoMatches => "No protocols match your current search criteria. Try adjusting your filters.",
        }
    }
}

/// What a browse page renders for the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    pub items: Vec<&'a ProtocolRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub page_bar: Vec<PageItem>,
    pub has_previous: bool,
    pub has_next: bool,
    pub empty: Option<EmptyState>,
}

/// Shared flag telling a pending fetch whether its consumer still exists
///
/// Cloned handles observe the same flag. Once released it stays released.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Liveness {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Browse session state: fetched catalog, facet index, filters and page
#[derive(Debug)]
pub struct CatalogController {
    phase: CatalogPhase,
    records: Vec<ProtocolRecord>,
    tag_index: TagIndex,
    filter: CatalogFilter,
    page: usize,
    paginator: Paginator,
    liveness: Liveness,
    notification: Option<Notification>,
}

impl Default for CatalogController {
    fn default() -> Self {
        Self::new(Paginator::default())
    }
}

impl CatalogController {
    #[must_use]
    pub fn new(paginator: Paginator) -> Self {
        Self {
            phase: CatalogPhase::Loading,
            records: Vec::new(),
            tag_index: TagIndex::default(),
            filter: CatalogFilter::default(),
            page: 1,
            paginator,
            liveness: Liveness::default(),
            notification: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &CatalogPhase {
        &self.phase
    }

    /// Handle for whoever owns the pending fetch; see [`Self::resolve`]
    #[must_use]
    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    /// Mark the session as torn down; late fetch results are dropped
    pub fn dispose(&self) {
        self.liveness.release();
    }

    /// Fetch the approved catalog from `store` and apply the result
    ///
    /// Returns whether the result was applied.
    pub fn load<S: RecordStore + ?Sized>(&mut self, store: &S) -> bool {
        let result = fetch_approved(store);
        self.resolve(result)
    }

    /// Apply a fetch result
    ///
    /// Ignored when the session has been disposed or has already left
    /// `Loading`. Returns whether the result was applied.
    pub fn resolve(&mut self, result: Result<Vec<ProtocolRecord>, CatalogError>) -> bool {
        if !self.liveness.is_alive() {
            debug!("catalog session disposed, dropping fetch result");
            return false;
        }
        if self.phase != CatalogPhase::Loading {
            warn!(phase = ?self.phase, "catalog already resolved, ignoring fetch result");
            return false;
        }

        match result {
            Ok(records) => {
                debug!(count = records.len(), "catalog fetched");
                self.tag_index = TagIndex::build(&records);
                self.records = records;
                self.phase = CatalogPhase::Ready;
            }
            Err(err) => {
                let message = err.to_string();
                error!(error = %message, "error fetching protocols");
                self.notification = Some(Notification {
                    message: message.clone(),
                });
                self.phase = CatalogPhase::Failed(message);
            }
        }
        true
    }

    /// Pending notification, handed out at most once
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// The full fetched catalog, unfiltered
    #[must_use]
    pub fn records(&self) -> &[ProtocolRecord] {
        &self.records
    }

    #[must_use]
    pub const fn tag_index(&self) -> &TagIndex {
        &self.tag_index
    }

    #[must_use]
    pub const fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Update the query text; the page is kept until the search is submitted
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    /// Submit the current query
    pub fn submit_search(&mut self) {
        self.page = 1;
    }

    /// Set and submit a query in one step
    pub fn search(&mut self, query: impl Into<String>) {
        self.set_query(query);
        self.submit_search();
    }

    /// Select or deselect a facet tag, returning to the first page
    pub fn toggle_tag(&mut self, tag: &str) {
        self.filter.toggle(tag);
        self.page = 1;
    }

    /// Jump to a page; the value is stored as given
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.filtered().len())
    }

    /// Records passing the current filters, in catalog order
    #[must_use]
    pub fn filtered(&self) -> Vec<&ProtocolRecord> {
        self.filter.apply(&self.records)
    }

    /// The current page, or `None` while loading or after a failure
    #[must_use]
    pub fn view(&self) -> Option<CatalogView<'_>> {
        if self.phase != CatalogPhase::Ready {
            return None;
        }

        let filtered = self.filtered();
        let total_pages = self.paginator.total_pages(filtered.len());
        let items = self.paginator.page(&filtered, self.page).to_vec();

        let empty = if !filtered.is_empty() {
            None
        } else if self.records.is_empty() {
            Some(EmptyState::NoSubmissions)
        } else {
            Some(EmptyState::NoMatches)
        };

        Some(CatalogView {
            items,
            page: self.page,
            total_pages,
            total_matches: filtered.len(),
            page_bar: page_range(self.page, total_pages),
            has_previous: self.has_previous(),
            has_next: self.page < total_pages,
            empty,
        })
    }
}

impl Drop for CatalogController {
    fn drop(&mut self) {
        self.liveness.release();
    }
}
