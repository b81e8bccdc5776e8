//! Public catalog pipeline
//!
//! Store -> mapper -> full in-memory set -> tag index (once per fetch) and
//! filter (per change) -> paginator -> visible slice.
//!
//! [`CatalogController`] ties the stages together for a browse session; the
//! free functions here are the store reads the catalog surfaces share.

use crate::model::ProtocolRecord;
use crate::model::mapper::map_rows;
use crate::store::{RecordStore, RowQuery, SortOrder};

pub mod controller;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod tags;

pub use controller::{CatalogController, CatalogPhase, CatalogView, EmptyState, Liveness, Notification};
pub use error::CatalogError;
pub use filter::CatalogFilter;
pub use paginate::{DEFAULT_PAGE_SIZE, PageItem, Paginator, page_range};
pub use tags::TagIndex;

/// Number of listings on the home page
pub const FEATURED_COUNT: usize = 3;

/// Every approved listing, newest first
///
/// # Errors
///
/// Returns `CatalogError::Fetch` if the store query fails.
pub fn fetch_approved<S: RecordStore + ?Sized>(store: &S) -> Result<Vec<ProtocolRecord>, CatalogError> {
    let query = RowQuery::approved().order_by_created(SortOrder::Descending);
    Ok(map_rows(store.select(&query)?))
}

/// The `limit` most recent approved listings
///
/// # Errors
///
/// Returns `CatalogError::Fetch` if the store query fails.
pub fn featured<S: RecordStore + ?Sized>(store: &S, limit: usize) -> Result<Vec<ProtocolRecord>, CatalogError> {
    let query = RowQuery::approved()
        .order_by_created(SortOrder::Descending)
        .limit(limit);
    Ok(map_rows(store.select(&query)?))
}
