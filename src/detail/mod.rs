//! Protocol detail lookup
//!
//! A detail page is addressed by the listing's slug. The slug is decoded back
//! into a name and matched case-insensitively against approved listings only;
//! pending listings are invisible even when asked for by exact name.

use crate::catalog::CatalogError;
use crate::model::ProtocolRecord;
use crate::model::mapper::map_rows;
use crate::store::{RecordStore, RowQuery, StoreError};

pub mod metadata;
pub mod slug;

pub use metadata::PageMetadata;
pub use slug::{slug, unslug};

/// Number of other listings suggested on a detail page
pub const RECOMMENDED_COUNT: usize = 3;

/// The approved listing a slug refers to
///
/// # Errors
///
/// Returns `CatalogError::NotFound` when no approved listing matches,
/// `CatalogError::Ambiguous` when several do, and `CatalogError::Fetch` when
/// the store query fails.
pub fn lookup<S: RecordStore + ?Sized>(store: &S, segment: &str) -> Result<ProtocolRecord, CatalogError> {
    let name = unslug(segment);
    let query = RowQuery::approved().ilike_name(name.as_str());

    match store.select_single(&query) {
        Ok(row) => Ok(row.into()),
        Err(StoreError::NoRows) => Err(CatalogError::NotFound(name)),
        Err(StoreError::MultipleRows(count)) => Err(CatalogError::Ambiguous { name, count }),
        Err(err) => Err(err.into()),
    }
}

/// Up to `limit` other approved listings, in storage order
///
/// # Errors
///
/// Returns `CatalogError::Fetch` if the store query fails.
pub fn recommended<S: RecordStore + ?Sized>(
    store: &S,
    current: &ProtocolRecord,
    limit: usize,
) -> Result<Vec<ProtocolRecord>, CatalogError> {
    let query = RowQuery::approved().neq_id(current.id).limit(limit);
    Ok(map_rows(store.select(&query)?))
}
