//! Catalog-specific error types
//!
//! - **`Fetch`**: the store could not be queried (wraps `StoreError`)
//! - **`NotFound`**: no approved protocol answers to the requested slug
//! - **`Ambiguous`**: several approved protocols share the requested name

use crate::store::StoreError;
use thiserror::Error;

/// Errors raised while reading the public catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Store unreachable or query error
    #[error("Failed to fetch protocols: {0}")]
    Fetch(#[from] StoreError),

    /// Unknown name, or a listing that is not approved yet
    #[error("Protocol not found or pending approval: {0}")]
    NotFound(String),

    /// Case-insensitive name lookup matched more than one listing
    #[error("{count} approved protocols are named '{name}'")]
    Ambiguous { name: String, count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_wraps_store_error() {
        let err: CatalogError = StoreError::Unavailable("timeout".into()).into();
        assert_eq!(err.to_string(), "Failed to fetch protocols: Store unavailable: timeout");
    }

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::NotFound("ghost".into());
        assert_eq!(err.to_string(), "Protocol not found or pending approval: ghost");
    }

    #[test]
    fn test_ambiguous_message() {
        let err = CatalogError::Ambiguous { name: "mesh".into(), count: 2 };
        assert_eq!(err.to_string(), "2 approved protocols are named 'mesh'");
    }
}
