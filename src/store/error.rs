//! Store-specific error types
//!
//! This module defines all error types that can occur while querying or
//! writing the `protocols` table.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`DecodeError`** / **`EncodeError`**: bincode failures on stored rows
//! - **`NotFound`**: A row addressed by id does not exist
//! - **`NoRows`** / **`MultipleRows`**: A single-row query did not return exactly one row
//! - **`Unavailable`**: The store cannot be reached or refused the query

use thiserror::Error;

/// Store-specific errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding row: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding row: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// No row with the given id
    #[error("Row not found: {0}")]
    NotFound(String),

    /// A single-row query matched nothing
    #[error("Query returned no rows")]
    NoRows,

    /// A single-row query matched more than one row
    #[error("Query returned {0} rows where one was expected")]
    MultipleRows(usize),

    /// Store unreachable or query rejected
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
