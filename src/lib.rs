//! Protodir - a curated directory of agent-to-agent protocols
//!
//! Listings are submitted as pending, approved by a moderator, and only then
//! appear in the public catalog. The catalog supports free-text search,
//! tag facets and pagination; each approved listing also has a detail view
//! addressed by a name slug.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detail;
pub mod model;
pub mod output;
pub mod sitemap;
pub mod store;
pub mod submission;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Storage error outside the catalog flow
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Catalog fetch or detail lookup failed
    #[error("{0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Submission rejected or not stored
    #[error("{0}")]
    SubmissionError(#[from] submission::SubmissionError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Serializing output failed
    #[error("Output error: {0}")]
    OutputError(#[from] std::fmt::Error),
    /// JSON output failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
