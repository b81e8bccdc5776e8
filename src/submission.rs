//! Listing submissions
//!
//! A submission is checked for its mandatory fields before the store is
//! touched, then inserted as a pending row. A moderator approves it later,
//! outside this crate's catalog flow.

use crate::model::{NewProtocolRow, ProtocolRecord, ProtocolStatus};
use crate::store::{RecordStore, StoreError};
use thiserror::Error;
use tracing::info;

/// Shown once a submission has been stored
pub const SUCCESS_MESSAGE: &str = "Protocol successfully submitted! It is now pending approval.";

/// Errors that abort a submission
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// One or more mandatory fields are blank; the store was not contacted
    #[error("Name, description, features, creator name, and contact email are required (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The insert itself failed
    #[error("Failed to submit protocol: {0}")]
    Store(#[from] StoreError),
}

/// Raw form input; blank strings mean "not provided"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub name: String,
    pub description: String,
    pub features: String,
    pub tags: String,
    pub github_url: String,
    pub created_by: String,
    pub contact_email: String,
    pub website_link: String,
    pub logo_url: String,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl SubmissionForm {
    /// Names of the mandatory fields that are blank
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("description", &self.description),
            ("features", &self.features),
            ("created_by", &self.created_by),
            ("contact_email", &self.contact_email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check mandatory fields
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::MissingFields` listing every blank mandatory field.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SubmissionError::MissingFields(missing))
        }
    }

    /// Storage row for this form, always pending
    #[must_use]
    pub fn to_row(&self) -> NewProtocolRow {
        NewProtocolRow {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            features: self.features.trim().to_string(),
            tags: optional(&self.tags),
            github_url: optional(&self.github_url),
            created_by: self.created_by.trim().to_string(),
            contact_email: optional(&self.contact_email),
            website_link: optional(&self.website_link),
            logo_url: optional(&self.logo_url),
            status: ProtocolStatus::Pending,
        }
    }
}

/// Validate and store a submission, returning the pending record
///
/// # Errors
///
/// Returns `SubmissionError::MissingFields` without contacting the store when
/// a mandatory field is blank, or `SubmissionError::Store` if the insert fails.
pub fn submit<S: RecordStore + ?Sized>(store: &S, form: &SubmissionForm) -> Result<ProtocolRecord, SubmissionError> {
    form.validate()?;
    let row = store.insert(form.to_row())?;
    info!(id = %row.id, name = %row.name, "protocol submitted for review");
    Ok(row.into())
}
