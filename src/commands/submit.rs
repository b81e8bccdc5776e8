//! Submit command - add a listing for review

use crate::submission::{SUCCESS_MESSAGE, SubmissionForm, submit};
use crate::{DirectoryError, output, store::RecordStore};

type Result<T> = std::result::Result<T, DirectoryError>;

/// Validate and store a submission as pending
///
/// # Errors
/// Returns an error if a mandatory field is blank or the insert fails
pub fn execute<S: RecordStore + ?Sized>(store: &S, form: &SubmissionForm, quiet: bool) -> Result<()> {
    let record = submit(store, form)?;
    if quiet {
        println!("{}", record.id);
    } else {
        output::success(SUCCESS_MESSAGE);
        println!("  id: {}", record.id);
    }
    Ok(())
}
