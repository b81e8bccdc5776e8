//! Home command - newest approved listings

use crate::catalog::{FEATURED_COUNT, featured};
use crate::{DirectoryError, output, store::RecordStore};

type Result<T> = std::result::Result<T, DirectoryError>;

/// Print the most recently approved listings
///
/// # Errors
/// Returns an error if the store cannot be read
pub fn execute<S: RecordStore + ?Sized>(store: &S, quiet: bool) -> Result<()> {
    let records = featured(store, FEATURED_COUNT)?;

    if records.is_empty() {
        if !quiet {
            println!("No protocols found.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Featured protocols:");
    }
    for record in &records {
        println!("{}", output::protocol_card(record, quiet));
    }
    Ok(())
}
