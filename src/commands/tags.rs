//! Tags command - the facet index of the approved catalog

use crate::catalog::{TagIndex, fetch_approved};
use crate::{DirectoryError, store::RecordStore};

type Result<T> = std::result::Result<T, DirectoryError>;

/// Print every tag used by an approved listing, in first-seen order
///
/// # Errors
/// Returns an error if the store cannot be read
pub fn execute<S: RecordStore + ?Sized>(store: &S, quiet: bool) -> Result<()> {
    let records = fetch_approved(store)?;
    let index = TagIndex::build(&records);

    if index.is_empty() {
        if !quiet {
            println!("No tags found.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags in catalog:");
    }
    for tag in index.iter() {
        if quiet {
            println!("{tag}");
        } else {
            println!("  {tag}");
        }
    }
    Ok(())
}
