//! Show command - one approved listing and its recommendations

use crate::detail::{PageMetadata, RECOMMENDED_COUNT, lookup, recommended, slug};
use crate::{DirectoryError, output, store::RecordStore};

type Result<T> = std::result::Result<T, DirectoryError>;

/// Print the listing a slug refers to
///
/// With `meta`, the page metadata is printed instead; a missing listing then
/// yields the not-found metadata rather than an error.
///
/// # Errors
/// Returns an error if the listing is missing or pending, or the store fails
pub fn execute<S: RecordStore + ?Sized>(
    store: &S,
    segment: &str,
    base_url: &str,
    json: bool,
    meta: bool,
    quiet: bool,
) -> Result<()> {
    let found = lookup(store, segment);

    if meta {
        let metadata = PageMetadata::from_lookup(&found, base_url);
        if json {
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        } else {
            print!("{metadata}");
        }
        return Ok(());
    }

    let record = found?;
    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("{}", output::protocol_detail(&record));
    if quiet {
        return Ok(());
    }

    let others = recommended(store, &record, RECOMMENDED_COUNT)?;
    if !others.is_empty() {
        println!("\nYou might also like:");
        for other in &others {
            println!("{}", output::recommendation(other, &slug(&other.name)));
        }
    }
    Ok(())
}
