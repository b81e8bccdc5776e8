//! Approve command - publish a pending listing

use crate::model::{ProtocolId, ProtocolStatus};
use crate::{DirectoryError, output, store::RecordStore};
use tracing::info;

type Result<T> = std::result::Result<T, DirectoryError>;

/// Mark a listing approved so it appears in the catalog
///
/// # Errors
/// Returns an error if no listing has `id` or the write fails
pub fn execute<S: RecordStore + ?Sized>(store: &S, id: ProtocolId, quiet: bool) -> Result<()> {
    let row = store.set_status(id, ProtocolStatus::Approved)?;
    info!(%id, name = %row.name, "protocol approved");
    if !quiet {
        output::success(&format!("Approved '{}' ({id})", row.name));
    }
    Ok(())
}
