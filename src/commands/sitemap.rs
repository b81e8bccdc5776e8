//! Sitemap and robots commands

use crate::sitemap::{entries, render_xml};
use crate::{DirectoryError, store::RecordStore};
use chrono::Utc;

type Result<T> = std::result::Result<T, DirectoryError>;

/// Print sitemap.xml for the current catalog
///
/// # Errors
/// Returns an error only if rendering fails; store failures shrink the
/// sitemap to the static pages instead
pub fn execute<S: RecordStore + ?Sized>(store: &S, base_url: &str) -> Result<()> {
    let xml = render_xml(&entries(store, base_url, Utc::now()))?;
    print!("{xml}");
    Ok(())
}

/// Print robots.txt
pub fn robots(base_url: &str) {
    print!("{}", crate::sitemap::robots(base_url));
}
