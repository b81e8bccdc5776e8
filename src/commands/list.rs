//! List command - one page of the approved catalog

use crate::catalog::{CatalogController, CatalogPhase, CatalogView, Paginator};
use crate::model::ProtocolRecord;
use crate::{DirectoryError, output, store::RecordStore};
use serde::Serialize;

type Result<T> = std::result::Result<T, DirectoryError>;

/// Search, facet and page selection for one listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    pub query: Option<String>,
    pub tags: Vec<String>,
    pub page: usize,
}

/// JSON shape of a listing page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageJson<'a> {
    page: usize,
    total_pages: usize,
    total_matches: usize,
    items: &'a [&'a ProtocolRecord],
}

/// Load the catalog and apply the request's search, tags and page
///
/// Returns the controller so callers can inspect its phase and view.
///
/// # Errors
/// Returns `DirectoryError::InvalidInput` for page 0
pub fn prepare<S: RecordStore + ?Sized>(
    store: &S,
    request: &ListRequest,
    page_size: usize,
) -> Result<CatalogController> {
    if request.page == 0 {
        return Err(DirectoryError::InvalidInput("page numbers start at 1".into()));
    }

    let mut catalog = CatalogController::new(Paginator::new(page_size));
    catalog.load(store);

    if let Some(query) = &request.query {
        catalog.search(query.as_str());
    }
    for tag in &request.tags {
        if !catalog.filter().is_selected(tag) {
            catalog.toggle_tag(tag);
        }
    }
    catalog.go_to_page(request.page);
    Ok(catalog)
}

/// Print one catalog page
///
/// A failed fetch is reported as a notification and leaves the page empty.
///
/// # Errors
/// Returns an error for an invalid page or if JSON output fails
pub fn execute<S: RecordStore + ?Sized>(
    store: &S,
    request: &ListRequest,
    page_size: usize,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let mut catalog = prepare(store, request, page_size)?;

    if let Some(notification) = catalog.take_notification() {
        output::error(&notification.message);
    }

    let Some(view) = catalog.view() else {
        if let CatalogPhase::Failed(_) = catalog.phase() {
            return Ok(());
        }
        return Err(DirectoryError::InvalidInput("catalog is still loading".into()));
    };

    if json {
        let page = PageJson {
            page: view.page,
            total_pages: view.total_pages,
            total_matches: view.total_matches,
            items: &view.items,
        };
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    print_page(&catalog, &view, quiet);
    Ok(())
}

fn print_page(catalog: &CatalogController, view: &CatalogView<'_>, quiet: bool) {
    if !quiet && !catalog.tag_index().is_empty() {
        println!("{}\n", output::tag_chips(catalog.tag_index(), catalog.filter()));
    }

    if let Some(empty) = view.empty {
        if !quiet {
            println!("{}", output::empty_state(empty));
        }
        return;
    }

    if view.items.is_empty() {
        if !quiet {
            output::warning(&format!("Page {} is past the last page ({})", view.page, view.total_pages));
        }
        return;
    }

    for record in &view.items {
        println!("{}", output::protocol_card(record, quiet));
    }

    if !quiet && view.total_pages > 1 {
        println!("\n{}", output::page_bar(view));
    }
}
