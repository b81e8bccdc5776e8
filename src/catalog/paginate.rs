//! Client-side pagination
//!
//! Pages are 1-based. A stored page number is never clamped; out-of-range
//! pages simply yield an empty slice, and navigation is disabled at the ends.

use std::fmt;

/// Listings shown per catalog page
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Pages shown on each side of the current page in the page bar
const ADJACENT_PAGES: usize = 1;

/// One entry of the page bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Fixed-size page slicing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// A page size of zero is treated as one
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size)
    }

    /// Items `[(page-1)*size, page*size)`, empty when the page is out of range
    #[must_use]
    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let Some(index) = page.checked_sub(1) else {
            return &[];
        };
        let start = index.saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

/// Page bar for `current` of `total` pages
///
/// Always shows page 1 and the last page plus the pages adjacent to
/// `current`; any other gap collapses into a single ellipsis.
#[must_use]
pub fn page_range(current: usize, total: usize) -> Vec<PageItem> {
    let mut range = vec![PageItem::Page(1)];

    let start = current.saturating_sub(ADJACENT_PAGES).max(2);
    let end = current.saturating_add(ADJACENT_PAGES).min(total.saturating_sub(1));

    if start > 2 {
        range.push(PageItem::Ellipsis);
    }
    range.extend((start..=end).map(PageItem::Page));
    if end < total.saturating_sub(1) {
        range.push(PageItem::Ellipsis);
    }
    if total > 1 {
        range.push(PageItem::Page(total));
    }
    range
}
