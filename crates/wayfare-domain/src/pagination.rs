//! Page/pageSize/total arithmetic for the article list

use serde::{Deserialize, Serialize};

/// Default page size of the article list, matching the backend view.
pub const DEFAULT_PAGE_SIZE: u32 = 4;

/// Pagination state for a server-paginated collection.
///
/// `total` is server-reported; `total_pages` is derived and recomputed on
/// every read so it can never drift from `total`/`page_size`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

impl Pagination {
    /// Number of pages: ceil(total / page_size).
    pub fn total_pages(&self) -> u32 {
        (self.total.div_ceil(self.page_size.max(1) as u64)) as u32
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// True when `page` addresses an existing page (page 1 is always
    /// addressable, even for an empty collection).
    pub fn is_valid_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages().max(1)
    }

    /// Clamp the current page into `[1, max(total_pages, 1)]`.
    pub fn clamp_page(&mut self) {
        let upper = self.total_pages().max(1);
        self.page = self.page.clamp(1, upper);
    }
}
