//! Resource store for the remote article collection
//!
//! Holds the authoritative in-memory view of the paginated, filtered
//! article list. Every transition is pure and synchronous; asynchronous
//! list outcomes are applied under a sequence token so a stale, slower
//! response can never overwrite state produced by a newer request.

use serde::{Deserialize, Serialize};
use wayfare_domain::{Article, ArticleFilter, Pagination};

/// Sequence token identifying one issued list request.
///
/// Tokens are issued monotonically by [`ArticleStore::begin_list_load`];
/// only the outcome carrying the most recently issued token may mutate the
/// store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestToken(u64);

/// Authoritative state of the article collection view.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ArticleStore {
    /// Articles of the current page, in server order.
    articles: Vec<Article>,
    /// Single-article detail view, independent of the page list.
    selected: Option<Article>,
    pagination: Pagination,
    filter: ArticleFilter,
    loading: bool,
    error: Option<String>,
    /// Last issued list-request sequence number. 0 = none issued yet.
    issued_seq: u64,
}

impl ArticleStore {
    /// Empty store with default pagination.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn selected(&self) -> Option<&Article> {
        self.selected.as_ref()
    }

    pub fn filter(&self) -> &ArticleFilter {
        &self.filter
    }

    pub fn page(&self) -> u32 {
        self.pagination.page
    }

    pub fn page_size(&self) -> u32 {
        self.pagination.page_size
    }

    pub fn total(&self) -> u64 {
        self.pagination.total
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Replace the filter and reset to page 1.
    ///
    /// Resets the page even when the filter compares equal, matching the
    /// idempotence the pagination invariant requires.
    pub fn set_filter(&mut self, filter: ArticleFilter) {
        self.filter = filter;
        self.pagination.page = 1;
    }

    /// Move to page `n`. No-op unless `1 <= n <= total_pages`.
    ///
    /// Returns whether the page actually changed, so the caller knows
    /// whether a refetch is due.
    pub fn set_page(&mut self, n: u32) -> bool {
        if !self.pagination.is_valid_page(n) || n == self.pagination.page {
            return false;
        }
        self.pagination.page = n;
        true
    }

    /// Change the page size and reset to page 1.
    pub fn set_page_size(&mut self, size: u32) {
        if size == 0 {
            return;
        }
        self.pagination.page_size = size;
        self.pagination.page = 1;
    }

    /// Begin a list load: loading=true, error cleared, next token issued.
    pub fn begin_list_load(&mut self) -> RequestToken {
        self.loading = true;
        self.error = None;
        self.issued_seq += 1;
        RequestToken(self.issued_seq)
    }

    /// Whether `token` is the most recently issued list token.
    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.issued_seq
    }

    /// Apply a successful list response.
    ///
    /// Discarded when `token` is not the latest issued; a newer request is
    /// already in flight and its outcome owns the store. Returns whether
    /// the response was applied.
    pub fn apply_list_result(
        &mut self,
        token: RequestToken,
        items: Vec<Article>,
        total: u64,
    ) -> bool {
        if !self.is_latest(token) {
            tracing::debug!(token = token.0, latest = self.issued_seq, "discarding stale list result");
            return false;
        }
        self.loading = false;
        self.articles = items;
        self.pagination.total = total;
        true
    }

    /// Apply a failed list response, keeping the stale list visible.
    pub fn apply_list_failure(&mut self, token: RequestToken, message: impl Into<String>) -> bool {
        if !self.is_latest(token) {
            tracing::debug!(token = token.0, latest = self.issued_seq, "discarding stale list failure");
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    /// Begin a single-article detail load.
    pub fn begin_detail_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Detail fetch succeeded.
    pub fn apply_detail_result(&mut self, article: Article) {
        self.loading = false;
        self.selected = Some(article);
    }

    /// Detail fetch failed.
    pub fn apply_detail_failure(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn clear_selected(&mut self) {
        self.selected = None;
    }

    /// A create succeeded: surface the new article at the top of the page.
    pub fn apply_create_result(&mut self, article: Article) {
        self.articles.insert(0, article);
        self.pagination.total += 1;
    }

    /// An update succeeded: replace the matching entry in place.
    ///
    /// No-op when the id is absent from the current page (the item may have
    /// paginated out). The detail view is replaced too when it matches.
    pub fn apply_update_result(&mut self, article: Article) {
        if let Some(entry) = self.articles.iter_mut().find(|a| a.id == article.id) {
            *entry = article.clone();
        }
        if self.selected.as_ref().is_some_and(|s| s.id == article.id) {
            self.selected = Some(article);
        }
    }

    /// A delete succeeded: drop the entry and decrement the total.
    ///
    /// The total only decreases when an entry was actually removed, so a
    /// delete of an id not on this page can never drive the count negative.
    pub fn apply_delete_result(&mut self, document_id: &str) {
        let before = self.articles.len();
        self.articles.retain(|a| a.document_id != document_id);
        if self.articles.len() < before {
            self.pagination.total = self.pagination.total.saturating_sub(1);
        }
        if self
            .selected
            .as_ref()
            .is_some_and(|s| s.document_id == document_id)
        {
            self.selected = None;
        }
    }

    /// Back to the empty initial state (logout / unmount).
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
