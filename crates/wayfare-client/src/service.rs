//! Orchestration of store, cache, and client
//!
//! `ArticleService` drives the control flow: user intent mutates the
//! article store, the store issues a sequence token, the client performs
//! the request, and the outcome is applied back under that token. All
//! mutation of the store happens on the caller's task; concurrency only
//! exists across suspension points, which is exactly what the token guard
//! covers.

use crate::client::ApiClient;
use crate::error::ApiError;
use tracing::{debug, warn};
use wayfare_core::{ArticleStore, CategoryCache};
use wayfare_domain::{Article, ArticleDraft, ArticleFilter};

/// The synchronization layer behind the article list and detail views.
pub struct ArticleService {
    client: ApiClient,
    store: ArticleStore,
    categories: CategoryCache,
}

impl ArticleService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            store: ArticleStore::new(),
            categories: CategoryCache::new(),
        }
    }

    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    pub fn categories(&self) -> &CategoryCache {
        &self.categories
    }

    pub fn client_mut(&mut self) -> &mut ApiClient {
        &mut self.client
    }

    /// Refetch the current page under the current filter.
    pub async fn refresh(&mut self) {
        let token = self.store.begin_list_load();
        let result = self
            .client
            .list_articles(self.store.page(), self.store.page_size(), self.store.filter())
            .await;

        match result {
            Ok(page) => {
                debug!(items = page.items.len(), total = page.total, "list applied");
                self.store.apply_list_result(token, page.items, page.total);
            }
            Err(err) => {
                warn!(error = %err, "list failed");
                self.store.apply_list_failure(token, err.message());
            }
        }
    }

    /// Commit a debounced search value and refetch from page 1.
    pub async fn commit_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        let mut filter = self.store.filter().clone();
        filter.search = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        self.commit_filter(filter).await;
    }

    /// Replace the whole filter and refetch from page 1.
    pub async fn commit_filter(&mut self, filter: ArticleFilter) {
        self.store.set_filter(filter);
        self.refresh().await;
    }

    /// Move to page `n`; out-of-range requests are ignored without a
    /// request.
    pub async fn turn_page(&mut self, n: u32) {
        if self.store.set_page(n) {
            self.refresh().await;
        }
    }

    pub async fn change_page_size(&mut self, size: u32) {
        self.store.set_page_size(size);
        self.refresh().await;
    }

    /// Load the single-article detail view.
    pub async fn open_detail(&mut self, document_id: &str) {
        self.store.begin_detail_load();
        match self.client.fetch_article(document_id).await {
            Ok(article) => self.store.apply_detail_result(article),
            Err(err) => self.store.apply_detail_failure(err.message()),
        }
    }

    /// Create an article; on success it surfaces at the top of the list.
    ///
    /// The caller keeps its form open on `Err` so the user can correct and
    /// resubmit.
    pub async fn submit_create(&mut self, draft: &ArticleDraft) -> Result<Article, ApiError> {
        let article = self.client.create_article(draft).await?;
        self.store.apply_create_result(article.clone());
        Ok(article)
    }

    /// Update an article the session owns.
    pub async fn submit_update(
        &mut self,
        document_id: &str,
        draft: &ArticleDraft,
    ) -> Result<Article, ApiError> {
        let article = self.client.update_article(document_id, draft).await?;
        self.store.apply_update_result(article.clone());
        Ok(article)
    }

    /// Delete an article after the caller's confirmation step.
    pub async fn submit_delete(&mut self, document_id: &str) -> Result<String, ApiError> {
        let removed = self.client.delete_article(document_id).await?;
        self.store.apply_delete_result(&removed);
        Ok(removed)
    }

    /// Fetch the category set if it is not cached yet.
    pub async fn ensure_categories(&mut self) {
        if !self.categories.needs_fetch() {
            return;
        }
        self.categories.begin_load();
        match self.client.list_categories().await {
            Ok(categories) => self.categories.apply_result(categories),
            Err(err) => self.categories.apply_failure(err.message()),
        }
    }

    /// Drop all collection state and the bearer token (logout/unmount).
    pub fn reset(&mut self) {
        self.store.reset();
        self.categories.clear();
        self.client.clear_token();
    }
}
