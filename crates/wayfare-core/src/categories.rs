//! Category lookup cache
//!
//! A small read-mostly collection fetched once on first need and kept for
//! the lifetime of the session. The in-flight fetch may be abandoned (for
//! example on component unmount) without affecting correctness, since the
//! operation is read-only and idempotent.

use tokio::task::JoinHandle;
use wayfare_domain::Category;

/// Session-lifetime cache of the category set.
#[derive(Clone, Debug, Default)]
pub struct CategoryCache {
    categories: Vec<Category>,
    loaded: bool,
    loading: bool,
    error: Option<String>,
}

impl CategoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a fetch is due: nothing cached and none in flight.
    pub fn needs_fetch(&self) -> bool {
        !self.loaded && !self.loading
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_result(&mut self, categories: Vec<Category>) {
        self.loading = false;
        self.loaded = true;
        self.categories = categories;
    }

    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Look up a category name by id.
    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Drop the cached set so the next need refetches (logout, or an
    /// explicit refresh).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Owner of the in-flight category fetch task.
///
/// Spawning a new fetch cancels the previous one; dropping the loader
/// cancels whatever is in flight, so an unmounted consumer can never
/// receive a late commit.
#[derive(Debug, Default)]
pub struct CategoryLoader {
    handle: Option<JoinHandle<()>>,
}

impl CategoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `fut` as the current fetch, aborting any previous one.
    pub fn spawn<F>(&mut self, fut: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(fut));
    }

    /// Abort the in-flight fetch, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CategoryLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn sample() -> Vec<Category> {
        vec![Category::new(1, "Beaches"), Category::new(2, "Mountains")]
    }

    #[test]
    fn test_fetch_once_lifecycle() {
        let mut cache = CategoryCache::new();
        assert!(cache.needs_fetch());

        cache.begin_load();
        assert!(!cache.needs_fetch());
        assert!(cache.is_loading());

        cache.apply_result(sample());
        assert!(!cache.needs_fetch());
        assert_eq!(cache.categories().len(), 2);
        assert_eq!(cache.name_of(2), Some("Mountains"));
        assert_eq!(cache.name_of(9), None);
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut cache = CategoryCache::new();
        cache.begin_load();
        cache.apply_failure("backend unreachable");
        assert_eq!(cache.error(), Some("backend unreachable"));
        // Nothing cached, so the next need refetches.
        assert!(cache.needs_fetch());
    }

    #[test]
    fn test_empty_result_counts_as_loaded() {
        let mut cache = CategoryCache::new();
        cache.begin_load();
        cache.apply_result(Vec::new());
        // An empty category set is a valid answer, not a reason to refetch.
        assert!(!cache.needs_fetch());
    }

    #[test]
    fn test_clear_forces_refetch() {
        let mut cache = CategoryCache::new();
        cache.begin_load();
        cache.apply_result(sample());
        cache.clear();
        assert!(cache.needs_fetch());
        assert!(cache.categories().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_loader_cancellation_prevents_late_commit() {
        let committed = Arc::new(AtomicBool::new(false));
        let flag = committed.clone();

        let mut loader = CategoryLoader::new();
        loader.spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });
        assert!(loader.is_in_flight());

        loader.cancel();
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(!committed.load(Ordering::SeqCst));
        assert!(!loader.is_in_flight());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_loader_respawn_aborts_previous() {
        let first = Arc::new(AtomicBool::new(false));
        let second = Arc::new(AtomicBool::new(false));

        let mut loader = CategoryLoader::new();
        let flag = first.clone();
        loader.spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });
        let flag = second.clone();
        loader.spawn(async move {
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(!first.load(Ordering::SeqCst));
        assert!(second.load(Ordering::SeqCst));
    }
}
