//! Filter predicates for the article list

use serde::{Deserialize, Serialize};

/// Restriction applied to the article list.
///
/// `search` is matched case-insensitively against the title by the backend;
/// `category` scopes the category population. An empty filter lists
/// everything.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ArticleFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ArticleFilter {
    /// Filter matching everything.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builder method to set the title search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Builder method to set the category restriction
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when no restriction is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none()
    }
}
