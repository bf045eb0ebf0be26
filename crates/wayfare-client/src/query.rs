//! List-request query construction
//!
//! The backend takes Strapi-style bracketed parameters. The search text
//! becomes a case-insensitive equality predicate on the title
//! (`filters[title][$eqi]`); the category filter is sent as a scoped
//! population parameter (`populate[category]=<value>`), which is what the
//! backend contract expects.

use wayfare_domain::ArticleFilter;

/// Query parameters for one `GET /articles` request.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub filter: ArticleFilter,
}

impl ListQuery {
    pub fn new(page: u32, page_size: u32, filter: ArticleFilter) -> Self {
        Self {
            page,
            page_size,
            filter,
        }
    }

    /// Encode as ordered key/value pairs for the request URL.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("pagination[page]".to_string(), self.page.to_string()),
            (
                "pagination[pageSize]".to_string(),
                self.page_size.to_string(),
            ),
            ("populate[populate][user]".to_string(), "*".to_string()),
            ("populate[user]".to_string(), "*".to_string()),
            ("populate[category]".to_string(), "*".to_string()),
        ];

        if let Some(ref search) = self.filter.search {
            pairs.push(("filters[title][$eqi]".to_string(), search.clone()));
        }

        if let Some(ref category) = self.filter.category {
            pairs.push(("populate[category]".to_string(), category.clone()));
        }

        pairs
    }
}
