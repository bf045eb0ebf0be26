//! HTTP client for the article backend

use crate::envelope::{self, ArticlePage, DraftBody};
use crate::error::ApiError;
use crate::query::ListQuery;
use std::time::Duration;
use tracing::{debug, warn};
use wayfare_domain::{validate_draft, Article, ArticleDraft, ArticleFilter, Category};

/// Authenticated REST client for the `/api` backend.
///
/// Each operation is independent and retry-free; the caller re-invokes on
/// failure. Requests run to completion or failure with no explicit
/// deadline beyond the transport timeout.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client against `base_url` (e.g. `https://backend.example/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Install the bearer token used by all authenticated operations.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map the response status, returning the body on success.
    async fn read_body(response: reqwest::Response, context: &str) -> Result<String, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if status.is_success() {
            return Ok(body);
        }

        warn!(status = status.as_u16(), context, "request failed");
        match status.as_u16() {
            401 | 403 => Err(ApiError::Auth),
            404 => Err(ApiError::NotFound(context.to_string())),
            code => Err(ApiError::Http {
                status: code,
                message: truncate(&body, 300),
            }),
        }
    }

    /// List one page of articles under the given filter.
    pub async fn list_articles(
        &self,
        page: u32,
        page_size: u32,
        filter: &ArticleFilter,
    ) -> Result<ArticlePage, ApiError> {
        let query = ListQuery::new(page, page_size, filter.clone());
        let url = url::Url::parse_with_params(&self.endpoint("articles"), query.pairs())
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!(%url, "listing articles");
        let response = self.authorized(self.http.get(url)).send().await?;
        let body = Self::read_body(response, "articles").await?;
        envelope::parse_article_page(&body)
    }

    /// Fetch a single article by its routable document id.
    pub async fn fetch_article(&self, document_id: &str) -> Result<Article, ApiError> {
        let url = self.endpoint(&format!("articles/{document_id}"));
        debug!(%url, "fetching article");
        let response = self.authorized(self.http.get(&url)).send().await?;
        let body = Self::read_body(response, document_id).await?;
        envelope::parse_article(&body)
    }

    /// Create an article from a validated draft.
    pub async fn create_article(&self, draft: &ArticleDraft) -> Result<Article, ApiError> {
        self.check_draft(draft)?;
        let url = self.endpoint("articles");
        debug!(%url, title = %draft.title, "creating article");
        let response = self
            .authorized(self.http.post(&url))
            .json(&DraftBody { data: draft })
            .send()
            .await?;
        let body = Self::read_body(response, "articles").await?;
        envelope::parse_article(&body)
    }

    /// Update an existing article.
    ///
    /// Ownership is gated by the caller; this layer submits for whatever
    /// identity the token carries.
    pub async fn update_article(
        &self,
        document_id: &str,
        draft: &ArticleDraft,
    ) -> Result<Article, ApiError> {
        self.check_draft(draft)?;
        let url = self.endpoint(&format!("articles/{document_id}"));
        debug!(%url, "updating article");
        let response = self
            .authorized(self.http.put(&url))
            .json(&DraftBody { data: draft })
            .send()
            .await?;
        let body = Self::read_body(response, document_id).await?;
        envelope::parse_article(&body)
    }

    /// Delete an article; returns the removed identifier.
    pub async fn delete_article(&self, document_id: &str) -> Result<String, ApiError> {
        let url = self.endpoint(&format!("articles/{document_id}"));
        debug!(%url, "deleting article");
        let response = self.authorized(self.http.delete(&url)).send().await?;
        Self::read_body(response, document_id).await?;
        Ok(document_id.to_string())
    }

    /// List the full category set.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.endpoint("categories");
        debug!(%url, "listing categories");
        let response = self.authorized(self.http.get(&url)).send().await?;
        let body = Self::read_body(response, "categories").await?;
        envelope::parse_categories(&body)
    }

    pub(crate) async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        authenticated: bool,
    ) -> Result<String, ApiError> {
        let url = self.endpoint(path);
        let mut request = self.http.post(&url).json(body);
        if authenticated {
            request = self.authorized(request);
        }
        let response = request.send().await?;
        Self::read_body(response, path).await
    }

    fn check_draft(&self, draft: &ArticleDraft) -> Result<(), ApiError> {
        let errors = validate_draft(draft);
        if errors
            .iter()
            .any(|e| matches!(e.severity, wayfare_domain::ValidationSeverity::Error))
        {
            return Err(ApiError::Validation(errors));
        }
        Ok(())
    }
}

fn truncate(text: &str, limit: usize) -> String {
    if text.len() > limit {
        let cut = text
            .char_indices()
            .take_while(|(i, _)| *i < limit)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}... (truncated)", &text[..cut])
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_cleanly() {
        let client = ApiClient::new("https://backend.example/api/");
        assert_eq!(
            client.endpoint("/articles"),
            "https://backend.example/api/articles"
        );
        assert_eq!(
            client.endpoint("articles/doc-1"),
            "https://backend.example/api/articles/doc-1"
        );
    }

    #[test]
    fn test_token_lifecycle() {
        let mut client = ApiClient::new("https://backend.example/api");
        assert!(!client.has_token());
        client.set_token("jwt-abc");
        assert!(client.has_token());
        client.clear_token();
        assert!(!client.has_token());
    }

    #[test]
    fn test_truncate_keeps_short_bodies() {
        assert_eq!(truncate("short", 300), "short");
        let long = "x".repeat(400);
        let out = truncate(&long, 300);
        assert!(out.ends_with("(truncated)"));
        assert!(out.len() < 400);
    }

    #[tokio::test]
    async fn test_invalid_draft_short_circuits_before_network() {
        // Unroutable base URL: reaching the network would fail differently.
        let client = ApiClient::new("http://127.0.0.1:1/api");
        let err = client
            .create_article(&ArticleDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let client = ApiClient::new("http://127.0.0.1:1/api");
        let err = client
            .list_articles(1, 4, &ArticleFilter::none())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
