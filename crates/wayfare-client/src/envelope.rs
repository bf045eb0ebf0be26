//! Wire envelopes for the Strapi-style backend
//!
//! List reads return `{ "data": [...], "meta": { "pagination": { "total" } } }`,
//! single reads return `{ "data": {...} }`, and mutation bodies wrap the
//! draft as `{ "data": draft }`. Parsing is exposed as pure functions so
//! the envelope handling can be tested against captured JSON without a
//! server.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use wayfare_domain::{Article, ArticleDraft, Category};

/// One page of the article collection plus the server-reported total.
#[derive(Clone, Debug, PartialEq)]
pub struct ArticlePage {
    pub items: Vec<Article>,
    pub total: u64,
}

/// `{ "data": T }` wrapper for single resources and mutation responses.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// `{ "data": draft }` request body for create and update.
#[derive(Debug, Serialize)]
pub struct DraftBody<'a> {
    pub data: &'a ArticleDraft,
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Vec<Article>,
    meta: ListMeta,
}

#[derive(Debug, Deserialize)]
struct ListMeta {
    pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
struct PaginationMeta {
    total: u64,
}

/// Parse a list response into items plus total.
pub fn parse_article_page(json: &str) -> Result<ArticlePage, ApiError> {
    let envelope: ListEnvelope = serde_json::from_str(json)?;
    Ok(ArticlePage {
        items: envelope.data,
        total: envelope.meta.pagination.total,
    })
}

/// Parse a single-article response.
pub fn parse_article(json: &str) -> Result<Article, ApiError> {
    let envelope: DataEnvelope<Article> = serde_json::from_str(json)?;
    Ok(envelope.data)
}

/// Parse the category list response.
pub fn parse_categories(json: &str) -> Result<Vec<Category>, ApiError> {
    let envelope: DataEnvelope<Vec<Category>> = serde_json::from_str(json)?;
    Ok(envelope.data)
}
