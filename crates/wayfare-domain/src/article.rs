//! Article domain model

use super::Category;
use serde::{Deserialize, Serialize};

/// The authenticated or owning user identity.
///
/// Ownership comparisons use the email; the numeric id and username travel
/// along because the backend populates them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}

/// A travel article as stored on the backend.
///
/// `id` is the server-assigned numeric identifier; `document_id` is the
/// routable identifier used in URLs and as the key for fetch/update/delete.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: i64,
    #[serde(rename = "documentId")]
    pub document_id: String,
    pub title: String,
    pub description: String,
    pub cover_image_url: Option<String>,
    pub category: Option<Category>,
    /// Owner identity, populated by the backend on reads.
    pub user: Option<User>,
    /// Publication timestamp, RFC 3339.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

impl Article {
    /// Whether the given session identity owns this article.
    ///
    /// Articles without a populated owner are owned by nobody.
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.user.as_ref().is_some_and(|u| u.email == email)
    }

    /// Publication timestamp parsed for display; `None` when unpublished
    /// or when the backend sent something unparseable.
    pub fn published_date(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        self.published_at
            .as_deref()
            .and_then(|ts| chrono::DateTime::parse_from_rfc3339(ts).ok())
    }
}

/// Whether the session identity may edit/delete the article.
///
/// Pure client-side gate driving whether mutation controls render; the
/// server contract is assumed to enforce ownership on its side.
pub fn can_modify(article: &Article, identity: Option<&str>) -> bool {
    match identity {
        Some(email) => article.is_owned_by(email),
        None => false,
    }
}

/// The client-side shape submitted on create and update.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// Category id, nullable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
}

impl ArticleDraft {
    /// Create a draft with the required fields.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            cover_image_url: None,
            category: None,
        }
    }

    /// Builder method to add a cover image URL
    pub fn with_cover_image(mut self, url: impl Into<String>) -> Self {
        self.cover_image_url = Some(url.into());
        self
    }

    /// Builder method to add a category reference
    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category = Some(category_id);
        self
    }

    /// Pre-fill a draft from an existing article, for edit forms.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            cover_image_url: article.cover_image_url.clone(),
            category: article.category.as_ref().map(|c| c.id),
        }
    }
}
