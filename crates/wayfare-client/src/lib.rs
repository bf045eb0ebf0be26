//! Sync engine for the wayfare travel-article client
//!
//! Bridges the state layer (`wayfare-core`) and the remote Strapi-style
//! REST backend. Five collection operations (list, fetch-one, create,
//! update, delete) plus the category lookup and the auth endpoints, each
//! independent and retry-free: a failed operation surfaces one displayable
//! message and the caller decides whether to re-invoke.
//!
//! `ArticleService` ties the pieces together with the sequence-token
//! discipline the article store requires.

pub mod auth;
pub mod client;
pub mod envelope;
pub mod error;
pub mod query;
pub mod service;

pub use auth::{AuthResponse, RegisterResponse};
pub use client::ApiClient;
pub use envelope::ArticlePage;
pub use error::ApiError;
pub use query::ListQuery;
pub use service::ArticleService;
