//! Domain types for the wayfare travel-article client
//!
//! This crate provides the canonical domain models shared by the state layer
//! and the sync engine:
//! - Article: a travel article with server-assigned identifiers and owner
//! - ArticleDraft: the client-side shape for create/update submissions
//! - Category: a small id/name lookup record
//! - ArticleFilter: search and category restriction on the article list
//! - Pagination: page/pageSize/total arithmetic
//! - Validation: pre-network draft checks

pub mod article;
pub mod category;
pub mod filter;
pub mod pagination;
pub mod validation;

pub use article::*;
pub use category::*;
pub use filter::*;
pub use pagination::*;
pub use validation::*;
