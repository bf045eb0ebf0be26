//! State layer for the wayfare travel-article client
//!
//! Each concern lives in its own state container with its own lifecycle:
//! - `articles`: the authoritative paginated, filtered view of the remote
//!   collection, with sequence tokens to discard stale async results
//! - `session`: authenticated identity and credential token, the only slice
//!   persisted across restarts
//! - `categories`: fetch-once lookup cache with cancellable loading
//! - `debounce`: coalesces rapid filter input into single commits
//!
//! All article-store transitions are pure and synchronous; the sync engine
//! (`wayfare-client`) drives them with the outcomes of network operations.

pub mod articles;
pub mod categories;
pub mod debounce;
pub mod error;
pub mod session;

pub use articles::{ArticleStore, RequestToken};
pub use categories::{CategoryCache, CategoryLoader};
pub use debounce::{DebounceState, FilterDebouncer, DEBOUNCE_QUIET_PERIOD};
pub use error::SessionError;
pub use session::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, SessionState, KEY_TOKEN, KEY_USER,
};
