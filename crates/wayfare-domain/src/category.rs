//! Category lookup record

use serde::{Deserialize, Serialize};

/// A category an article may belong to.
///
/// Read-mostly: the full set is fetched once per session and cached.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// Create a new category
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
