//! Types shared across catalog models.

use serde::{Deserialize, Serialize};

/// A reference to another catalog resource embedded in a response,
/// e.g. the label on a product or the issuing organization of an
/// artist identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRef {
    /// The FUGA-assigned numeric ID.
    pub id: u64,
    /// Display name, when the server includes it.
    #[serde(default)]
    pub name: Option<String>,
}

impl ResourceRef {
    /// Reference a resource by ID only.
    #[must_use]
    pub fn by_id(id: u64) -> Self {
        Self { id, name: None }
    }
}
