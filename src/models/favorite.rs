//! Saved favorites.

use serde::{Deserialize, Serialize};

/// A listing saved by a visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    /// Listing ID
    pub id: String,
    /// When it was saved (RFC 3339)
    pub added_at: String,
}
