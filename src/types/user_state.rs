//! Favorites and search history records

use serde::{Deserialize, Serialize};

/// A herb the user starred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub herb_id: String,
    /// Unix millis
    pub added_at: u64,
}

/// A query the user ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    pub query: String,
    /// Unix millis
    pub searched_at: u64,
}

/// One line of the user state file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StateRecord {
    Favorite(Favorite),
    Search(SearchHistoryEntry),
}
