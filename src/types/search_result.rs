//! Search result projection

use serde::{Deserialize, Serialize};

use super::Herb;

/// A herb paired with its relevance for one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub herb: Herb,
    /// Relevance in 0..=100
    pub score: u32,
    /// Keywords that hit the herb's effects, without duplicates
    #[serde(default)]
    pub matched_effects: Vec<String>,
}
