//! Data types for HerbMind
//!
//! This module contains all the core data structures used throughout the application.

mod category;
mod herb;
mod recommend;
mod search_result;
mod user_state;

pub use category::{category_name_for_id, default_categories, HerbCategory, CATEGORY_TABLE, OTHER_CATEGORY};
pub use herb::{Herb, MAX_EXAM_FREQUENCY};
pub use recommend::{DailyRecommend, RecommendType};
pub use search_result::SearchResult;
pub use user_state::{Favorite, SearchHistoryEntry, StateRecord};

/// Result type for MCP operations
pub type McpResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Default exam frequency for serde deserialization
pub fn default_exam_frequency() -> u8 {
    1
}

/// Check if flag is unset (for skip_serializing_if)
pub fn is_false(val: &bool) -> bool {
    !*val
}
