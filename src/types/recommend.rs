//! Daily recommendation types

use serde::{Deserialize, Serialize};

use super::Herb;

/// Why a herb was picked for today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendType {
    Seasonal,
    Exam,
    Contrast,
    Discovery,
}

/// One recommendation slot for the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecommend {
    pub herb: Herb,
    pub reason: String,
    #[serde(rename = "type")]
    pub recommend_type: RecommendType,
}

impl DailyRecommend {
    pub fn new(herb: Herb, reason: impl Into<String>, recommend_type: RecommendType) -> Self {
        Self {
            herb,
            reason: reason.into(),
            recommend_type,
        }
    }
}
