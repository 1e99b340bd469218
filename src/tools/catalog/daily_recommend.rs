//! Daily recommendation tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, optional_str};
use crate::store::HerbStore;
use crate::types::McpResult;
use crate::utils::time::date_or_today;

/// Tool returning the day's seasonal, exam and contrast picks
pub struct DailyRecommendTool {
    store: Arc<HerbStore>,
}

impl DailyRecommendTool {
    pub fn new(store: Arc<HerbStore>) -> Self {
        Self { store }
    }
}

impl Tool for DailyRecommendTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "daily_recommend",
            "Get up to three herbs to study for a day: a seasonal pick, a frequently examined herb, \
             and an easily confused herb. The same date always yields the same picks.",
            json!({
                "type": "object",
                "properties": {
                    "date": {
                        "type": "string",
                        "description": "Date as YYYY-MM-DD (default: today, local time)"
                    }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let date = date_or_today(optional_str(&params, "date"))?;
        let recommends = self.store.daily_recommend(date);
        json_response(&json!({
            "date": date.to_string(),
            "recommends": recommends,
        }))
    }
}
