//! Clear search history tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::store::HerbStore;
use crate::types::McpResult;

pub struct ClearSearchHistoryTool {
    store: Arc<HerbStore>,
}

impl ClearSearchHistoryTool {
    pub fn new(store: Arc<HerbStore>) -> Self {
        Self { store }
    }
}

impl Tool for ClearSearchHistoryTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "clear_search_history",
            "Delete the whole search history",
            json!({ "type": "object", "properties": {} }),
        )
    }

    fn execute(&self, _params: Value) -> McpResult<Value> {
        self.store.clear_history()?;
        Ok(text_response("Search history cleared".to_string()))
    }
}
