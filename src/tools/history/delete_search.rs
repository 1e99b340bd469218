//! Delete search tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{require_str, text_response};
use crate::store::HerbStore;
use crate::types::McpResult;

pub struct DeleteSearchTool {
    store: Arc<HerbStore>,
}

impl DeleteSearchTool {
    pub fn new(store: Arc<HerbStore>) -> Self {
        Self { store }
    }
}

impl Tool for DeleteSearchTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "delete_search",
            "Remove one query from the search history",
            json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "The exact query to remove" }
                },
                "required": ["query"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let query = require_str(&params, "query")?;
        self.store.delete_search(query)?;
        Ok(text_response(format!("Removed '{}' from search history", query)))
    }
}
