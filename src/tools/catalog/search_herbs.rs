//! Search herbs tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, optional_usize, require_str};
use crate::store::HerbStore;
use crate::types::McpResult;

/// Tool for ranked keyword search with synonym expansion
pub struct SearchHerbsTool {
    store: Arc<HerbStore>,
}

impl SearchHerbsTool {
    pub fn new(store: Arc<HerbStore>) -> Self {
        Self { store }
    }
}

impl Tool for SearchHerbsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "search_herbs",
            "Search herbs by effect, name, pinyin, alias, key point or indication. \
             Keywords are separated by whitespace and expanded with synonyms; results are ranked by score (0-100).",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Free-text query, e.g. '活血 止痛'"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of results to return (default: no limit)"
                    },
                    "record": {
                        "type": "boolean",
                        "description": "Also add the query to the search history (default: false)"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let query = require_str(&params, "query")?;
        let limit = optional_usize(&params, "limit");
        let record = params
            .get("record")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let mut results = self.store.search(query);
        if let Some(limit) = limit {
            results.truncate(limit);
        }
        if record {
            self.store.add_search(query)?;
        }

        json_response(&results)
    }
}
