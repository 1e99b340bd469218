//! Recent searches tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::json_response;
use crate::store::{HerbStore, RECENT_SEARCH_LIMIT};
use crate::types::McpResult;

pub struct RecentSearchesTool {
    store: Arc<HerbStore>,
}

impl RecentSearchesTool {
    pub fn new(store: Arc<HerbStore>) -> Self {
        Self { store }
    }
}

impl Tool for RecentSearchesTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "recent_searches",
            &format!("List up to {} recent search queries, newest first", RECENT_SEARCH_LIMIT),
            json!({ "type": "object", "properties": {} }),
        )
    }

    fn execute(&self, _params: Value) -> McpResult<Value> {
        json_response(&self.store.recent_searches())
    }
}
