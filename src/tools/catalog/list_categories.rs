//! List categories tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::json_response;
use crate::store::HerbStore;
use crate::types::McpResult;

pub struct ListCategoriesTool {
    store: Arc<HerbStore>,
}

impl ListCategoriesTool {
    pub fn new(store: Arc<HerbStore>) -> Self {
        Self { store }
    }
}

impl Tool for ListCategoriesTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "list_categories",
            "List the browse categories with their herb counts",
            json!({ "type": "object", "properties": {} }),
        )
    }

    fn execute(&self, _params: Value) -> McpResult<Value> {
        json_response(&self.store.categories())
    }
}
