//! List herbs tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, optional_str};
use crate::store::HerbStore;
use crate::types::McpResult;

/// Tool for browsing the catalog, optionally by category
pub struct ListHerbsTool {
    store: Arc<HerbStore>,
}

impl ListHerbsTool {
    pub fn new(store: Arc<HerbStore>) -> Self {
        Self { store }
    }
}

impl Tool for ListHerbsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "list_herbs",
            "List herbs in catalog order. Filter by category name (e.g. '清热药') or browse category id ('1'-'6').",
            json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "Category name to filter by"
                    },
                    "categoryId": {
                        "type": "string",
                        "description": "Browse category id; ignored when category is given"
                    }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let herbs = match (
            optional_str(&params, "category"),
            optional_str(&params, "categoryId"),
        ) {
            (Some(category), _) => self.store.get_herbs_by_category(category),
            (None, Some(id)) => self.store.get_herbs_by_category_id(id),
            (None, None) => self.store.get_all_herbs(),
        };
        json_response(&herbs)
    }
}
