//! Add favorite tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, require_str};
use crate::store::HerbStore;
use crate::types::McpResult;

pub struct AddFavoriteTool {
    store: Arc<HerbStore>,
}

impl AddFavoriteTool {
    pub fn new(store: Arc<HerbStore>) -> Self {
        Self { store }
    }
}

impl Tool for AddFavoriteTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "add_favorite",
            "Mark a herb as favorite. Adding an existing favorite is a no-op.",
            json!({
                "type": "object",
                "properties": {
                    "herbId": { "type": "string", "description": "Herb id" }
                },
                "required": ["herbId"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let herb_id = require_str(&params, "herbId")?;
        self.store.add_favorite(herb_id)?;
        json_response(&json!({ "herbId": herb_id, "isFavorite": true }))
    }
}
