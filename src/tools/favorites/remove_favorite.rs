//! Remove favorite tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, require_str};
use crate::store::HerbStore;
use crate::types::McpResult;

pub struct RemoveFavoriteTool {
    store: Arc<HerbStore>,
}

impl RemoveFavoriteTool {
    pub fn new(store: Arc<HerbStore>) -> Self {
        Self { store }
    }
}

impl Tool for RemoveFavoriteTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "remove_favorite",
            "Remove a herb from favorites",
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
        self.store.remove_favorite(herb_id)?;
        json_response(&json!({ "herbId": herb_id, "isFavorite": false }))
    }
}
