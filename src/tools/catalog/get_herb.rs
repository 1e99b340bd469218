//! Get herb tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::HerbError;
use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, require_str};
use crate::store::HerbStore;
use crate::types::McpResult;

/// Tool for reading one herb with its favorite flag
pub struct GetHerbTool {
    store: Arc<HerbStore>,
}

impl GetHerbTool {
    pub fn new(store: Arc<HerbStore>) -> Self {
        Self { store }
    }
}

impl Tool for GetHerbTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "get_herb",
            "Get the full record of a herb by id, including whether it is a favorite",
            json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "Herb id"
                    }
                },
                "required": ["id"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let id = require_str(&params, "id")?;
        let herb = self
            .store
            .get_herb_by_id(id)
            .ok_or_else(|| HerbError::HerbNotFound(id.to_string()))?;

        json_response(&json!({
            "herb": herb,
            "isFavorite": self.store.is_favorite(id),
        }))
    }
}
