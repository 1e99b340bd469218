//! List favorites tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::json_response;
use crate::store::HerbStore;
use crate::types::McpResult;

pub struct ListFavoritesTool {
    store: Arc<HerbStore>,
}

impl ListFavoritesTool {
    pub fn new(store: Arc<HerbStore>) -> Self {
        Self { store }
    }
}

impl Tool for ListFavoritesTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "list_favorites",
            "List favorite herbs, most recently added first",
            json!({ "type": "object", "properties": {} }),
        )
    }

    fn execute(&self, _params: Value) -> McpResult<Value> {
        json_response(&self.store.get_favorites())
    }
}
