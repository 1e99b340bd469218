//! MCP Tools implementation
//!
//! This module contains all 11 MCP tools organized by category:
//! - Catalog tools (5): search, lookup, browse, daily picks
//! - Favorite tools (3)
//! - History tools (3)

pub mod catalog;
pub mod favorites;
pub mod history;

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::server::McpServer;
use crate::store::HerbStore;

// Re-export all tools for convenience
pub use catalog::{
    DailyRecommendTool, GetHerbTool, ListCategoriesTool, ListHerbsTool, SearchHerbsTool,
};
pub use favorites::{AddFavoriteTool, ListFavoritesTool, RemoveFavoriteTool};
pub use history::{ClearSearchHistoryTool, DeleteSearchTool, RecentSearchesTool};

/// Register all tools with the MCP server
pub fn register_all_tools<R: BufRead, W: Write>(server: &mut McpServer<R, W>, store: Arc<HerbStore>) {
    // Catalog tools (5)
    server.register_tool(Box::new(SearchHerbsTool::new(store.clone())));
    server.register_tool(Box::new(GetHerbTool::new(store.clone())));
    server.register_tool(Box::new(ListHerbsTool::new(store.clone())));
    server.register_tool(Box::new(ListCategoriesTool::new(store.clone())));
    server.register_tool(Box::new(DailyRecommendTool::new(store.clone())));

    // Favorite tools (3)
    server.register_tool(Box::new(AddFavoriteTool::new(store.clone())));
    server.register_tool(Box::new(RemoveFavoriteTool::new(store.clone())));
    server.register_tool(Box::new(ListFavoritesTool::new(store.clone())));

    // History tools (3)
    server.register_tool(Box::new(RecentSearchesTool::new(store.clone())));
    server.register_tool(Box::new(DeleteSearchTool::new(store.clone())));
    server.register_tool(Box::new(ClearSearchHistoryTool::new(store)));
}
