//! Search history tools

mod clear_search_history;
mod delete_search;
mod recent_searches;

pub use clear_search_history::ClearSearchHistoryTool;
pub use delete_search::DeleteSearchTool;
pub use recent_searches::RecentSearchesTool;
