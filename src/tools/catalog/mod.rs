//! Catalog tools: search, lookup, browse and daily picks

mod daily_recommend;
mod get_herb;
mod list_categories;
mod list_herbs;
mod search_herbs;

pub use daily_recommend::DailyRecommendTool;
pub use get_herb::GetHerbTool;
pub use list_categories::ListCategoriesTool;
pub use list_herbs::ListHerbsTool;
pub use search_herbs::SearchHerbsTool;
