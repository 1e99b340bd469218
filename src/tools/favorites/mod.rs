//! Favorite tools

mod add_favorite;
mod list_favorites;
mod remove_favorite;

pub use add_favorite::AddFavoriteTool;
pub use list_favorites::ListFavoritesTool;
pub use remove_favorite::RemoveFavoriteTool;
