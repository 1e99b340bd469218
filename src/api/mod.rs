//! API module for HTTP endpoints
//!
//! REST access to the herb catalog, search, daily picks, favorites and history.

pub mod http;
pub mod rest;
pub mod state;

pub use http::{create_router, serve};
pub use state::AppState;
