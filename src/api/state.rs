//! Shared state for HTTP handlers

use std::sync::Arc;

use crate::store::HerbStore;

/// Application state handed to every handler
pub struct AppState {
    pub store: Arc<HerbStore>,
}

impl AppState {
    pub fn new(store: Arc<HerbStore>) -> Self {
        Self { store }
    }
}
