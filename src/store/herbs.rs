//! Herb catalog queries

use chrono::NaiveDate;

use crate::error::{HerbError, HerbResult};
use crate::recommend::pick_daily;
use crate::search::search_herbs;
use crate::types::{
    category_name_for_id, default_categories, DailyRecommend, Herb, HerbCategory, SearchResult,
};

use super::HerbStore;

/// All herbs in catalog order
pub fn get_all_herbs(store: &HerbStore) -> Vec<Herb> {
    store.state.read().herbs.clone()
}

pub fn get_herb_by_id(store: &HerbStore, id: &str) -> Option<Herb> {
    store.state.read().herbs.iter().find(|h| h.id == id).cloned()
}

/// Herbs filed under a category name
pub fn get_herbs_by_category(store: &HerbStore, category: &str) -> Vec<Herb> {
    store
        .state
        .read()
        .herbs
        .iter()
        .filter(|h| h.category == category)
        .cloned()
        .collect()
}

/// Herbs for a browse category id ("1".."6"; anything else maps to 其他)
pub fn get_herbs_by_category_id(store: &HerbStore, category_id: &str) -> Vec<Herb> {
    get_herbs_by_category(store, category_name_for_id(category_id))
}

/// The fixed browse categories with live herb counts
pub fn categories(store: &HerbStore) -> Vec<HerbCategory> {
    let state = store.state.read();
    default_categories(|name| state.herbs.iter().filter(|h| h.category == name).count())
}

/// Insert or replace herbs by id, then persist the catalog.
/// Returns how many herbs were written.
pub fn import_herbs(store: &HerbStore, herbs: Vec<Herb>) -> HerbResult<usize> {
    for herb in &herbs {
        herb.validate().map_err(HerbError::InvalidHerb)?;
    }

    let mut state = store.state.write();
    let count = herbs.len();
    let mut catalog = state.herbs.clone();

    for herb in herbs {
        match catalog.iter().position(|h| h.id == herb.id) {
            Some(i) => catalog[i] = herb,
            None => catalog.push(herb),
        }
    }

    store.persist_herbs(&catalog)?;
    state.herbs = catalog;
    tracing::info!(imported = count, total = state.herbs.len(), "herbs imported");
    Ok(count)
}

/// Rank the catalog against a free-text query
pub fn search(store: &HerbStore, query: &str) -> Vec<SearchResult> {
    let state = store.state.read();
    let results = search_herbs(&state.herbs, query);
    tracing::debug!(query, results = results.len(), "search");
    results
}

/// Daily picks over the current catalog
pub fn daily_recommend(store: &HerbStore, date: NaiveDate) -> Vec<DailyRecommend> {
    pick_daily(&store.state.read().herbs, date)
}
