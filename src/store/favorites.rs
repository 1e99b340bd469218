//! Favorite herbs

use std::collections::HashSet;

use crate::error::{HerbError, HerbResult};
use crate::types::{Favorite, Herb};
use crate::utils::time::current_timestamp_millis;

use super::{HerbStore, StoreState};

/// Favorited herbs, most recently added first.
/// Favorites pointing at herbs no longer in the catalog are left out.
pub fn get_favorites(store: &HerbStore) -> Vec<Herb> {
    let state = store.state.read();
    state
        .favorites
        .iter()
        .filter_map(|f| state.herbs.iter().find(|h| h.id == f.herb_id).cloned())
        .collect()
}

pub fn get_favorite_ids(store: &HerbStore) -> HashSet<String> {
    store
        .state
        .read()
        .favorites
        .iter()
        .map(|f| f.herb_id.clone())
        .collect()
}

/// Add a favorite (no-op if already present)
pub fn add_favorite(store: &HerbStore, herb_id: &str) -> HerbResult<()> {
    let mut state = store.state.write();
    insert_favorite(store, &mut state, herb_id)
}

/// Remove a favorite (no-op if absent)
pub fn remove_favorite(store: &HerbStore, herb_id: &str) -> HerbResult<()> {
    let mut state = store.state.write();
    drop_favorite(store, &mut state, herb_id)
}

pub fn is_favorite(store: &HerbStore, herb_id: &str) -> bool {
    store
        .state
        .read()
        .favorites
        .iter()
        .any(|f| f.herb_id == herb_id)
}

/// Flip the favorite flag, returning the new state
pub fn toggle_favorite(store: &HerbStore, herb_id: &str) -> HerbResult<bool> {
    let mut state = store.state.write();
    if state.favorites.iter().any(|f| f.herb_id == herb_id) {
        drop_favorite(store, &mut state, herb_id)?;
        Ok(false)
    } else {
        insert_favorite(store, &mut state, herb_id)?;
        Ok(true)
    }
}

// Both helpers persist the new list before swapping it in, so a failed
// write leaves memory untouched.

fn insert_favorite(store: &HerbStore, state: &mut StoreState, herb_id: &str) -> HerbResult<()> {
    if !state.herbs.iter().any(|h| h.id == herb_id) {
        return Err(HerbError::HerbNotFound(herb_id.to_string()));
    }
    if state.favorites.iter().any(|f| f.herb_id == herb_id) {
        return Ok(());
    }

    let mut favorites = Vec::with_capacity(state.favorites.len() + 1);
    favorites.push(Favorite {
        herb_id: herb_id.to_string(),
        added_at: current_timestamp_millis(),
    });
    favorites.extend(state.favorites.iter().cloned());

    store.persist_state(&favorites, &state.history)?;
    state.favorites = favorites;
    tracing::debug!(herb_id, "favorite added");
    Ok(())
}

fn drop_favorite(store: &HerbStore, state: &mut StoreState, herb_id: &str) -> HerbResult<()> {
    if !state.favorites.iter().any(|f| f.herb_id == herb_id) {
        return Ok(());
    }

    let favorites: Vec<Favorite> = state
        .favorites
        .iter()
        .filter(|f| f.herb_id != herb_id)
        .cloned()
        .collect();

    store.persist_state(&favorites, &state.history)?;
    state.favorites = favorites;
    tracing::debug!(herb_id, "favorite removed");
    Ok(())
}
