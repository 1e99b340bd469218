//! Search history

use crate::error::HerbResult;
use crate::types::SearchHistoryEntry;
use crate::utils::time::current_timestamp_millis;

use super::{HerbStore, StoreState};

/// How many recent searches are returned
pub const RECENT_SEARCH_LIMIT: usize = 10;

/// How many entries are kept on disk
pub const HISTORY_CAPACITY: usize = 100;

/// Recent queries, newest first
pub fn recent_searches(store: &HerbStore) -> Vec<String> {
    store
        .state
        .read()
        .history
        .iter()
        .take(RECENT_SEARCH_LIMIT)
        .map(|e| e.query.clone())
        .collect()
}

/// Record a query. Blank queries are ignored; repeating a query moves it
/// to the front.
pub fn add_search(store: &HerbStore, query: &str) -> HerbResult<()> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(());
    }

    let mut state = store.state.write();
    let mut history = Vec::with_capacity(HISTORY_CAPACITY);
    history.push(SearchHistoryEntry {
        query: query.to_string(),
        searched_at: current_timestamp_millis(),
    });
    history.extend(
        state
            .history
            .iter()
            .filter(|e| e.query != query)
            .take(HISTORY_CAPACITY - 1)
            .cloned(),
    );

    replace_history(store, &mut state, history)
}

pub fn delete_search(store: &HerbStore, query: &str) -> HerbResult<()> {
    let mut state = store.state.write();
    if !state.history.iter().any(|e| e.query == query) {
        return Ok(());
    }

    let history = state
        .history
        .iter()
        .filter(|e| e.query != query)
        .cloned()
        .collect();
    replace_history(store, &mut state, history)
}

pub fn clear_history(store: &HerbStore) -> HerbResult<()> {
    let mut state = store.state.write();
    replace_history(store, &mut state, Vec::new())?;
    tracing::debug!("search history cleared");
    Ok(())
}

/// Persist `history`, then swap it in. Memory is untouched if the write fails.
fn replace_history(
    store: &HerbStore,
    state: &mut StoreState,
    history: Vec<SearchHistoryEntry>,
) -> HerbResult<()> {
    store.persist_state(&state.favorites, &history)?;
    state.history = history;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{block_path, store_with};

    use super::*;

    #[test]
    fn test_recent_newest_first_and_deduplicated() {
        let (store, _dir) = store_with(vec![]);
        store.add_search("活血").unwrap();
        store.add_search("补气").unwrap();
        store.add_search("  活血  ").unwrap();

        assert_eq!(store.recent_searches(), vec!["活血", "补气"]);
    }

    #[test]
    fn test_blank_query_ignored() {
        let (store, _dir) = store_with(vec![]);
        store.add_search("   ").unwrap();
        assert!(store.recent_searches().is_empty());
    }

    #[test]
    fn test_recent_limit() {
        let (store, _dir) = store_with(vec![]);
        for i in 0..15 {
            store.add_search(&format!("q{i}")).unwrap();
        }
        let recent = store.recent_searches();
        assert_eq!(recent.len(), RECENT_SEARCH_LIMIT);
        assert_eq!(recent[0], "q14");
    }

    #[test]
    fn test_capacity_bound() {
        let (store, _dir) = store_with(vec![]);
        for i in 0..(HISTORY_CAPACITY + 5) {
            store.add_search(&format!("q{i}")).unwrap();
        }
        assert_eq!(store.state.read().history.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn test_delete_and_clear() {
        let (store, _dir) = store_with(vec![]);
        store.add_search("活血").unwrap();
        store.add_search("补气").unwrap();

        store.delete_search("活血").unwrap();
        assert_eq!(store.recent_searches(), vec!["补气"]);

        store.clear_history().unwrap();
        assert!(store.recent_searches().is_empty());
    }

    #[test]
    fn test_failed_write_leaves_history_unchanged() {
        let (store, _dir) = store_with(vec![]);
        store.add_search("活血").unwrap();
        block_path(store.state_path());

        assert!(store.add_search("补气").is_err());
        assert!(store.delete_search("活血").is_err());
        assert!(store.clear_history().is_err());
        assert_eq!(store.recent_searches(), vec!["活血"]);
    }
}
