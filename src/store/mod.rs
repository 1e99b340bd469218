//! Herb store - file-backed repository
//!
//! Holds the herb catalog plus the user's favorites and search history in
//! memory behind a single lock. Every mutation rewrites the affected JSONL
//! file atomically while the write lock is held.

mod favorites;
mod herbs;
mod history;
mod source;

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::config::Config;
use crate::error::HerbResult;
use crate::types::{
    DailyRecommend, Favorite, Herb, HerbCategory, SearchHistoryEntry, SearchResult, StateRecord,
};
use crate::utils::atomic::{atomic_write_with, cleanup_temp_file};

pub use history::{HISTORY_CAPACITY, RECENT_SEARCH_LIMIT};
pub use source::HerbSource;

/// In-memory contents of both store files
#[derive(Debug, Default, Clone)]
pub(crate) struct StoreState {
    pub(crate) herbs: Vec<Herb>,
    /// Newest first
    pub(crate) favorites: Vec<Favorite>,
    /// Newest first
    pub(crate) history: Vec<SearchHistoryEntry>,
}

/// File-backed herb repository, safe to share behind `Arc`
pub struct HerbStore {
    pub(crate) data_path: PathBuf,
    pub(crate) state_path: PathBuf,
    pub(crate) state: RwLock<StoreState>,
}

impl HerbStore {
    /// Open the store described by `config`
    pub fn open(config: &Config) -> HerbResult<Self> {
        Self::with_paths(&config.data_file, &config.state_file)
    }

    /// Open a store from explicit catalog and state paths.
    /// Missing files load as empty.
    pub fn with_paths(data_path: impl AsRef<Path>, state_path: impl AsRef<Path>) -> HerbResult<Self> {
        let data_path = data_path.as_ref().to_path_buf();
        let state_path = state_path.as_ref().to_path_buf();

        for path in [&data_path, &state_path] {
            if cleanup_temp_file(path)? {
                tracing::warn!(path = %path.display(), "removed leftover temp file from interrupted write");
            }
        }

        let herbs = Self::load_herbs(&data_path)?;
        let (favorites, history) = Self::load_state(&state_path)?;

        tracing::info!(
            herbs = herbs.len(),
            favorites = favorites.len(),
            history = history.len(),
            data = %data_path.display(),
            "herb store opened"
        );

        Ok(Self {
            data_path,
            state_path,
            state: RwLock::new(StoreState {
                herbs,
                favorites,
                history,
            }),
        })
    }

    /// Load the herb catalog, skipping unparsable or invalid lines
    fn load_herbs(path: &Path) -> HerbResult<Vec<Herb>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        let mut herbs: Vec<Herb> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let herb = match serde_json::from_str::<Herb>(line) {
                Ok(herb) => herb,
                Err(e) => {
                    tracing::warn!(line = line_no + 1, error = %e, "skipping unparsable herb row");
                    continue;
                }
            };

            if let Err(reason) = herb.validate() {
                tracing::warn!(line = line_no + 1, %reason, "skipping invalid herb row");
                continue;
            }

            if !seen.insert(herb.id.clone()) {
                tracing::warn!(line = line_no + 1, id = %herb.id, "skipping duplicate herb id");
                continue;
            }

            herbs.push(herb);
        }

        Ok(herbs)
    }

    /// Load favorites and search history
    fn load_state(path: &Path) -> HerbResult<(Vec<Favorite>, Vec<SearchHistoryEntry>)> {
        let mut favorites = Vec::new();
        let mut history = Vec::new();

        if !path.exists() {
            return Ok((favorites, history));
        }

        let content = fs::read_to_string(path)?;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<StateRecord>(line) {
                Ok(StateRecord::Favorite(favorite)) => favorites.push(favorite),
                Ok(StateRecord::Search(entry)) => history.push(entry),
                Err(e) => tracing::warn!(error = %e, "skipping unparsable state row"),
            }
        }

        Ok((favorites, history))
    }

    /// Rewrite the catalog file (caller holds the write lock)
    pub(crate) fn persist_herbs(&self, herbs: &[Herb]) -> HerbResult<()> {
        let lines = herbs
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;

        atomic_write_with(&self.data_path, |out| {
            for line in &lines {
                writeln!(out, "{}", line)?;
            }
            Ok(())
        })?;
        Ok(())
    }

    /// Rewrite the state file (caller holds the write lock)
    pub(crate) fn persist_state(
        &self,
        favorites: &[Favorite],
        history: &[SearchHistoryEntry],
    ) -> HerbResult<()> {
        let mut lines = Vec::with_capacity(favorites.len() + history.len());
        for favorite in favorites {
            lines.push(serde_json::to_string(&StateRecord::Favorite(favorite.clone()))?);
        }
        for entry in history {
            lines.push(serde_json::to_string(&StateRecord::Search(entry.clone()))?);
        }

        atomic_write_with(&self.state_path, |out| {
            for line in &lines {
                writeln!(out, "{}", line)?;
            }
            Ok(())
        })?;
        Ok(())
    }

    /// Get the catalog file path
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Get the state file path
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Number of herbs in the catalog
    pub fn herb_count(&self) -> usize {
        self.state.read().herbs.len()
    }
}

// Re-export methods from submodules by implementing them here
impl HerbStore {
    // Herb queries (from herbs.rs)
    pub fn get_all_herbs(&self) -> Vec<Herb> {
        herbs::get_all_herbs(self)
    }

    pub fn get_herb_by_id(&self, id: &str) -> Option<Herb> {
        herbs::get_herb_by_id(self, id)
    }

    pub fn get_herbs_by_category(&self, category: &str) -> Vec<Herb> {
        herbs::get_herbs_by_category(self, category)
    }

    pub fn get_herbs_by_category_id(&self, category_id: &str) -> Vec<Herb> {
        herbs::get_herbs_by_category_id(self, category_id)
    }

    pub fn categories(&self) -> Vec<HerbCategory> {
        herbs::categories(self)
    }

    pub fn import_herbs(&self, herbs: Vec<Herb>) -> HerbResult<usize> {
        herbs::import_herbs(self, herbs)
    }

    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        herbs::search(self, query)
    }

    pub fn daily_recommend(&self, date: NaiveDate) -> Vec<DailyRecommend> {
        herbs::daily_recommend(self, date)
    }

    // Favorites (from favorites.rs)
    pub fn get_favorites(&self) -> Vec<Herb> {
        favorites::get_favorites(self)
    }

    pub fn get_favorite_ids(&self) -> HashSet<String> {
        favorites::get_favorite_ids(self)
    }

    pub fn add_favorite(&self, herb_id: &str) -> HerbResult<()> {
        favorites::add_favorite(self, herb_id)
    }

    pub fn remove_favorite(&self, herb_id: &str) -> HerbResult<()> {
        favorites::remove_favorite(self, herb_id)
    }

    pub fn is_favorite(&self, herb_id: &str) -> bool {
        favorites::is_favorite(self, herb_id)
    }

    pub fn toggle_favorite(&self, herb_id: &str) -> HerbResult<bool> {
        favorites::toggle_favorite(self, herb_id)
    }

    // Search history (from history.rs)
    pub fn recent_searches(&self) -> Vec<String> {
        history::recent_searches(self)
    }

    pub fn add_search(&self, query: &str) -> HerbResult<()> {
        history::add_search(self, query)
    }

    pub fn delete_search(&self, query: &str) -> HerbResult<()> {
        history::delete_search(self, query)
    }

    pub fn clear_history(&self) -> HerbResult<()> {
        history::clear_history(self)
    }
}
