//! Snapshot boundary between the store and the pure search/recommend code

use chrono::NaiveDate;

use crate::error::HerbResult;
use crate::recommend::pick_daily;
use crate::search::search_herbs;
use crate::types::{DailyRecommend, Herb, SearchResult};

use super::HerbStore;

/// Anything that can hand over the current full herb collection
pub trait HerbSource {
    fn snapshot(&self) -> HerbResult<Vec<Herb>>;

    /// Search the current snapshot
    fn search_snapshot(&self, query: &str) -> HerbResult<Vec<SearchResult>> {
        Ok(search_herbs(&self.snapshot()?, query))
    }

    /// Daily picks over the current snapshot
    fn daily_snapshot(&self, date: NaiveDate) -> HerbResult<Vec<DailyRecommend>> {
        Ok(pick_daily(&self.snapshot()?, date))
    }
}

impl HerbSource for HerbStore {
    fn snapshot(&self) -> HerbResult<Vec<Herb>> {
        Ok(self.get_all_herbs())
    }
}

impl HerbSource for Vec<Herb> {
    fn snapshot(&self) -> HerbResult<Vec<Herb>> {
        Ok(self.clone())
    }
}
