//! Deterministic daily picks
//!
//! The seed is the 32-bit string hash of the ISO date, so every run on the
//! same day produces the same three slots for the same collection.

use chrono::NaiveDate;

use super::season::Season;
use crate::types::{DailyRecommend, Herb, RecommendType};

/// Reason used when a contrast herb's first cross-reference can't be resolved
pub const GENERIC_CONTRAST_REASON: &str = "易与其他药混淆，重点记忆";

/// 32-bit polynomial string hash (`h = 31*h + unit` over UTF-16 units, wrapping)
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Seed for a calendar day, hashed from its `YYYY-MM-DD` form
pub fn date_seed(date: NaiveDate) -> i32 {
    string_hash(&date.format("%Y-%m-%d").to_string())
}

/// Floor-mod index into a pool, `None` when the pool is empty
fn pick_index(seed: i32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = i64::try_from(len).ok()?;
    usize::try_from(i64::from(seed).rem_euclid(len)).ok()
}

/// Herb whose effects mention one of the season's keywords
pub fn seasonal_pick<'a>(herbs: &'a [Herb], season: Season, seed: i32) -> Option<&'a Herb> {
    let keywords = season.keywords();
    let candidates: Vec<&Herb> = herbs
        .iter()
        .filter(|herb| {
            keywords
                .iter()
                .any(|keyword| herb.effects.iter().any(|e| e.contains(keyword)))
        })
        .collect();

    pick_index(seed, candidates.len()).map(|i| candidates[i])
}

/// Herb drawn from a pool where each herb appears `exam_frequency` times
pub fn exam_pick(herbs: &[Herb], seed: i32) -> Option<&Herb> {
    let pool: Vec<&Herb> = herbs
        .iter()
        .flat_map(|herb| std::iter::repeat(herb).take(usize::from(herb.exam_frequency)))
        .collect();

    pick_index(seed, pool.len()).map(|i| pool[i])
}

/// Herb with at least one cross-referenced look-alike
pub fn contrast_pick(herbs: &[Herb], seed: i32) -> Option<&Herb> {
    let candidates: Vec<&Herb> = herbs.iter().filter(|h| !h.similar_to.is_empty()).collect();
    pick_index(seed, candidates.len()).map(|i| candidates[i])
}

fn exam_reason(herb: &Herb) -> String {
    format!(
        "历年考试高频出现，{}重点药",
        "★".repeat(usize::from(herb.exam_frequency))
    )
}

fn contrast_reason(herb: &Herb, herbs: &[Herb]) -> String {
    herb.similar_to
        .first()
        .and_then(|id| herbs.iter().find(|h| &h.id == id))
        .map(|similar| format!("常与{} 混淆，注意区分", similar.name))
        .unwrap_or_else(|| GENERIC_CONTRAST_REASON.to_string())
}

/// Pick up to three recommendations for `date`: seasonal, exam, contrast.
///
/// A slot is left out when its candidate pool is empty.
pub fn pick_daily(herbs: &[Herb], date: NaiveDate) -> Vec<DailyRecommend> {
    let seed = date_seed(date);
    let season = Season::from_date(date);
    let mut recommends = Vec::with_capacity(3);

    if let Some(herb) = seasonal_pick(herbs, season, seed) {
        recommends.push(DailyRecommend::new(
            herb.clone(),
            season.reason(),
            RecommendType::Seasonal,
        ));
    }

    if let Some(herb) = exam_pick(herbs, seed.wrapping_add(1)) {
        recommends.push(DailyRecommend::new(
            herb.clone(),
            exam_reason(herb),
            RecommendType::Exam,
        ));
    }

    if let Some(herb) = contrast_pick(herbs, seed.wrapping_add(2)) {
        recommends.push(DailyRecommend::new(
            herb.clone(),
            contrast_reason(herb, herbs),
            RecommendType::Contrast,
        ));
    }

    tracing::debug!(
        date = %date,
        seed,
        picks = recommends.len(),
        "computed daily recommendations"
    );
    recommends
}
