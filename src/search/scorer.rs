//! Keyword matching and relevance scoring
//!
//! Each query keyword is expanded through the synonym table and tested against
//! a herb in priority order: effects, then name/pinyin/aliases, then the key
//! point, then indications. Only the first class that hits scores for that
//! keyword.

use std::collections::HashSet;

use rayon::prelude::*;

use super::synonyms::expand_synonyms;
use crate::types::{Herb, SearchResult};

pub const EFFECT_POINTS: i32 = 40;
pub const NAME_POINTS: i32 = 30;
pub const KEY_POINT_POINTS: i32 = 25;
pub const INDICATION_POINTS: i32 = 20;
/// Awarded when every distinct keyword hit the herb's effects
pub const FULL_COVERAGE_BONUS: i32 = 20;
pub const COMMON_HERB_BONUS: i32 = 5;
/// Points per exam-frequency step above 1
pub const EXAM_FREQUENCY_STEP: i32 = 2;
pub const MAX_SCORE: i32 = 100;

/// Threshold for using parallel scoring (herb count)
const PARALLEL_SEARCH_THRESHOLD: usize = 1000;

/// Which part of a herb a keyword matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Effect,
    Name,
    KeyPoint,
    Indication,
}

impl MatchKind {
    /// Match classes in the order they are tried
    pub const PRIORITY: [MatchKind; 4] = [
        MatchKind::Effect,
        MatchKind::Name,
        MatchKind::KeyPoint,
        MatchKind::Indication,
    ];

    pub fn points(self) -> i32 {
        match self {
            MatchKind::Effect => EFFECT_POINTS,
            MatchKind::Name => NAME_POINTS,
            MatchKind::KeyPoint => KEY_POINT_POINTS,
            MatchKind::Indication => INDICATION_POINTS,
        }
    }

    /// Containment test of a single term against this part of the herb
    pub fn matches(self, herb: &Herb, term: &str) -> bool {
        match self {
            MatchKind::Effect => herb.effects.iter().any(|e| e.contains(term)),
            MatchKind::Name => {
                herb.name.contains(term)
                    || herb.pinyin.to_lowercase().contains(&term.to_lowercase())
                    || herb.aliases.iter().any(|a| a.contains(term))
            }
            MatchKind::KeyPoint => herb
                .key_point
                .as_deref()
                .is_some_and(|k| k.contains(term)),
            MatchKind::Indication => herb.indications.iter().any(|i| i.contains(term)),
        }
    }
}

/// A query keyword together with its synonym expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedKeyword {
    pub keyword: String,
    pub terms: Vec<String>,
}

impl ExpandedKeyword {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            terms: expand_synonyms(keyword),
        }
    }

    /// First match class any of the terms hits, if any
    pub fn best_match(&self, herb: &Herb) -> Option<MatchKind> {
        MatchKind::PRIORITY
            .into_iter()
            .find(|kind| self.terms.iter().any(|term| kind.matches(herb, term)))
    }

    /// The term to report for an effect match: the typed keyword when it
    /// hits on its own, otherwise the first synonym that does
    fn effect_term(&self, herb: &Herb) -> Option<&str> {
        if MatchKind::Effect.matches(herb, &self.keyword) {
            return Some(&self.keyword);
        }
        self.terms
            .iter()
            .map(String::as_str)
            .find(|term| MatchKind::Effect.matches(herb, term))
    }
}

/// Split a raw query on whitespace and expand every keyword.
/// Repeated keywords are kept, each with its own expansion.
pub fn parse_query(query: &str) -> Vec<ExpandedKeyword> {
    query.split_whitespace().map(ExpandedKeyword::new).collect()
}

/// Score one herb against the expanded keywords
pub fn score_herb(herb: &Herb, keywords: &[ExpandedKeyword]) -> SearchResult {
    let mut score = 0;
    let mut matched_effects: Vec<String> = Vec::new();
    let mut effect_covered: HashSet<&str> = HashSet::new();

    for keyword in keywords {
        let Some(kind) = keyword.best_match(herb) else {
            continue;
        };
        score += kind.points();

        if kind == MatchKind::Effect {
            effect_covered.insert(keyword.keyword.as_str());
            if let Some(term) = keyword.effect_term(herb) {
                if !matched_effects.iter().any(|m| m == term) {
                    matched_effects.push(term.to_string());
                }
            }
        }
    }

    let distinct_keywords: HashSet<&str> = keywords.iter().map(|k| k.keyword.as_str()).collect();
    if !distinct_keywords.is_empty() && effect_covered.len() == distinct_keywords.len() {
        score += FULL_COVERAGE_BONUS;
    }

    if herb.is_common {
        score += COMMON_HERB_BONUS;
    }

    score += (i32::from(herb.exam_frequency) - 1) * EXAM_FREQUENCY_STEP;

    SearchResult {
        herb: herb.clone(),
        score: score.clamp(0, MAX_SCORE) as u32,
        matched_effects,
    }
}

/// Search herbs by free-text query.
///
/// Returns every herb with a positive score, highest first. Herbs with equal
/// scores keep their collection order. A blank query yields no results.
pub fn search_herbs(herbs: &[Herb], query: &str) -> Vec<SearchResult> {
    let keywords = parse_query(query);
    if keywords.is_empty() {
        return Vec::new();
    }

    let scored: Vec<SearchResult> = if herbs.len() > PARALLEL_SEARCH_THRESHOLD {
        // Parallel scoring using Rayon; collect keeps input order
        herbs
            .par_iter()
            .map(|herb| score_herb(herb, &keywords))
            .collect()
    } else {
        herbs.iter().map(|herb| score_herb(herb, &keywords)).collect()
    };

    let mut results: Vec<SearchResult> = scored.into_iter().filter(|r| r.score > 0).collect();
    // sort_by is stable, ties stay in collection order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn herb(id: &str, effects: &[&str]) -> Herb {
        Herb::with_effects(
            id,
            id,
            "测试",
            effects.iter().map(|e| e.to_string()).collect(),
        )
    }

    #[test]
    fn test_single_effect_match_with_full_coverage() {
        let herbs = vec![herb("danshen", &["活血化瘀"])];
        let results = search_herbs(&herbs, "活血");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 60);
        assert_eq!(results[0].matched_effects, vec!["活血".to_string()]);
    }

    #[test]
    fn test_blank_query_is_empty() {
        let herbs = vec![herb("danshen", &["活血化瘀"])];
        assert!(search_herbs(&herbs, "").is_empty());
        assert!(search_herbs(&herbs, "   \t\n").is_empty());
    }

    #[test]
    fn test_synonym_hits_effect() {
        let herbs = vec![herb("taoren", &["破血逐瘀"])];
        let results = search_herbs(&herbs, "活血");

        assert_eq!(results[0].score, 60);
        assert_eq!(results[0].matched_effects, vec!["逐瘀".to_string()]);
    }

    #[test]
    fn test_common_adds_five() {
        let plain = herb("a", &["补气升阳"]);
        let mut common = herb("b", &["补气升阳"]);
        common.is_common = true;

        let results = search_herbs(&[plain, common], "补气");
        assert_eq!(results[0].herb.id, "b");
        assert_eq!(results[0].score, results[1].score + 5);
    }

    #[test]
    fn test_full_coverage_bonus() {
        let full = herb("full", &["活血", "止痛"]);
        let partial = herb("partial", &["活血"]);

        let results = search_herbs(&[partial, full], "活血 止痛");
        assert_eq!(results[0].herb.id, "full");
        // 40 + 40 + 20
        assert_eq!(results[0].score, 100);
        // 40, no bonus
        assert_eq!(results[1].score, 40);
    }

    #[test]
    fn test_exam_frequency_weight() {
        let mut h = herb("a", &["安神定志"]);
        h.exam_frequency = 4;
        let results = search_herbs(&[h], "安神");
        // 40 + 20 + (4 - 1) * 2
        assert_eq!(results[0].score, 66);
    }

    #[test]
    fn test_match_priority() {
        let mut by_name = herb("name", &[]);
        by_name.name = "人参".to_string();
        by_name.indications = vec!["人参中毒".to_string()];

        let mut by_key_point = herb("key", &[]);
        by_key_point.key_point = Some("人参替代".to_string());
        by_key_point.indications = vec!["人参".to_string()];

        let mut by_indication = herb("ind", &[]);
        by_indication.indications = vec!["人参过量".to_string()];

        let results = search_herbs(&[by_indication, by_key_point, by_name], "人参");
        let scores: Vec<(String, u32)> = results
            .iter()
            .map(|r| (r.herb.id.clone(), r.score))
            .collect();
        assert_eq!(
            scores,
            vec![
                ("name".to_string(), 30),
                ("key".to_string(), 25),
                ("ind".to_string(), 20)
            ]
        );
        assert!(results.iter().all(|r| r.matched_effects.is_empty()));
    }

    #[test]
    fn test_pinyin_ignores_case() {
        let mut h = herb("renshen", &[]);
        h.name = "人参".to_string();
        h.pinyin = "RenShen".to_string();
        let results = search_herbs(&[h], "renshen");
        assert_eq!(results[0].score, 30);
    }

    #[test]
    fn test_alias_match() {
        let mut h = herb("dangshen", &[]);
        h.aliases = vec!["上党人参".to_string()];
        assert_eq!(search_herbs(&[h], "上党")[0].score, 30);
    }

    #[test]
    fn test_score_clamped_to_100() {
        let mut h = herb("a", &["活血", "补气", "安神"]);
        h.is_common = true;
        h.exam_frequency = 5;
        let results = search_herbs(&[h], "活血 补气 安神");
        assert_eq!(results[0].score, 100);
    }

    #[test]
    fn test_repeated_keyword_scores_each_time() {
        let results = search_herbs(&[herb("a", &["益气"])], "补气 补气");
        // 40 + 40 + 20, then clamped
        assert_eq!(results[0].score, 100);
        assert_eq!(results[0].matched_effects, vec!["益气".to_string()]);
    }

    #[test]
    fn test_non_matching_herbs_dropped() {
        let herbs = vec![herb("a", &["清热"]), herb("b", &["活血"])];
        let results = search_herbs(&herbs, "活血");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].herb.id, "b");
    }

    #[test]
    fn test_flag_points_apply_without_keyword_match() {
        let mut h = herb("a", &["清热"]);
        h.is_common = true;
        let results = search_herbs(&[h], "活血");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 5);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let herbs = vec![herb("first", &["活血"]), herb("second", &["化瘀"]), herb("third", &["散瘀"])];
        let ids: Vec<String> = search_herbs(&herbs, "活血")
            .into_iter()
            .map(|r| r.herb.id)
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_results_sorted_and_in_range() {
        let mut herbs = Vec::new();
        for i in 0..30u8 {
            let mut h = herb(&format!("h{i}"), if i % 3 == 0 { &["活血"] } else { &["止痛"] });
            h.exam_frequency = i % 5 + 1;
            h.is_common = i % 2 == 0;
            if i % 4 == 0 {
                h.indications = vec!["血瘀".to_string()];
            }
            herbs.push(h);
        }

        let results = search_herbs(&herbs, "活血 血瘀");
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| (1..=100).contains(&r.score)));
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let herbs: Vec<Herb> = (0..1500)
            .map(|i| {
                let mut h = herb(&format!("h{i}"), if i % 7 == 0 { &["活血"] } else { &["利水"] });
                h.exam_frequency = (i % 5 + 1) as u8;
                h
            })
            .collect();

        let keywords = parse_query("活血");
        let mut expected: Vec<SearchResult> = herbs
            .iter()
            .map(|h| score_herb(h, &keywords))
            .filter(|r| r.score > 0)
            .collect();
        expected.sort_by(|a, b| b.score.cmp(&a.score));

        assert_eq!(search_herbs(&herbs, "活血"), expected);
    }
}
