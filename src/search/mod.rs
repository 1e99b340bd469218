//! Keyword search with synonym expansion and relevance scoring
//!
//! - `synonyms`: fixed concept → synonym table and expansion
//! - `scorer`: per-herb match classification, scoring and ranking

mod scorer;
mod synonyms;

pub use scorer::{
    parse_query, score_herb, search_herbs, ExpandedKeyword, MatchKind, COMMON_HERB_BONUS,
    EFFECT_POINTS, EXAM_FREQUENCY_STEP, FULL_COVERAGE_BONUS, INDICATION_POINTS, KEY_POINT_POINTS,
    MAX_SCORE, NAME_POINTS,
};
pub use synonyms::{expand_synonyms, find_group, has_synonyms, SYNONYM_GROUPS};
