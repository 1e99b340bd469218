//! Daily recommendations
//!
//! Up to three herbs per calendar day, chosen deterministically from a
//! date-derived seed.

mod daily;
mod season;

pub use daily::{
    contrast_pick, date_seed, exam_pick, pick_daily, seasonal_pick, string_hash,
    GENERIC_CONTRAST_REASON,
};
pub use season::Season;

