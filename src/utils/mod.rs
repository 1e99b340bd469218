//! Utility functions and helpers
//!
//! This module contains timestamp and atomic file helpers.

pub mod atomic;
pub mod time;

pub use atomic::{atomic_write_with, cleanup_temp_file};
pub use time::{current_timestamp_millis, date_or_today, parse_iso_date, today_local};
