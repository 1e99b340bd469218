//! Environment-driven configuration

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{HerbError, HerbResult};

pub const DATA_FILE_ENV: &str = "HERB_DATA_FILE";
pub const STATE_FILE_ENV: &str = "HERB_STATE_FILE";
pub const HTTP_ADDR_ENV: &str = "HERB_HTTP_ADDR";

pub const DEFAULT_DATA_FILE: &str = "herbs.jsonl";
pub const DEFAULT_STATE_FILE: &str = "herb_state.jsonl";

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "herb_mind=info";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Herb catalog (JSONL, one herb per line)
    pub data_file: PathBuf,
    /// Favorites and search history (JSONL)
    pub state_file: PathBuf,
    /// Serve the REST API on this address instead of MCP over stdio
    pub http_addr: Option<SocketAddr>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> HerbResult<Self> {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_lookup(&current_dir, |key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    /// Relative paths resolve against `base_dir`.
    pub fn from_lookup<F>(base_dir: &Path, lookup: F) -> HerbResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str, default: &str| {
            let raw = lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string());
            let path = PathBuf::from(raw);
            if path.is_absolute() {
                path
            } else {
                base_dir.join(path)
            }
        };

        let http_addr = match lookup(HTTP_ADDR_ENV).filter(|v| !v.trim().is_empty()) {
            Some(addr) => Some(addr.trim().parse::<SocketAddr>().map_err(|e| {
                HerbError::Config(format!("{} '{}' is not a socket address: {}", HTTP_ADDR_ENV, addr, e))
            })?),
            None => None,
        };

        Ok(Self {
            data_file: resolve(DATA_FILE_ENV, DEFAULT_DATA_FILE),
            state_file: resolve(STATE_FILE_ENV, DEFAULT_STATE_FILE),
            http_addr,
        })
    }

    /// Configuration with explicit file paths and no HTTP listener
    pub fn with_files(data_file: impl Into<PathBuf>, state_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            state_file: state_file.into(),
            http_addr: None,
        }
    }
}
