//! HerbMind
//!
//! Backend for a traditional-medicine herb reference and flashcard app:
//! synonym-aware keyword search, deterministic daily recommendations,
//! favorites and search history over a small file-backed catalog.
//!
//! # Modules
//!
//! - `types`: Core data structures (Herb, SearchResult, DailyRecommend)
//! - `search`: Synonym expansion and relevance scoring
//! - `recommend`: Daily seasonal / exam / contrast picks
//! - `store`: JSONL-backed herb repository with favorites and history
//! - `protocol`, `server`, `tools`: MCP server over stdio
//! - `api`: REST API with axum
//! - `config`, `error`, `utils`: Ambient plumbing
//!
//! # Example
//!
//! ```
//! use herb_mind::search::search_herbs;
//! use herb_mind::Herb;
//!
//! let herbs = vec![Herb::with_effects("danshen", "丹参", "活血化瘀药", vec!["活血化瘀".into()])];
//! let results = search_herbs(&herbs, "活血");
//! assert_eq!(results[0].score, 60);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod protocol;
pub mod recommend;
pub mod search;
pub mod server;
pub mod store;
pub mod tools;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{HerbError, HerbResult};
pub use protocol::{McpTool, ServerInfo, Tool};
pub use server::McpServer;
pub use store::{HerbSource, HerbStore};
pub use types::{
    DailyRecommend, Herb, HerbCategory, McpResult, RecommendType, SearchResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
