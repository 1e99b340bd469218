//! HerbMind server - Binary Entry Point
//!
//! Serves MCP over stdio by default, or the REST API when `HERB_HTTP_ADDR`
//! is set. Logs go to stderr so stdout stays clean for JSON-RPC.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use herb_mind::api::{self, AppState};
use herb_mind::config::{Config, DEFAULT_LOG_FILTER};
use herb_mind::protocol::ServerInfo;
use herb_mind::server::McpServer;
use herb_mind::store::HerbStore;
use herb_mind::tools::register_all_tools;
use herb_mind::types::McpResult;

fn main() -> McpResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let store = Arc::new(HerbStore::open(&config)?);

    match config.http_addr {
        Some(addr) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(api::serve(addr, Arc::new(AppState::new(store))))?;
        }
        None => {
            let mut server = McpServer::stdio(ServerInfo::default());
            register_all_tools(&mut server, store);
            server.run()?;
        }
    }

    Ok(())
}
