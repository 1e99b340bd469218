//! MCP handshake and tool metadata
//!
//! The herb catalog, favorites and history are offered to MCP clients as
//! tools. Each tool describes itself with an [`McpTool`] for `tools/list` and
//! runs through [`Tool::execute`] for `tools/call`.

use serde::Serialize;
use serde_json::Value;

use crate::types::McpResult;

/// Protocol revision announced during the handshake
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Entry in the `tools/list` reply: name, help text and a JSON Schema for the arguments
#[derive(Serialize, Debug, Clone)]
pub struct McpTool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl McpTool {
    pub fn new(name: &str, description: &str, input_schema: Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// Name and version reported in the `initialize` reply.
/// Defaults to this crate's package name and version.
#[derive(Clone, Debug)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: crate::NAME.to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}

/// A store operation callable over MCP.
///
/// Implementors hold an `Arc<HerbStore>` and are registered by name, so
/// `definition().name` must be unique across the server.
pub trait Tool: Send + Sync {
    fn definition(&self) -> McpTool;

    /// Run with the `arguments` object from `tools/call`. An `Err` becomes a
    /// JSON-RPC error reply; it never stops the server loop.
    fn execute(&self, params: Value) -> McpResult<Value>;

    fn name(&self) -> String {
        self.definition().name
    }
}
