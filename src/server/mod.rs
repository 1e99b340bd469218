//! MCP Server implementation
//!
//! Line-delimited JSON-RPC over any reader/writer pair; `McpServer::stdio`
//! wires it to the process's stdin and stdout.

mod handlers;

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, BufWriter, Stdin, Stdout, Write};

use serde::Serialize;
use serde_json::{json, Value};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool, PROTOCOL_VERSION,
};
use crate::types::McpResult;

pub use handlers::*;

/// MCP Server that handles JSON-RPC communication
pub struct McpServer<R, W> {
    server_info: ServerInfo,
    tools: BTreeMap<String, Box<dyn Tool>>,
    reader: R,
    writer: W,
}

impl McpServer<BufReader<Stdin>, BufWriter<Stdout>> {
    /// Server speaking over stdin/stdout
    pub fn stdio(info: ServerInfo) -> Self {
        Self::with_io(info, BufReader::new(io::stdin()), BufWriter::new(io::stdout()))
    }
}

impl<R: BufRead, W: Write> McpServer<R, W> {
    pub fn with_io(info: ServerInfo, reader: R, writer: W) -> Self {
        Self {
            server_info: info,
            tools: BTreeMap::new(),
            reader,
            writer,
        }
    }

    /// Register a tool with the server
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.definition().name;
        self.tools.insert(name, tool);
        self
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Give back the writer (used to inspect responses in tests)
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run the server until the reader is exhausted
    pub fn run(&mut self) -> McpResult<()> {
        tracing::info!(
            server = %self.server_info.name,
            tools = self.tools.len(),
            "MCP server listening"
        );

        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                self.handle_request(trimmed)?;
            }
            line.clear();
        }

        tracing::info!("input closed, MCP server stopping");
        Ok(())
    }

    /// Handle a single JSON-RPC request
    fn handle_request(&mut self, request_str: &str) -> McpResult<()> {
        let request: JsonRpcRequest = match serde_json::from_str(request_str) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(error = %e, "unparsable request");
                return self.send(&JsonRpcError::parse_error(e.to_string()));
            }
        };

        let id = request.id.clone().unwrap_or(Value::Null);

        if !request.is_valid() {
            return self.send(&JsonRpcError::invalid_request(id, "jsonrpc must be '2.0'"));
        }

        tracing::debug!(method = %request.method, "request");

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            // Notification, no response
            "notifications/initialized" => Ok(()),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => self.send(&JsonRpcResponse::new(id, json!({}))),
            _ if request.is_notification() => Ok(()),
            method => self.send(&JsonRpcError::method_not_found(id, method)),
        }
    }

    fn handle_initialize(&mut self, id: Value) -> McpResult<()> {
        let result = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        });
        self.send(&JsonRpcResponse::new(id, result))
    }

    fn handle_tools_list(&mut self, id: Value) -> McpResult<()> {
        let tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        self.send(&JsonRpcResponse::new(id, json!({ "tools": tools })))
    }

    fn handle_tool_call(&mut self, id: Value, params: Option<Value>) -> McpResult<()> {
        let Some(params) = params else {
            return self.send(&JsonRpcError::invalid_params(id, "Missing parameters"));
        };
        let Some(tool_name) = params.get("name").and_then(|v| v.as_str()) else {
            return self.send(&JsonRpcError::invalid_params(id, "Missing tool name"));
        };

        let Some(tool) = self.tools.get(tool_name) else {
            return self.send(&JsonRpcError::unknown_tool(id, tool_name));
        };

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        let outcome = tool.execute(arguments);
        match outcome {
            Ok(result) => self.send(&JsonRpcResponse::new(id, result)),
            Err(e) => {
                tracing::warn!(tool = tool_name, error = %e, "tool failed");
                self.send(&JsonRpcError::tool_failure(id, e.to_string()))
            }
        }
    }

    fn send<T: Serialize>(&mut self, message: &T) -> McpResult<()> {
        let json = serde_json::to_string(message)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    struct EchoTool;

    impl Tool for EchoTool {
        fn definition(&self) -> McpTool {
            McpTool::new("echo", "Echo the text argument", json!({"type": "object"}))
        }

        fn execute(&self, params: Value) -> McpResult<Value> {
            let text = require_str(&params, "text")?;
            Ok(text_response(text.to_string()))
        }
    }

    fn run_lines(input: &str) -> Vec<Value> {
        let mut server = McpServer::with_io(
            ServerInfo::new("test", "0.0.0"),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::<u8>::new(),
        );
        server.register_tool(Box::new(EchoTool));
        server.run().unwrap();

        let output = String::from_utf8(server.into_writer()).unwrap();
        output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_initialize_and_list() {
        let responses = run_lines(concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            "\n",
        ));

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "test");
        assert_eq!(responses[0]["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(responses[1]["result"]["tools"][0]["name"], "echo");
    }

    #[test]
    fn test_tool_call_and_errors() {
        let responses = run_lines(concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"echo","arguments":{"text":"hi"}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"missing"}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"echo","arguments":{}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":4,"method":"nope"}"#,
            "\n",
            "{not json\n",
            r#"{"jsonrpc":"1.0","id":5,"method":"ping"}"#,
            "\n",
        ));

        assert_eq!(responses[0]["result"]["content"][0]["text"], "hi");
        assert_eq!(responses[1]["error"]["code"], -32602);
        assert_eq!(responses[2]["error"]["code"], -32603);
        assert_eq!(responses[3]["error"]["code"], -32601);
        assert_eq!(responses[4]["error"]["code"], -32700);
        assert_eq!(responses[5]["error"]["code"], -32600);
    }
}
