pub mod client;
pub mod codec;

use serde::{Deserialize, Serialize};

/// JSON-RPC version string carried by every request.
pub const PROTOCOL_VERSION: &str = "2.0";

/// Method name for invoking a named tool on the filesystem server.
pub const TOOL_CALL_METHOD: &str = "tools/call";

#[derive(Debug, Serialize)]
pub struct ToolRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: ToolCallParams,
}

#[derive(Debug, Serialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: serde_json::Value,
}

impl ToolRequest {
    pub fn tool_call(id: u64, name: &str, arguments: serde_json::Value) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION,
            id,
            method: TOOL_CALL_METHOD,
            params: ToolCallParams {
                name: name.to_owned(),
                arguments,
            },
        }
    }
}

/// Response envelope. Fields the server omits decode to their defaults so a
/// sparse reply is still usable.
#[derive(Debug, Deserialize)]
pub struct ToolResponse {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub result: ToolResult,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToolResult {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// One content block of a tool result. Block types this client does not
/// understand decode to `Unknown` and are skipped, never an error.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
    Resource { resource: ResourceContent },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
pub struct ResourceContent {
    pub uri: String,
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,
    #[serde(default)]
    pub text: String,
}

impl ToolResponse {
    /// The text payloads of the reply, in order.
    pub fn text_blocks(&self) -> impl Iterator<Item = &str> {
        self.result.content.iter().filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
