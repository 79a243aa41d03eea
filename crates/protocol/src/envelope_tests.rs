use super::*;

#[test]
fn request_serializes_with_tool_call_envelope() {
    let req = ToolRequest::tool_call(7, "list_directory", serde_json::json!({"path": "C:\\data"}));
    let value = serde_json::to_value(&req).expect("serialize request");

    assert_eq!(value["jsonrpc"], "2.0");
    assert_eq!(value["id"], 7);
    assert_eq!(value["method"], "tools/call");
    assert_eq!(value["params"]["name"], "list_directory");
    assert_eq!(value["params"]["arguments"]["path"], "C:\\data");
}

#[test]
fn response_decodes_text_and_resource_blocks() {
    let raw = r#"{
        "jsonrpc": "2.0",
        "id": 3,
        "result": {"content": [
            {"type": "text", "text": "hello"},
            {"type": "resource", "resource": {"uri": "file:///a", "mimeType": "text/plain", "text": "body"}}
        ]}
    }"#;

    let resp: ToolResponse = serde_json::from_str(raw).expect("decode response");
    assert_eq!(resp.id, 3);
    assert_eq!(resp.result.content.len(), 2);
    assert_eq!(resp.text_blocks().collect::<Vec<_>>(), vec!["hello"]);
}

#[test]
fn unknown_block_types_are_ignored_not_fatal() {
    let raw = r#"{
        "jsonrpc": "2.0",
        "id": 1,
        "result": {"content": [
            {"type": "image", "data": "...."},
            {"type": "text", "text": "after"}
        ]}
    }"#;

    let resp: ToolResponse = serde_json::from_str(raw).expect("decode response");
    assert!(matches!(resp.result.content[0], ContentBlock::Unknown));
    assert_eq!(resp.text_blocks().collect::<Vec<_>>(), vec!["after"]);
}

#[test]
fn sparse_response_decodes_to_defaults() {
    let resp: ToolResponse = serde_json::from_str("{}").expect("decode empty envelope");
    assert_eq!(resp.id, 0);
    assert!(resp.result.content.is_empty());
    assert_eq!(resp.text_blocks().count(), 0);
}
