use rmcp::model::CallToolRequestParam;
use rmcp::service::{RunningService, ServiceError};
use rmcp::{RoleClient, ServiceExt};
use serde_json::json;
use std::sync::Arc;
use think_mcp::*;

async fn connect() -> (RunningService<RoleClient, ()>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let service = ThinkMcpService::with_recorder(
        ThinkMcpConfig::default(),
        ThoughtRecorder::new(sink.clone()),
    )
    .expect("Failed to build service");

    let (server_transport, client_transport) = tokio::io::duplex(64 * 1024);
    tokio::spawn(async move {
        let server = service.serve(server_transport).await?;
        server.waiting().await?;
        anyhow::Ok(())
    });

    let client = ().serve(client_transport).await.expect("Failed to connect client");
    (client, sink)
}

fn think_request(arguments: serde_json::Value) -> CallToolRequestParam {
    CallToolRequestParam {
        name: "think".into(),
        arguments: arguments.as_object().cloned(),
    }
}

#[tokio::test]
async fn test_think_tool_is_listed() {
    let (client, _sink) = connect().await;

    let tools = client.list_all_tools().await.expect("tools/list failed");
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, "think");
    assert_eq!(tools[0].input_schema["properties"]["thought"]["type"], "string");
    assert_eq!(tools[0].input_schema["required"], json!(["thought"]));

    client.cancel().await.expect("Failed to close client");
}

#[tokio::test]
async fn test_think_call_records_and_acknowledges() {
    let (client, sink) = connect().await;

    let long_thought = "Long reasoning step. ".repeat(500);
    let thoughts = [
        "This is a test thought.",
        "",
        "Line 1\nLine 2\n\tTabbed line",
        "思考：特殊字符！@#$%^&*()",
        long_thought.as_str(),
    ];

    for thought in thoughts {
        let result = client
            .call_tool(think_request(json!({ "thought": thought })))
            .await
            .expect("tools/call failed");
        let result = serde_json::to_value(&result).unwrap();
        assert_eq!(result["content"][0]["type"], "text");
        assert_eq!(result["content"][0]["text"], "Recorded");
        assert_ne!(result["isError"], json!(true));
    }

    let expected: Vec<String> = thoughts
        .iter()
        .map(|t| format!("Received thought: {}", t))
        .collect();
    assert_eq!(sink.lines(), expected);

    client.cancel().await.expect("Failed to close client");
}

#[tokio::test]
async fn test_missing_thought_is_invalid_params() {
    let (client, sink) = connect().await;

    let result = client.call_tool(think_request(json!({}))).await;
    match result {
        Err(ServiceError::McpError(e)) => {
            assert_eq!(e.code, rmcp::model::ErrorCode::INVALID_PARAMS);
            assert!(e.message.contains("thought"));
        }
        other => panic!("expected invalid params, got {:?}", other),
    }
    assert!(sink.lines().is_empty());

    client.cancel().await.expect("Failed to close client");
}

#[tokio::test]
async fn test_unknown_tool_is_rejected() {
    let (client, sink) = connect().await;

    let result = client
        .call_tool(CallToolRequestParam {
            name: "ponder".into(),
            arguments: None,
        })
        .await;
    match result {
        Err(ServiceError::McpError(e)) => assert_eq!(e.message, "Unknown tool: ponder"),
        other => panic!("expected unknown tool error, got {:?}", other),
    }
    assert!(sink.lines().is_empty());

    client.cancel().await.expect("Failed to close client");
}
