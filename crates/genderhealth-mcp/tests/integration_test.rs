//! End-to-end tests: an rmcp client talks to the server over an in-memory
//! duplex stream, exercising the same framing as the stdio transport.

use rmcp::{
    model::{CallToolRequestParam, CallToolResult},
    service::RunningService,
    RoleClient, ServiceExt,
};
use serde_json::json;
use tokio::task::JoinHandle;

use genderhealth_mcp::GenderHealthServer;
use genderhealth_mcp_core::ServerConfig;

type Client = RunningService<RoleClient, ()>;

async fn start() -> anyhow::Result<(Client, JoinHandle<anyhow::Result<()>>)> {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server = GenderHealthServer::from_config(&ServerConfig::default())?;
    let server_handle = tokio::spawn(async move {
        server.serve(server_transport).await?.waiting().await?;
        anyhow::Ok(())
    });

    let client = ().serve(client_transport).await?;
    Ok((client, server_handle))
}

async fn call_hello(client: &Client, arguments: serde_json::Value) -> anyhow::Result<CallToolResult> {
    let result = client
        .call_tool(CallToolRequestParam {
            name: "hello".into(),
            arguments: arguments.as_object().cloned(),
        })
        .await?;
    Ok(result)
}

fn text_of(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|content| content.as_text())
        .map(|text| text.text.clone())
        .collect()
}

#[tokio::test]
async fn test_initialize_reports_identity() -> anyhow::Result<()> {
    let (client, server_handle) = start().await?;

    let info = client.peer_info().expect("server info after initialize");
    assert_eq!(info.server_info.name, "genderhealth");
    assert!(info.capabilities.tools.is_some());

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_list_tools_exposes_only_hello() -> anyhow::Result<()> {
    let (client, server_handle) = start().await?;

    let tools = client.list_all_tools().await?;
    assert_eq!(tools.len(), 1);

    let hello = &tools[0];
    assert_eq!(hello.name, "hello");
    assert_eq!(hello.description.as_deref(), Some("Chào user bằng tên."));
    assert_eq!(hello.input_schema.get("required"), Some(&json!(["name"])));
    assert_eq!(
        hello.input_schema["properties"]["name"]["type"],
        json!("string")
    );

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_call_hello() -> anyhow::Result<()> {
    let (client, server_handle) = start().await?;

    let result = call_hello(&client, json!({ "name": "Lan" })).await?;
    assert_ne!(result.is_error, Some(true));
    assert_eq!(
        text_of(&result),
        "Xin chào, Lan! Đây là MCP server của GenderHealth."
    );

    // Same input, same answer
    let again = call_hello(&client, json!({ "name": "Lan" })).await?;
    assert_eq!(text_of(&again), text_of(&result));

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_call_hello_passes_name_through() -> anyhow::Result<()> {
    let (client, server_handle) = start().await?;

    let empty = call_hello(&client, json!({ "name": "" })).await?;
    assert_eq!(
        text_of(&empty),
        "Xin chào, ! Đây là MCP server của GenderHealth."
    );

    let braces = call_hello(&client, json!({ "name": "{}" })).await?;
    assert_eq!(
        text_of(&braces),
        "Xin chào, {}! Đây là MCP server của GenderHealth."
    );

    let newline = call_hello(&client, json!({ "name": "\n" })).await?;
    assert_eq!(
        text_of(&newline),
        "Xin chào, \n! Đây là MCP server của GenderHealth."
    );

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_call_hello_without_name_fails() -> anyhow::Result<()> {
    let (client, server_handle) = start().await?;

    assert!(call_hello(&client, json!({})).await.is_err());
    assert!(call_hello(&client, json!({ "name": 7 })).await.is_err());

    // The session survives a rejected call
    let result = call_hello(&client, json!({ "name": "Mai" })).await?;
    assert_eq!(
        text_of(&result),
        "Xin chào, Mai! Đây là MCP server của GenderHealth."
    );

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_unknown_tool_fails() -> anyhow::Result<()> {
    let (client, server_handle) = start().await?;

    let result = client
        .call_tool(CallToolRequestParam {
            name: "goodbye".into(),
            arguments: None,
        })
        .await;
    assert!(result.is_err());

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}
