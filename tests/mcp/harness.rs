//! Test harness for end-to-end MCP tests.
//!
//! Combines a wiremock `MockServer` standing in for Canvas with an MCP
//! server/client pair via in-memory duplex transport.

#![allow(dead_code)]

use anyhow::Result;
use rmcp::model::{CallToolRequestParams, ClientInfo};
use rmcp::service::{RoleClient, RunningService};
use rmcp::{ClientHandler, ServiceExt};
use serde_json::Value;
use tokio::task::JoinHandle;
use wiremock::MockServer;

use canvas_client::CanvasConfig;
use canvas_mcp::CanvasMcpServer;

pub const TEST_TOKEN: &str = "e2e-token";

#[derive(Debug, Clone, Default)]
pub(super) struct TestClient;

impl ClientHandler for TestClient {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

/// Text content and error flag of one tool call.
#[derive(Debug)]
pub struct ToolText {
    pub text: String,
    pub is_error: bool,
}

impl ToolText {
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.text)?)
    }
}

/// MCP server/client pair backed by a mock Canvas instance.
pub struct McpTestHarness {
    pub mcp_client: RunningService<RoleClient, TestClient>,
    pub canvas: MockServer,
    server_handle: JoinHandle<Result<()>>,
}

impl McpTestHarness {
    /// Start the mock Canvas, then an MCP server configured to talk to it.
    pub async fn setup() -> Result<Self> {
        let canvas = MockServer::start().await;
        let config = CanvasConfig::new(&canvas.uri(), TEST_TOKEN)?;

        let server = CanvasMcpServer::from_config(&config)?;
        let (server_transport, client_transport) = tokio::io::duplex(65536);

        let server_handle = tokio::spawn(async move {
            let service = server.serve(server_transport).await?;
            service.waiting().await?;
            anyhow::Ok(())
        });

        let mcp_client = TestClient.serve(client_transport).await?;

        Ok(Self {
            mcp_client,
            canvas,
            server_handle,
        })
    }

    /// Call an MCP tool and return its text content.
    pub async fn call_tool(&self, name: &str, args: Value) -> Result<ToolText> {
        let result = self
            .mcp_client
            .call_tool(CallToolRequestParams {
                meta: None,
                name: name.to_string().into(),
                arguments: Some(args.as_object().cloned().unwrap_or_default()),
                task: None,
            })
            .await?;

        let text = result
            .content
            .first()
            .and_then(|c| c.raw.as_text())
            .map(|t| t.text.clone())
            .ok_or_else(|| anyhow::anyhow!("No text content in tool response"))?;

        Ok(ToolText {
            text,
            is_error: result.is_error == Some(true),
        })
    }

    /// Number of requests the mock Canvas has seen.
    pub async fn upstream_request_count(&self) -> usize {
        self.canvas
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }

    pub async fn teardown(self) -> Result<()> {
        self.mcp_client.cancel().await?;
        self.server_handle.await??;
        Ok(())
    }
}
