//! Canvas MCP Server
//!
//! Model Context Protocol server giving LLM agents read-only access to a
//! Canvas LMS account: courses, modules, assignments, pages, files,
//! discussions, quizzes and submissions.

use anyhow::Context;
use canvas_client::{CanvasConfig, ACCESS_TOKEN_ENV, BASE_URL_ENV};
use canvas_mcp::CanvasMcpServer;
use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "canvas-mcp", version, about = "Read-only Canvas LMS MCP server (stdio transport)")]
struct Args {
    /// Canvas instance URL, e.g. https://school.instructure.com
    #[arg(long, env = BASE_URL_ENV)]
    base_url: Option<String>,

    /// Canvas API access token
    #[arg(long, env = ACCESS_TOKEN_ENV, hide_env_values = true)]
    access_token: Option<String>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<CanvasConfig> {
        let base_url = self
            .base_url
            .with_context(|| format!("{BASE_URL_ENV} is not set (or pass --base-url)"))?;
        let access_token = self
            .access_token
            .with_context(|| format!("{ACCESS_TOKEN_ENV} is not set (or pass --access-token)"))?;
        Ok(CanvasConfig::new(&base_url, access_token)?)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads env-backed arguments
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("canvas_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = args
        .into_config()
        .inspect_err(|e| tracing::error!(error = %format!("{e:#}"), "Invalid Canvas configuration"))?;
    tracing::info!(base_url = %config.base_url(), "canvas-mcp starting (stdio transport)");

    let server = CanvasMcpServer::from_config(&config)?;
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
