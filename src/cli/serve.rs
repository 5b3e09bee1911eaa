// src/cli/serve.rs
// MCP server initialization and main loop

use anyhow::Result;
use semrush_mcp::config::Config;
use semrush_mcp::http::create_shared_client;
use semrush_mcp::mcp::SemrushServer;
use semrush_mcp::semrush::SemrushClient;
use std::sync::Arc;
use tracing::info;

/// Build the invoker from environment configuration
pub fn setup_client() -> Result<SemrushClient> {
    let config = Config::from_env()?;
    Ok(SemrushClient::new(&config, create_shared_client()))
}

pub async fn run_mcp_server() -> Result<()> {
    let client = setup_client()?;
    let server = SemrushServer::new(Arc::new(client));

    info!("Starting semrush-mcp on stdio");
    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(server, transport).await?;
    service.waiting().await?;

    Ok(())
}
