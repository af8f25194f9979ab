use anyhow::Result;
use rmcp::{ServiceExt, transport::stdio};
use think_mcp::{ThinkMcpConfig, ThinkMcpService, ThoughtRecorder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ThinkMcpConfig::load()?;

    // Initialize tracing to stderr for MCP compatibility
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting {}", config.server.name);
    config.validate()?;

    // Registry and service are built here and handed to the transport explicitly
    let service = ThinkMcpService::with_recorder(config, ThoughtRecorder::stderr())?;

    // Start the MCP server on stdio transport
    let server = service.serve(stdio()).await?;

    tracing::info!("Server ready for connections");

    // This keeps the server running until the transport closes
    server.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
