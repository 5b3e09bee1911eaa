// src/main.rs
// semrush-mcp - Semrush SEO reports as MCP tools

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    semrush_mcp::config::load_env_files();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        match &cli.command {
            Some(Commands::Serve) | None => Level::WARN, // Quiet for MCP stdio
            Some(Commands::Tool { .. }) | Some(Commands::Tools) => Level::INFO,
        }
    };

    // stdout belongs to the MCP transport
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None | Some(Commands::Serve) => {
            cli::run_mcp_server().await?;
        }
        Some(Commands::Tool { name, args }) => {
            cli::run_tool(name, args).await?;
        }
        Some(Commands::Tools) => {
            cli::list_tools();
        }
    }

    Ok(())
}
