// src/cli/mod.rs
// CLI module for semrush-mcp commands

use clap::{Parser, Subcommand};

pub mod serve;
pub mod tool;

pub use serve::run_mcp_server;
pub use tool::{list_tools, run_tool};

#[derive(Parser)]
#[command(name = "semrush-mcp")]
#[command(about = "Semrush SEO reports as MCP tools")]
#[command(version)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server on stdio (default)
    Serve,

    /// Execute a tool directly and print its output
    Tool {
        /// Tool name (e.g. domain_overview, backlinks)
        #[arg(index = 1)]
        name: String,

        /// JSON arguments (e.g. '{"domain": "example.com"}')
        #[arg(index = 2, default_value = "{}")]
        args: String,
    },

    /// List available tools
    Tools,
}
