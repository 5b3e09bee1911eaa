// src/lib.rs
// semrush-mcp: Semrush SEO reports exposed as MCP tools

pub mod config;
pub mod error;
pub mod format;
pub mod http;
pub mod mcp;
pub mod semrush;

pub use error::{Result, SemrushError};
