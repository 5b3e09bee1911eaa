// src/cli/tool.rs
// Direct tool execution from CLI

use super::serve::setup_client;
use anyhow::{Result, bail};
use semrush_mcp::format::present;
use semrush_mcp::mcp::{self, registry};

/// Execute a tool from the command line, printing the same text an MCP client would get
pub async fn run_tool(name: String, args: String) -> Result<()> {
    let args: serde_json::Value = serde_json::from_str(&args)?;
    let request = registry::prepare(&name, args)?;

    let client = setup_client()?;
    let result = client.invoke(&request).await?;

    println!("{}", present(&result));
    if result.is_error() {
        bail!("{} returned an error", name);
    }
    Ok(())
}

/// Print every registered tool with the report it runs
pub fn list_tools() {
    let advertised = mcp::list_tools();

    for spec in registry::tools() {
        let description = advertised
            .iter()
            .find(|tool| tool.name == spec.name)
            .and_then(|tool| tool.description.as_deref())
            .unwrap_or("");

        println!("{}", spec.name);
        println!("  {}", description);
        println!("  report: {} ({})", spec.report, spec.variant);
        println!("  columns: {}", spec.export_columns);
    }
}
