// src/mcp/mod.rs
// MCP Server implementation

pub mod registry;
pub mod requests;

use crate::SemrushError;
use crate::format::present;
use crate::semrush::SemrushClient;
use registry::ToolArgs;
use requests::{
    BacklinksOverviewRequest, BacklinksReportRequest, DomainReportRequest, DomainRequest,
    KeywordReportRequest, KeywordRequest,
};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;
use tracing::{Level, debug, error};

/// MCP Server state. Holds nothing mutable; every tool call is independent.
#[derive(Clone)]
pub struct SemrushServer {
    pub client: Arc<SemrushClient>,
    tool_router: ToolRouter<Self>,
}

impl SemrushServer {
    pub fn new(client: Arc<SemrushClient>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// Validate, invoke and render one tool call
    async fn run<A: ToolArgs>(&self, name: &str, args: A) -> Result<CallToolResult, McpError> {
        let request = registry::build(name, args).map_err(|e| {
            log_failure(name, &e);
            McpError::invalid_params(e.to_string(), None)
        })?;

        match self.client.invoke(&request).await {
            Ok(result) => {
                let text = present(&result);
                if result.is_error() {
                    Ok(CallToolResult::error(vec![Content::text(text)]))
                } else {
                    Ok(CallToolResult::success(vec![Content::text(text)]))
                }
            }
            Err(e) => {
                log_failure(name, &e);
                Ok(CallToolResult::error(vec![Content::text(format!("Error: {}", e))]))
            }
        }
    }
}

/// Caller mistakes stay at debug level; everything else is an operator-visible fault
fn log_failure(name: &str, err: &SemrushError) -> Level {
    if err.is_caller_error() {
        debug!(tool = name, error = %err, "Rejected tool arguments");
        Level::DEBUG
    } else {
        error!(tool = name, error = %err, "Tool call failed");
        Level::ERROR
    }
}

/// Tool definitions as advertised to clients
pub fn list_tools() -> Vec<Tool> {
    SemrushServer::tool_router().list_all()
}

#[tool_router]
impl SemrushServer {
    #[tool(description = "Domain overview: rank, organic and paid traffic, keyword counts and traffic cost for a domain.")]
    async fn domain_overview(
        &self,
        Parameters(req): Parameters<DomainRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("domain_overview", req).await
    }

    #[tool(description = "Keywords a domain ranks for in organic search, with position, volume, CPC and traffic share.")]
    async fn domain_organic_keywords(
        &self,
        Parameters(req): Parameters<DomainReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("domain_organic_keywords", req).await
    }

    #[tool(description = "Keywords a domain buys in paid search, with ad position, volume, CPC and ad copy.")]
    async fn domain_paid_keywords(
        &self,
        Parameters(req): Parameters<DomainReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("domain_paid_keywords", req).await
    }

    #[tool(description = "Organic search competitors of a domain, ranked by keyword overlap.")]
    async fn organic_competitors(
        &self,
        Parameters(req): Parameters<DomainReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("organic_competitors", req).await
    }

    #[tool(description = "Keyword overview: search volume, CPC, competition and result count for one keyword.")]
    async fn keyword_overview(
        &self,
        Parameters(req): Parameters<KeywordRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("keyword_overview", req).await
    }

    #[tool(description = "Keywords related to a seed keyword, with volume, CPC and relatedness.")]
    async fn related_keywords(
        &self,
        Parameters(req): Parameters<KeywordReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("related_keywords", req).await
    }

    #[tool(description = "Question-form keywords containing a seed keyword.")]
    async fn keyword_questions(
        &self,
        Parameters(req): Parameters<KeywordReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("keyword_questions", req).await
    }

    #[tool(description = "Backlink profile summary: authority score, total backlinks, referring domains and link types.")]
    async fn backlinks_overview(
        &self,
        Parameters(req): Parameters<BacklinksOverviewRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("backlinks_overview", req).await
    }

    #[tool(description = "Individual backlinks pointing at a domain or URL, with source page, anchor and dates.")]
    async fn backlinks(
        &self,
        Parameters(req): Parameters<BacklinksReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("backlinks", req).await
    }

    #[tool(description = "Domains linking to a target, with authority score, backlink count and country.")]
    async fn referring_domains(
        &self,
        Parameters(req): Parameters<BacklinksReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run("referring_domains", req).await
    }
}

#[tool_handler]
impl ServerHandler for SemrushServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "semrush-mcp".into(),
                title: Some("Semrush MCP - SEO reports for AI agents".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Semrush SEO data: domain analytics, keyword research and backlinks. \
                 Domain and keyword tools take a regional `database` (default us); \
                 list tools accept `limit` and `offset`."
                    .into(),
            ),
        }
    }
}
