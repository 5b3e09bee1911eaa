// src/mcp/requests.rs
// MCP tool request types

use rmcp::schemars;
use serde::Deserialize;

/// Scope of a backlinks target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// The domain and all of its subdomains
    #[default]
    RootDomain,
    /// Exactly this host
    Domain,
    /// A single page
    Url,
}

impl TargetType {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetType::RootDomain => "root_domain",
            TargetType::Domain => "domain",
            TargetType::Url => "url",
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DomainRequest {
    #[schemars(description = "Domain to analyze, e.g. example.com")]
    pub domain: String,
    #[schemars(description = "Regional database code (default: us)")]
    pub database: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DomainReportRequest {
    #[schemars(description = "Domain to analyze, e.g. example.com")]
    pub domain: String,
    #[schemars(description = "Regional database code (default: us)")]
    pub database: Option<String>,
    #[schemars(description = "Max rows to return, 1-10000 (default: 10)")]
    pub limit: Option<u32>,
    #[schemars(description = "Rows to skip before returning results")]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct KeywordRequest {
    #[schemars(description = "Keyword or phrase")]
    pub keyword: String,
    #[schemars(description = "Regional database code (default: us)")]
    pub database: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct KeywordReportRequest {
    #[schemars(description = "Keyword or phrase")]
    pub keyword: String,
    #[schemars(description = "Regional database code (default: us)")]
    pub database: Option<String>,
    #[schemars(description = "Max rows to return, 1-10000 (default: 10)")]
    pub limit: Option<u32>,
    #[schemars(description = "Rows to skip before returning results")]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BacklinksOverviewRequest {
    #[schemars(description = "Domain, subdomain or URL to analyze")]
    pub target: String,
    #[schemars(description = "Target scope: root_domain, domain or url (default: root_domain)")]
    pub target_type: Option<TargetType>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BacklinksReportRequest {
    #[schemars(description = "Domain, subdomain or URL to analyze")]
    pub target: String,
    #[schemars(description = "Target scope: root_domain, domain or url (default: root_domain)")]
    pub target_type: Option<TargetType>,
    #[schemars(description = "Max rows to return, 1-10000 (default: 10)")]
    pub limit: Option<u32>,
    #[schemars(description = "Rows to skip before returning results")]
    pub offset: Option<u32>,
}
