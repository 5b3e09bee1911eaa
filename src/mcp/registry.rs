// src/mcp/registry.rs
// Tool registry: which report each tool runs and how its arguments map to query parameters

use super::requests::{
    BacklinksOverviewRequest, BacklinksReportRequest, DomainReportRequest, DomainRequest,
    KeywordReportRequest, KeywordRequest,
};
use crate::error::{Result, SemrushError};
use crate::semrush::{ApiVariant, ReportParams, ReportRequest};
use serde::de::DeserializeOwned;

pub const DEFAULT_DATABASE: &str = "us";
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 10_000;

/// Which request type a tool accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgsKind {
    Domain,
    DomainReport,
    Keyword,
    KeywordReport,
    BacklinksOverview,
    BacklinksReport,
}

/// Static description of one tool
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub report: &'static str,
    pub variant: ApiVariant,
    /// Passed through verbatim as `export_columns`
    pub export_columns: &'static str,
    pub args: ArgsKind,
}

static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "domain_overview",
        report: "domain_ranks",
        variant: ApiVariant::Legacy,
        export_columns: "Db,Dn,Rk,Or,Ot,Oc,Ad,At,Ac",
        args: ArgsKind::Domain,
    },
    ToolSpec {
        name: "domain_organic_keywords",
        report: "domain_organic",
        variant: ApiVariant::Legacy,
        export_columns: "Ph,Po,Pp,Pd,Nq,Cp,Ur,Tr,Tc,Co,Nr,Td",
        args: ArgsKind::DomainReport,
    },
    ToolSpec {
        name: "domain_paid_keywords",
        report: "domain_adwords",
        variant: ApiVariant::Legacy,
        export_columns: "Ph,Po,Pp,Pd,Ab,Nq,Cp,Tr,Tc,Co,Nr,Td,Tt,Ds,Vu,Ur",
        args: ArgsKind::DomainReport,
    },
    ToolSpec {
        name: "organic_competitors",
        report: "domain_organic_organic",
        variant: ApiVariant::Legacy,
        export_columns: "Dn,Cr,Np,Or,Ot,Oc,Ad",
        args: ArgsKind::DomainReport,
    },
    ToolSpec {
        name: "keyword_overview",
        report: "phrase_this",
        variant: ApiVariant::Legacy,
        export_columns: "Ph,Nq,Cp,Co,Nr,Td",
        args: ArgsKind::Keyword,
    },
    ToolSpec {
        name: "related_keywords",
        report: "phrase_related",
        variant: ApiVariant::Legacy,
        export_columns: "Ph,Nq,Cp,Co,Nr,Td,Rr,Fk",
        args: ArgsKind::KeywordReport,
    },
    ToolSpec {
        name: "keyword_questions",
        report: "phrase_questions",
        variant: ApiVariant::Legacy,
        export_columns: "Ph,Nq,Cp,Co,Nr,Td",
        args: ArgsKind::KeywordReport,
    },
    ToolSpec {
        name: "backlinks_overview",
        report: "backlinks_overview",
        variant: ApiVariant::AnalyticsV1,
        export_columns: "ascore,total,domains_num,urls_num,ips_num,ipclassc_num,follows_num,nofollows_num,sponsored_num,ugc_num,texts_num,images_num,forms_num,frames_num",
        args: ArgsKind::BacklinksOverview,
    },
    ToolSpec {
        name: "backlinks",
        report: "backlinks",
        variant: ApiVariant::AnalyticsV1,
        export_columns: "page_ascore,source_title,source_url,target_url,anchor,external_num,internal_num,first_seen,last_seen",
        args: ArgsKind::BacklinksReport,
    },
    ToolSpec {
        name: "referring_domains",
        report: "backlinks_refdomains",
        variant: ApiVariant::AnalyticsV1,
        export_columns: "domain_ascore,domain,backlinks_num,ip,country,first_seen,last_seen",
        args: ArgsKind::BacklinksReport,
    },
];

/// Every registered tool, in listing order
pub fn tools() -> &'static [ToolSpec] {
    TOOLS
}

pub fn find(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|spec| spec.name == name)
}

/// Validates arguments and maps them onto report parameters
pub trait ToolArgs: DeserializeOwned {
    fn into_params(self) -> Result<ReportParams>;
}

impl ToolSpec {
    /// Build the report request for already-typed arguments
    pub fn request<A: ToolArgs>(&self, args: A) -> Result<ReportRequest> {
        let params = args
            .into_params()?
            .with("export_columns", self.export_columns);
        Ok(ReportRequest::new(self.report, params, self.variant))
    }
}

/// Build the report request for a named tool from typed arguments
pub fn build<A: ToolArgs>(name: &str, args: A) -> Result<ReportRequest> {
    find(name)
        .ok_or_else(|| SemrushError::UnknownTool(name.to_string()))?
        .request(args)
}

/// Build the report request for a named tool from raw JSON arguments
pub fn prepare(name: &str, args: serde_json::Value) -> Result<ReportRequest> {
    let spec = find(name).ok_or_else(|| SemrushError::UnknownTool(name.to_string()))?;
    match spec.args {
        ArgsKind::Domain => spec.request(parse::<DomainRequest>(args)?),
        ArgsKind::DomainReport => spec.request(parse::<DomainReportRequest>(args)?),
        ArgsKind::Keyword => spec.request(parse::<KeywordRequest>(args)?),
        ArgsKind::KeywordReport => spec.request(parse::<KeywordReportRequest>(args)?),
        ArgsKind::BacklinksOverview => spec.request(parse::<BacklinksOverviewRequest>(args)?),
        ArgsKind::BacklinksReport => spec.request(parse::<BacklinksReportRequest>(args)?),
    }
}

fn parse<A: DeserializeOwned>(args: serde_json::Value) -> Result<A> {
    let args = match args {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(args)
        .map_err(|e| SemrushError::invalid_argument("arguments", e.to_string()))
}

// ============================================================================
// Validation helpers
// ============================================================================

fn required_text(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SemrushError::invalid_argument(field, "must not be empty"));
    }
    Ok(value.to_string())
}

fn database(value: Option<String>) -> Result<String> {
    let Some(value) = value else {
        return Ok(DEFAULT_DATABASE.to_string());
    };
    let value = value.trim().to_ascii_lowercase();
    let valid = (2..=10).contains(&value.len()) && value.chars().all(|c| c.is_ascii_alphanumeric());
    if !valid {
        return Err(SemrushError::invalid_argument(
            "database",
            "must be a 2-10 character alphanumeric database code such as us or uk",
        ));
    }
    Ok(value)
}

fn limit(value: Option<u32>) -> Result<u32> {
    let value = value.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&value) {
        return Err(SemrushError::invalid_argument(
            "limit",
            format!("must be between 1 and {MAX_LIMIT}"),
        ));
    }
    Ok(value)
}

fn paging(
    mut params: ReportParams,
    requested: Option<u32>,
    offset: Option<u32>,
) -> Result<ReportParams> {
    params.insert("display_limit", limit(requested)?);
    if let Some(offset) = offset {
        params.insert("display_offset", offset);
    }
    Ok(params)
}

// ============================================================================
// Argument mapping
// ============================================================================

impl ToolArgs for DomainRequest {
    fn into_params(self) -> Result<ReportParams> {
        Ok(ReportParams::new()
            .with("domain", required_text("domain", &self.domain)?)
            .with("database", database(self.database)?))
    }
}

impl ToolArgs for DomainReportRequest {
    fn into_params(self) -> Result<ReportParams> {
        let params = ReportParams::new()
            .with("domain", required_text("domain", &self.domain)?)
            .with("database", database(self.database)?);
        paging(params, self.limit, self.offset)
    }
}

impl ToolArgs for KeywordRequest {
    fn into_params(self) -> Result<ReportParams> {
        Ok(ReportParams::new()
            .with("phrase", required_text("keyword", &self.keyword)?)
            .with("database", database(self.database)?))
    }
}

impl ToolArgs for KeywordReportRequest {
    fn into_params(self) -> Result<ReportParams> {
        let params = ReportParams::new()
            .with("phrase", required_text("keyword", &self.keyword)?)
            .with("database", database(self.database)?);
        paging(params, self.limit, self.offset)
    }
}

impl ToolArgs for BacklinksOverviewRequest {
    fn into_params(self) -> Result<ReportParams> {
        Ok(ReportParams::new()
            .with("target", required_text("target", &self.target)?)
            .with("target_type", self.target_type.unwrap_or_default().as_str()))
    }
}

impl ToolArgs for BacklinksReportRequest {
    fn into_params(self) -> Result<ReportParams> {
        let params = ReportParams::new()
            .with("target", required_text("target", &self.target)?)
            .with("target_type", self.target_type.unwrap_or_default().as_str());
        paging(params, self.limit, self.offset)
    }
}
