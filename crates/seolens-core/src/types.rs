//! Common types shared across the audit and schema pipelines

use serde::{Deserialize, Serialize};

/// One audited dimension of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Meta,
    Headings,
    Schema,
    Semantic,
    Images,
    Links,
    Content,
    LlmReadability,
}

impl Category {
    /// Stable label used in text reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Meta => "Meta Tags",
            Category::Headings => "Headings",
            Category::Schema => "Structured Data",
            Category::Semantic => "Semantic HTML",
            Category::Images => "Images",
            Category::Links => "Links",
            Category::Content => "Content",
            Category::LlmReadability => "LLM Readability",
        }
    }
}

/// Severity of a finding. The declaration order is the total order used
/// for every sort and tie-break: critical first, info last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Numeric rank: 0 = critical, 4 = info.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

/// How a finding can be remediated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixMethod {
    /// Synchronous, deterministic markup patch. No network cost.
    Client,
    /// Templated structured-data generation. Server round-trip, no AI cost.
    Generated,
    /// LLM-backed content generation. Metered cost.
    Ai,
}

/// One detected issue plus remediation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub category: Category,
    pub severity: Severity,
    pub issue: String,
    pub impact: String,
    pub fix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_method: Option<FixMethod>,
}

impl Finding {
    pub fn new(
        category: Category,
        severity: Severity,
        issue: impl Into<String>,
        impact: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity,
            issue: issue.into(),
            impact: impact.into(),
            fix: fix.into(),
            location: None,
            current_code: None,
            time_estimate: None,
            fix_type: None,
            fix_method: None,
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn current_code(mut self, code: impl Into<String>) -> Self {
        self.current_code = Some(code.into());
        self
    }

    pub fn time_estimate(mut self, estimate: impl Into<String>) -> Self {
        self.time_estimate = Some(estimate.into());
        self
    }
}

/// One line of a per-category score breakdown. Explains the score to a
/// reader; the scoring math itself lives in the point tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdownItem {
    pub label: String,
    pub points: u32,
    pub earned: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ScoreBreakdownItem {
    pub fn new(label: impl Into<String>, points: u32, earned: u32) -> Self {
        Self {
            label: label.into(),
            points,
            earned,
            detail: None,
        }
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Optional page context supplied by the caller. Certain rules apply only
/// to specific page types (for example the FAQ-section recommendation).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageContext {
    pub page_type: Option<String>,
    pub page_name: Option<String>,
}

impl PageContext {
    /// Page types that benefit from an FAQ section with FAQ schema.
    pub fn wants_faq(&self) -> bool {
        matches!(
            self.page_type.as_deref(),
            Some("landing") | Some("product") | Some("service") | Some("pricing")
        )
    }

    /// Whether the page presents itself as an "about us" page. Such pages
    /// suppress the Article-schema opportunity.
    pub fn is_about_page(&self) -> bool {
        let looks_about = |s: &str| {
            let s = s.to_lowercase();
            s.contains("about")
        };
        self.page_type.as_deref().map(looks_about).unwrap_or(false)
            || self.page_name.as_deref().map(looks_about).unwrap_or(false)
    }
}

/// Scores per category, in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub meta: u32,
    pub headings: u32,
    pub schema: u32,
    pub semantic: u32,
    pub images: u32,
    pub links: u32,
    pub content: u32,
    pub llm_readability: u32,
}

/// Score breakdowns per category, mirroring [`CategoryScores`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdowns {
    pub meta: Vec<ScoreBreakdownItem>,
    pub headings: Vec<ScoreBreakdownItem>,
    pub schema: Vec<ScoreBreakdownItem>,
    pub semantic: Vec<ScoreBreakdownItem>,
    pub images: Vec<ScoreBreakdownItem>,
    pub links: Vec<ScoreBreakdownItem>,
    pub content: Vec<ScoreBreakdownItem>,
    pub llm_readability: Vec<ScoreBreakdownItem>,
}

/// Complete result of a full-report audit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub overall_score: u32,
    pub grade: String,
    pub status: String,
    pub category_scores: CategoryScores,
    pub category_breakdowns: CategoryBreakdowns,
    pub top_issues: Vec<Finding>,
    pub quick_wins: Vec<Finding>,
    pub findings: Vec<Finding>,
    pub finding_count: usize,
}

/// Lightweight page-audit result for cheap previews. Uses its own grade
/// ladder, intentionally distinct from the full report's.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAudit {
    pub score: u32,
    pub grade: String,
    pub finding_count: usize,
    pub critical_count: usize,
    pub top_issues: Vec<Finding>,
}
