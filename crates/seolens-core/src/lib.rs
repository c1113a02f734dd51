//! # seolens-core
//!
//! Content quality audit and schema.org recommendation engine for HTML
//! pages.
//!
//! Two independent, side-effect-free pipelines:
//! - **Audit**: eight category checkers over a parsed document, a weighted
//!   scorer with explainable breakdowns, remediation-tier classification,
//!   and severity ranking, composed by [`audit_page`] / [`quick_audit`].
//! - **Schema**: keyword matching of a business description against an
//!   immutable schema.org type registry, plus inheritance-aware JSON-LD
//!   assembly, composed by [`recommend_schema`].
//!
//! Everything is synchronous and deterministic; the only long-lived state
//! is the read-only type registry. Fetching documents and generating
//! AI-tier fix content happen outside this crate.
//!
//! ## Example
//!
//! ```
//! use seolens_core::{audit_page, PageContext};
//!
//! let html = "<html><head></head><body><h1>Welcome</h1></body></html>";
//! let result = audit_page(html, &PageContext::default());
//!
//! assert!(result.overall_score <= 100);
//! assert!(result.findings.iter().any(|f| f.issue == "Missing page title"));
//! ```

pub mod audit;
pub mod document;
pub mod fixes;
pub mod pipeline;
pub mod rank;
pub mod schema;
pub mod score;
pub mod types;

// Re-export the surface most callers need.
pub use document::Document;
pub use pipeline::{audit_page, quick_audit};
pub use schema::{recommend_schema, BusinessContext, PageSchemaResult, TypeRegistry};
pub use score::{ScoringProfile, FULL_REPORT, PAGE_AUDIT};
pub use types::{
    AuditResult, Category, Finding, FixMethod, PageAudit, PageContext, ScoreBreakdownItem,
    Severity,
};
