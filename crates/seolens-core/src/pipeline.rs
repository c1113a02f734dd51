//! Audit pipeline: checkers -> scorer -> fix mapper -> ranker

use crate::audit::check_all;
use crate::document::Document;
use crate::score::{score_all, status_label, FULL_REPORT, PAGE_AUDIT};
use crate::types::{AuditResult, PageAudit, PageContext, Severity};
use crate::{fixes, rank};

/// Run the full audit over one HTML document. Deterministic: identical
/// input yields an identical result.
pub fn audit_page(html: &str, ctx: &PageContext) -> AuditResult {
    let doc = Document::parse(html);
    let facts = check_all(html, &doc, ctx);
    let (category_scores, category_breakdowns) = score_all(&facts);

    let mut findings = facts.all_findings();
    fixes::apply(&mut findings);
    rank::sort_by_severity(&mut findings);

    let overall_score = FULL_REPORT.overall(&category_scores);
    let top_issues = rank::top_issues(&findings);
    let quick_wins = rank::quick_wins(&findings);
    let finding_count = findings.len();

    AuditResult {
        overall_score,
        grade: FULL_REPORT.grade(overall_score).to_string(),
        status: status_label(overall_score).to_string(),
        category_scores,
        category_breakdowns,
        top_issues,
        quick_wins,
        findings,
        finding_count,
    }
}

/// Lightweight preview audit: same checkers and scores, smaller payload,
/// and the page-audit grade ladder instead of the full-report one.
pub fn quick_audit(html: &str, ctx: &PageContext) -> PageAudit {
    let doc = Document::parse(html);
    let facts = check_all(html, &doc, ctx);
    let (category_scores, _) = score_all(&facts);

    let mut findings = facts.all_findings();
    fixes::apply(&mut findings);
    rank::sort_by_severity(&mut findings);

    let score = PAGE_AUDIT.overall(&category_scores);
    let critical_count = findings
        .iter()
        .filter(|f| f.severity == Severity::Critical)
        .count();

    PageAudit {
        score,
        grade: PAGE_AUDIT.grade(score).to_string(),
        finding_count: findings.len(),
        critical_count,
        top_issues: rank::top_issues(&findings),
    }
}
