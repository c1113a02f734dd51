//! Finding ranking: severity sort, top issues, quick wins

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Finding, Severity};

/// Findings with severity critical or high qualify as top issues.
const TOP_ISSUE_LIMIT: usize = 5;
const QUICK_WIN_LIMIT: usize = 5;

/// Matches "2 min" and "5 min" estimates but not "15 min" or "25 min".
static QUICK_WIN_ESTIMATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[25]\s*min").expect("invalid quick-win regex"));

/// Sort findings by severity, critical first. The sort is stable, so
/// findings of equal severity keep their discovery order.
pub fn sort_by_severity(findings: &mut [Finding]) {
    findings.sort_by_key(|f| f.severity);
}

/// The first five critical/high findings of an already-sorted list.
pub fn top_issues(sorted: &[Finding]) -> Vec<Finding> {
    sorted
        .iter()
        .filter(|f| matches!(f.severity, Severity::Critical | Severity::High))
        .take(TOP_ISSUE_LIMIT)
        .cloned()
        .collect()
}

/// Low-effort findings: time estimate of 2 or 5 minutes, any severity.
/// Not mutually exclusive with top issues.
pub fn quick_wins(sorted: &[Finding]) -> Vec<Finding> {
    sorted
        .iter()
        .filter(|f| {
            f.time_estimate
                .as_deref()
                .map(|estimate| QUICK_WIN_ESTIMATE.is_match(estimate))
                .unwrap_or(false)
        })
        .take(QUICK_WIN_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Severity};

    fn finding(severity: Severity, issue: &str, estimate: Option<&str>) -> Finding {
        let mut f = Finding::new(Category::Meta, severity, issue, "impact", "fix");
        f.time_estimate = estimate.map(String::from);
        f
    }

    #[test]
    fn sort_is_stable_within_severity() {
        let mut findings = vec![
            finding(Severity::Low, "low-1", None),
            finding(Severity::Critical, "crit-1", None),
            finding(Severity::Low, "low-2", None),
            finding(Severity::Critical, "crit-2", None),
        ];
        sort_by_severity(&mut findings);
        let order: Vec<&str> = findings.iter().map(|f| f.issue.as_str()).collect();
        assert_eq!(order, vec!["crit-1", "crit-2", "low-1", "low-2"]);
    }

    #[test]
    fn top_issues_only_critical_and_high_capped_at_five() {
        let mut findings = vec![
            finding(Severity::Critical, "c1", None),
            finding(Severity::Critical, "c2", None),
            finding(Severity::High, "h1", None),
            finding(Severity::High, "h2", None),
            finding(Severity::High, "h3", None),
            finding(Severity::High, "h4", None),
            finding(Severity::Medium, "m1", None),
        ];
        sort_by_severity(&mut findings);
        let top = top_issues(&findings);
        assert_eq!(top.len(), 5);
        assert!(top.iter().all(|f| f.severity <= Severity::High));
        assert_eq!(top[0].issue, "c1");
    }

    #[test]
    fn quick_wins_match_two_and_five_minutes_only() {
        let findings = vec![
            finding(Severity::Info, "a", Some("2 min")),
            finding(Severity::Low, "b", Some("5 min")),
            finding(Severity::High, "c", Some("15 min")),
            finding(Severity::High, "d", Some("25 min")),
            finding(Severity::High, "e", Some("1 hour")),
            finding(Severity::High, "f", None),
        ];
        let wins = quick_wins(&findings);
        let issues: Vec<&str> = wins.iter().map(|f| f.issue.as_str()).collect();
        assert_eq!(issues, vec!["a", "b"]);
    }

    #[test]
    fn quick_wins_independent_of_severity_and_overlap_top_issues() {
        let mut findings = vec![finding(Severity::Critical, "both", Some("5 min"))];
        sort_by_severity(&mut findings);
        assert_eq!(top_issues(&findings).len(), 1);
        assert_eq!(quick_wins(&findings).len(), 1);
    }

    #[test]
    fn quick_wins_capped_at_five() {
        let findings: Vec<Finding> = (0..8)
            .map(|i| finding(Severity::Low, &format!("f{i}"), Some("2 min")))
            .collect();
        assert_eq!(quick_wins(&findings).len(), 5);
    }
}
