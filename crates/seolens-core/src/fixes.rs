//! Remediation tier classification
//!
//! Maps each finding to a fix type and a fix method. The decision is a
//! static table: first an exact lookup on the canonical issue text, then an
//! ordered list of pattern rules, otherwise the finding stays unclassified
//! (informational only). A fix method, once assigned, is never reassigned.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Finding, FixMethod};

/// Exact lookup table: canonical issue text -> (fix type, fix method).
const EXACT_FIXES: &[(&str, &str, FixMethod)] = &[
    // Meta
    ("Missing page title", "generate_title", FixMethod::Ai),
    ("Page title too short", "rewrite_title", FixMethod::Ai),
    ("Page title too long", "rewrite_title", FixMethod::Ai),
    ("Missing meta description", "generate_meta_description", FixMethod::Ai),
    ("Meta description too short", "rewrite_meta_description", FixMethod::Ai),
    ("Meta description too long", "rewrite_meta_description", FixMethod::Ai),
    ("Missing Open Graph tags", "add_open_graph_tags", FixMethod::Client),
    ("Missing Twitter card tags", "add_twitter_card", FixMethod::Client),
    ("Missing canonical URL", "add_canonical", FixMethod::Client),
    ("Missing viewport meta tag", "add_viewport", FixMethod::Client),
    ("Missing favicon", "add_favicon", FixMethod::Client),
    // Headings
    ("Missing H1 heading", "generate_h1", FixMethod::Ai),
    ("Skipped heading levels", "fix_heading_levels", FixMethod::Client),
    ("No H2 subheadings", "generate_subheadings", FixMethod::Ai),
    // Structured data
    ("No structured data found", "generate_schema", FixMethod::Generated),
    ("Structured data has validation issues", "fix_validation_issues", FixMethod::Generated),
    ("Missing Organization schema", "generate_organization_schema", FixMethod::Generated),
    // Semantic
    ("Missing main landmark", "add_main_landmark", FixMethod::Client),
    ("Missing navigation landmark", "add_nav_landmark", FixMethod::Client),
    ("Missing header landmark", "add_header_landmark", FixMethod::Client),
    ("Missing footer landmark", "add_footer_landmark", FixMethod::Client),
    ("Missing language attribute", "add_lang_attribute", FixMethod::Client),
    // Images
    ("Images missing lazy loading", "add_lazy_loading", FixMethod::Client),
    // Links
    ("Generic anchor text", "rewrite_anchor_text", FixMethod::Ai),
    ("External links missing noopener", "add_noopener", FixMethod::Client),
    ("Too few internal links", "add_internal_links", FixMethod::Ai),
    // Content
    ("Thin content", "expand_content", FixMethod::Ai),
    ("Content lacks structure", "restructure_content", FixMethod::Ai),
    // LLM readability
    ("No summary paragraph detected", "generate_summary_paragraph", FixMethod::Ai),
];

struct PatternRule {
    pattern: Regex,
    fix_type: &'static str,
    fix_method: FixMethod,
}

/// Ordered pattern rules for issue texts not in the exact table. The first
/// matching rule wins.
static PATTERN_FIXES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    let rule = |pattern: &str, fix_type: &'static str, fix_method: FixMethod| PatternRule {
        pattern: Regex::new(pattern).expect("invalid fix pattern"),
        fix_type,
        fix_method,
    };
    vec![
        rule(r"(?i)multiple h1", "demote_extra_h1", FixMethod::Client),
        rule(r"(?i)missing alt text", "generate_alt_text", FixMethod::Ai),
        rule(r"(?i)missing .* schema", "generate_schema", FixMethod::Generated),
        rule(r"(?i)lazy loading", "add_lazy_loading", FixMethod::Client),
        rule(r"(?i)noopener", "add_noopener", FixMethod::Client),
    ]
});

/// Classify one issue text. `None` means informational only.
pub fn classify(issue: &str) -> Option<(&'static str, FixMethod)> {
    if let Some((_, fix_type, fix_method)) = EXACT_FIXES
        .iter()
        .find(|(canonical, _, _)| *canonical == issue)
    {
        return Some((fix_type, *fix_method));
    }
    PATTERN_FIXES
        .iter()
        .find(|rule| rule.pattern.is_match(issue))
        .map(|rule| (rule.fix_type, rule.fix_method))
}

/// Attach fix metadata to every unclassified finding in place. Findings
/// already carrying a fix method are left untouched.
pub fn apply(findings: &mut [Finding]) {
    for finding in findings.iter_mut() {
        if finding.fix_method.is_some() {
            continue;
        }
        if let Some((fix_type, fix_method)) = classify(&finding.issue) {
            finding.fix_type = Some(fix_type.to_string());
            finding.fix_method = Some(fix_method);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Severity};

    /// Every issue text the checkers can produce. Kept in sync with the
    /// checker modules; classification coverage is asserted below.
    const ALL_ISSUES: &[&str] = &[
        "Missing page title",
        "Page title too short",
        "Page title too long",
        "Missing meta description",
        "Meta description too short",
        "Meta description too long",
        "Missing Open Graph tags",
        "Missing Twitter card tags",
        "Missing canonical URL",
        "Missing viewport meta tag",
        "Missing favicon",
        "Missing H1 heading",
        "Multiple H1 headings",
        "Skipped heading levels",
        "No H2 subheadings",
        "No structured data found",
        "Structured data has validation issues",
        "Missing Organization schema",
        "Missing Article schema",
        "Missing FAQ schema",
        "Missing main landmark",
        "Missing navigation landmark",
        "Missing header landmark",
        "Missing footer landmark",
        "Missing language attribute",
        "Images missing alt text",
        "Images missing lazy loading",
        "Generic anchor text",
        "External links missing noopener",
        "Too few internal links",
        "Thin content",
        "Content lacks structure",
        "No lists found",
        "Content could be more comprehensive",
        "Low text-to-markup ratio",
        "No summary paragraph detected",
    ];

    /// Issue texts that deliberately stay unclassified.
    const INFORMATIONAL: &[&str] = &[
        "No lists found",
        "Content could be more comprehensive",
        "Low text-to-markup ratio",
    ];

    #[test]
    fn every_issue_text_is_covered() {
        for issue in ALL_ISSUES {
            let classified = classify(issue);
            if INFORMATIONAL.contains(issue) {
                assert!(classified.is_none(), "{issue} should stay unclassified");
            } else {
                assert!(classified.is_some(), "{issue} has no fix mapping");
            }
        }
    }

    #[test]
    fn exact_lookup_precedes_patterns() {
        // "Missing Organization schema" is in the exact table; the generic
        // schema pattern must not shadow its specific fix type.
        let (fix_type, method) = classify("Missing Organization schema").unwrap();
        assert_eq!(fix_type, "generate_organization_schema");
        assert_eq!(method, FixMethod::Generated);
    }

    #[test]
    fn pattern_rules_cover_schema_family() {
        let (fix_type, method) = classify("Missing Article schema").unwrap();
        assert_eq!(fix_type, "generate_schema");
        assert_eq!(method, FixMethod::Generated);

        let (fix_type, _) = classify("Missing FAQ schema").unwrap();
        assert_eq!(fix_type, "generate_schema");
    }

    #[test]
    fn multiple_h1_pattern() {
        let (fix_type, method) = classify("Multiple H1 headings").unwrap();
        assert_eq!(fix_type, "demote_extra_h1");
        assert_eq!(method, FixMethod::Client);
    }

    #[test]
    fn alt_text_is_ai_tier() {
        let (fix_type, method) = classify("Images missing alt text").unwrap();
        assert_eq!(fix_type, "generate_alt_text");
        assert_eq!(method, FixMethod::Ai);
    }

    #[test]
    fn apply_never_reassigns() {
        let mut findings = vec![Finding::new(
            Category::Meta,
            Severity::Critical,
            "Missing page title",
            "impact",
            "fix",
        )];
        findings[0].fix_type = Some("custom_fix".to_string());
        findings[0].fix_method = Some(FixMethod::Client);

        apply(&mut findings);
        assert_eq!(findings[0].fix_type.as_deref(), Some("custom_fix"));
        assert_eq!(findings[0].fix_method, Some(FixMethod::Client));
    }

    #[test]
    fn apply_classifies_fresh_findings() {
        let mut findings = vec![Finding::new(
            Category::Content,
            Severity::High,
            "Thin content",
            "impact",
            "fix",
        )];
        apply(&mut findings);
        assert_eq!(findings[0].fix_type.as_deref(), Some("expand_content"));
        assert_eq!(findings[0].fix_method, Some(FixMethod::Ai));
    }

    #[test]
    fn unknown_issue_stays_unclassified() {
        assert!(classify("Something entirely novel").is_none());
    }
}
