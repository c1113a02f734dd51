//! Link checks: internal/external balance, anchor text, target hygiene

use serde::Serialize;
use url::Url;

use crate::document::Document;
use crate::types::{Category, Finding, PageContext, Severity};

/// Closed list of anchor texts considered generic. Matching is exact after
/// lowercasing and trimming; this is the behavioral contract, not a heuristic.
const GENERIC_ANCHOR_TEXTS: &[&str] = &["click here", "read more", "learn more", "here", "link", "this"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkFacts {
    pub total_links: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub generic_text_links: usize,
    /// External links opened in a new tab.
    pub blank_external: usize,
    /// Of those, how many carry rel="noopener".
    pub blank_with_noopener: usize,
    pub findings: Vec<Finding>,
}

impl LinkFacts {
    /// Every `_blank` external link has its matching noopener.
    pub fn noopener_parity(&self) -> bool {
        self.blank_external == self.blank_with_noopener
    }
}

enum LinkKind {
    Internal,
    External,
    Skipped,
}

fn classify_href(href: &str) -> LinkKind {
    let href = href.trim();
    if href.is_empty() || href == "#" {
        return LinkKind::Skipped;
    }
    match Url::parse(href) {
        Ok(url) => match url.scheme() {
            "http" | "https" => LinkKind::External,
            _ => LinkKind::Skipped, // mailto:, tel:, javascript:, ...
        },
        // No scheme: a relative path or fragment within the same site.
        Err(_) => LinkKind::Internal,
    }
}

pub fn check(doc: &Document, _ctx: &PageContext) -> LinkFacts {
    let mut total_links = 0usize;
    let mut internal_links = 0usize;
    let mut external_links = 0usize;
    let mut generic_text_links = 0usize;
    let mut blank_external = 0usize;
    let mut blank_with_noopener = 0usize;
    let mut first_generic: Option<String> = None;

    for anchor in doc.elements("a[href]") {
        let href = anchor.value().attr("href").unwrap_or_default();
        let kind = classify_href(href);
        if matches!(kind, LinkKind::Skipped) {
            continue;
        }
        total_links += 1;

        let text = anchor
            .text()
            .collect::<String>()
            .trim()
            .to_lowercase();
        if GENERIC_ANCHOR_TEXTS.contains(&text.as_str()) {
            generic_text_links += 1;
            if first_generic.is_none() {
                first_generic = Some(format!(r#"<a href="{href}">{text}</a>"#));
            }
        }

        match kind {
            LinkKind::Internal => internal_links += 1,
            LinkKind::External => {
                external_links += 1;
                if anchor.value().attr("target").map(str::trim) == Some("_blank") {
                    blank_external += 1;
                    let rel = anchor.value().attr("rel").unwrap_or_default();
                    if rel.split_whitespace().any(|token| token == "noopener") {
                        blank_with_noopener += 1;
                    }
                }
            }
            LinkKind::Skipped => unreachable!(),
        }
    }

    let mut findings = Vec::new();

    if generic_text_links > 0 {
        let mut finding = Finding::new(
            Category::Links,
            Severity::Medium,
            "Generic anchor text",
            format!(
                "{generic_text_links} link(s) say nothing about their destination; \
                 crawlers and screen-reader users lose context"
            ),
            "Rewrite anchor text to describe the destination",
        )
        .time_estimate("15 min");
        if let Some(code) = first_generic {
            finding = finding.current_code(code);
        }
        findings.push(finding);
    }

    if blank_external > blank_with_noopener {
        findings.push(
            Finding::new(
                Category::Links,
                Severity::Medium,
                "External links missing noopener",
                format!(
                    "{} new-tab link(s) give the target page scripting access to this one",
                    blank_external - blank_with_noopener
                ),
                r#"Add rel="noopener" to every target="_blank" link"#,
            )
            .time_estimate("2 min"),
        );
    }

    if total_links > 0 && internal_links < 3 {
        findings.push(
            Finding::new(
                Category::Links,
                Severity::Low,
                "Too few internal links",
                format!("Only {internal_links} internal link(s); crawl depth and page authority suffer"),
                "Link to at least three related pages on the same site",
            )
            .time_estimate("15 min"),
        );
    }

    LinkFacts {
        total_links,
        internal_links,
        external_links,
        generic_text_links,
        blank_external,
        blank_with_noopener,
        findings,
    }
}
