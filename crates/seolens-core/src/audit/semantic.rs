//! Semantic landmark checks: main/nav/header/footer, lang, ARIA usage

use serde::Serialize;

use crate::document::Document;
use crate::types::{Category, Finding, PageContext, Severity};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticFacts {
    pub has_main: bool,
    pub has_navigation: bool,
    pub has_header: bool,
    pub has_footer: bool,
    pub article_count: usize,
    pub section_count: usize,
    pub has_lang: bool,
    pub aria_label_count: usize,
    pub findings: Vec<Finding>,
}

impl SemanticFacts {
    pub fn uses_content_sectioning(&self) -> bool {
        self.article_count > 0 || self.section_count > 0
    }
}

pub fn check(doc: &Document, _ctx: &PageContext) -> SemanticFacts {
    let has_main = doc.exists("main") || doc.exists(r#"[role="main"]"#);
    let has_navigation = doc.exists("nav") || doc.exists(r#"[role="navigation"]"#);
    let has_header = doc.exists("header") || doc.exists(r#"[role="banner"]"#);
    let has_footer = doc.exists("footer") || doc.exists(r#"[role="contentinfo"]"#);
    let article_count = doc.count("article") + doc.count(r#"[role="article"]"#);
    let section_count = doc.count("section");
    let has_lang = doc
        .first_attr("html", "lang")
        .map(|lang| !lang.is_empty())
        .unwrap_or(false);
    let aria_label_count = doc.count("[aria-label]");

    let mut findings = Vec::new();

    if !has_main {
        findings.push(
            Finding::new(
                Category::Semantic,
                Severity::High,
                "Missing main landmark",
                "Crawlers and assistive technology cannot identify the primary content region",
                "Wrap the primary content in a <main> element",
            )
            .time_estimate("5 min"),
        );
    }

    if !has_navigation {
        findings.push(
            Finding::new(
                Category::Semantic,
                Severity::Medium,
                "Missing navigation landmark",
                "Site structure is invisible to crawlers and screen readers",
                "Wrap the site navigation in a <nav> element",
            )
            .time_estimate("5 min"),
        );
    }

    if !has_header {
        findings.push(
            Finding::new(
                Category::Semantic,
                Severity::Low,
                "Missing header landmark",
                "The page banner region is not marked up semantically",
                "Wrap the top banner in a <header> element",
            )
            .time_estimate("2 min"),
        );
    }

    if !has_footer {
        findings.push(
            Finding::new(
                Category::Semantic,
                Severity::Low,
                "Missing footer landmark",
                "Contact and legal information is not marked up semantically",
                "Wrap the page footer in a <footer> element",
            )
            .time_estimate("2 min"),
        );
    }

    if !has_lang {
        findings.push(
            Finding::new(
                Category::Semantic,
                Severity::Medium,
                "Missing language attribute",
                "Screen readers and translators cannot determine the page language",
                r#"Add lang="..." to the <html> element"#,
            )
            .current_code("<html>")
            .time_estimate("2 min"),
        );
    }

    SemanticFacts {
        has_main,
        has_navigation,
        has_header,
        has_footer,
        article_count,
        section_count,
        has_lang,
        aria_label_count,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> SemanticFacts {
        check(&Document::parse(html), &PageContext::default())
    }

    #[test]
    fn well_structured_page_passes() {
        let facts = run(
            r#"<html lang="en"><body>
                <header>Top</header><nav>Menu</nav>
                <main><section aria-label="intro">Hello</section></main>
                <footer>Bottom</footer>
               </body></html>"#,
        );
        assert!(facts.has_main && facts.has_navigation && facts.has_header && facts.has_footer);
        assert!(facts.has_lang);
        assert!(facts.uses_content_sectioning());
        assert_eq!(facts.aria_label_count, 1);
        assert!(facts.findings.is_empty(), "{:?}", facts.findings);
    }

    #[test]
    fn aria_roles_count_as_landmarks() {
        let facts = run(
            r#"<body><div role="main">x</div><div role="navigation">y</div>
               <div role="banner">z</div><div role="contentinfo">w</div></body>"#,
        );
        assert!(facts.has_main && facts.has_navigation && facts.has_header && facts.has_footer);
    }

    #[test]
    fn div_soup_produces_findings() {
        let facts = run(r#"<body><div class="main">content</div></body>"#);
        assert!(!facts.has_main);
        let missing_main = facts
            .findings
            .iter()
            .find(|f| f.issue == "Missing main landmark")
            .expect("missing main finding");
        assert_eq!(missing_main.severity, Severity::High);
        assert!(facts.findings.iter().any(|f| f.issue == "Missing language attribute"));
    }
}
