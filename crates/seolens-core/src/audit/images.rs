//! Image checks: alt text coverage and lazy loading
//!
//! The first image on the page is treated as above-the-fold and is exempt
//! from the lazy-loading rule. It still counts for alt-text coverage.

use serde::Serialize;

use crate::document::Document;
use crate::types::{Category, Finding, PageContext, Severity};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFacts {
    pub total_images: usize,
    /// Images carrying an alt attribute. An empty alt (decorative image)
    /// counts as credited.
    pub images_with_alt: usize,
    pub images_missing_alt: usize,
    /// Images past the first one; only these are expected to lazy-load.
    pub eligible_for_lazy: usize,
    pub lazy_loaded: usize,
    pub findings: Vec<Finding>,
}

pub fn check(doc: &Document, _ctx: &PageContext) -> ImageFacts {
    let images = doc.elements("img");
    let total_images = images.len();

    let mut images_with_alt = 0usize;
    let mut missing_alt_locations: Vec<String> = Vec::new();
    let mut lazy_loaded = 0usize;
    let mut missing_lazy = 0usize;

    for (index, img) in images.iter().enumerate() {
        let src = img.value().attr("src").unwrap_or("(no src)");

        if img.value().attr("alt").is_some() {
            images_with_alt += 1;
        } else {
            missing_alt_locations.push(src.to_string());
        }

        if index > 0 {
            if img.value().attr("loading").map(str::trim) == Some("lazy") {
                lazy_loaded += 1;
            } else {
                missing_lazy += 1;
            }
        }
    }

    let images_missing_alt = missing_alt_locations.len();
    let eligible_for_lazy = total_images.saturating_sub(1);

    let mut findings = Vec::new();

    if images_missing_alt > 0 {
        findings.push(
            Finding::new(
                Category::Images,
                Severity::High,
                "Images missing alt text",
                format!(
                    "{images_missing_alt} of {total_images} images are invisible to screen \
                     readers and image search"
                ),
                "Add descriptive alt text to meaningful images; use alt=\"\" for decorative ones",
            )
            .location(missing_alt_locations[0].clone())
            .time_estimate("5 min"),
        );
    }

    if missing_lazy > 0 {
        findings.push(
            Finding::new(
                Category::Images,
                Severity::Medium,
                "Images missing lazy loading",
                format!(
                    "{missing_lazy} below-the-fold image(s) load eagerly and slow down first paint"
                ),
                r#"Add loading="lazy" to images below the fold"#,
            )
            .time_estimate("2 min"),
        );
    }

    ImageFacts {
        total_images,
        images_with_alt,
        images_missing_alt,
        eligible_for_lazy,
        lazy_loaded,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> ImageFacts {
        check(&Document::parse(html), &PageContext::default())
    }

    #[test]
    fn no_images_no_findings() {
        let facts = run("<body><p>Text only</p></body>");
        assert_eq!(facts.total_images, 0);
        assert!(facts.findings.is_empty());
    }

    #[test]
    fn empty_alt_counts_as_credited() {
        let facts = run(r#"<body><img src="a.png" alt=""></body>"#);
        assert_eq!(facts.images_with_alt, 1);
        assert_eq!(facts.images_missing_alt, 0);
    }

    #[test]
    fn first_image_exempt_from_lazy_rule_only() {
        // Index 0, no alt, no lazy: produces an alt finding but no lazy finding.
        let facts = run(r#"<body><img src="hero.png"></body>"#);
        assert!(facts.findings.iter().any(|f| f.issue == "Images missing alt text"));
        assert!(!facts.findings.iter().any(|f| f.issue == "Images missing lazy loading"));
        assert_eq!(facts.eligible_for_lazy, 0);
    }

    #[test]
    fn later_image_without_alt_or_lazy_triggers_both() {
        let facts = run(
            r#"<body><img src="hero.png" alt="Hero"><img src="later.png"></body>"#,
        );
        assert!(facts.findings.iter().any(|f| f.issue == "Images missing alt text"));
        assert!(facts.findings.iter().any(|f| f.issue == "Images missing lazy loading"));
        assert_eq!(facts.eligible_for_lazy, 1);
        assert_eq!(facts.lazy_loaded, 0);
    }

    #[test]
    fn lazy_attribute_is_counted() {
        let facts = run(
            r#"<body><img src="a.png" alt="a">
               <img src="b.png" alt="b" loading="lazy">
               <img src="c.png" alt="c" loading="lazy"></body>"#,
        );
        assert_eq!(facts.eligible_for_lazy, 2);
        assert_eq!(facts.lazy_loaded, 2);
        assert!(facts.findings.is_empty());
    }

    #[test]
    fn alt_finding_points_at_first_offender() {
        let facts = run(
            r#"<body><img src="ok.png" alt="ok"><img src="bad.png"></body>"#,
        );
        let finding = facts
            .findings
            .iter()
            .find(|f| f.issue == "Images missing alt text")
            .unwrap();
        assert_eq!(finding.location.as_deref(), Some("bad.png"));
    }
}
