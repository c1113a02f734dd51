//! Heading structure checks: H1 policy, hierarchy gaps, subheadings

use serde::Serialize;

use crate::document::Document;
use crate::types::{Category, Finding, PageContext, Severity};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingFacts {
    pub h1_count: usize,
    pub h1_text: String,
    pub h1_length: usize,
    /// Counts for h1 through h6.
    pub distribution: Vec<usize>,
    pub proper_hierarchy: bool,
    pub has_h2: bool,
    pub descriptive_headings: bool,
    pub findings: Vec<Finding>,
}

impl HeadingFacts {
    pub fn has_single_h1(&self) -> bool {
        self.h1_count == 1
    }

    pub fn h1_length_good(&self) -> bool {
        (20..=70).contains(&self.h1_length)
    }
}

pub fn check(doc: &Document, _ctx: &PageContext) -> HeadingFacts {
    let distribution: Vec<usize> = (1..=6)
        .map(|level| doc.count(&format!("h{level}")))
        .collect();
    let h1_count = distribution[0];
    let h1_text = doc.first_text("h1").unwrap_or_default();
    let h1_length = h1_text.chars().count();
    let has_h2 = distribution[1] > 0;

    // Hierarchy check mirrors the distribution walk: a level is skipped when
    // a populated level is more than one step below the previous populated one.
    let mut proper_hierarchy = true;
    let mut skip_detail = String::new();
    let mut last_level = 0usize;
    for (idx, &count) in distribution.iter().enumerate() {
        if count > 0 {
            let level = idx + 1;
            if last_level > 0 && level > last_level + 1 {
                proper_hierarchy = false;
                skip_detail = format!("jumps from <h{last_level}> to <h{level}>");
            }
            last_level = level;
        }
    }

    let heading_texts: Vec<String> = doc
        .elements("h1, h2, h3, h4, h5, h6")
        .iter()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();
    let descriptive_headings = !heading_texts.is_empty()
        && heading_texts.iter().all(|t| !t.is_empty())
        && heading_texts.iter().map(|t| t.chars().count()).sum::<usize>()
            / heading_texts.len()
            >= 10;

    let mut findings = Vec::new();

    if h1_count == 0 {
        findings.push(
            Finding::new(
                Category::Headings,
                Severity::Critical,
                "Missing H1 heading",
                "Search engines and assistive technology have no primary topic for the page",
                "Add exactly one <h1> stating what the page is about",
            )
            .time_estimate("5 min"),
        );
    } else if h1_count > 1 {
        findings.push(
            Finding::new(
                Category::Headings,
                Severity::Medium,
                "Multiple H1 headings",
                format!("{h1_count} H1 elements dilute the page's primary topic"),
                "Keep one <h1> and demote the others to <h2>",
            )
            .time_estimate("5 min"),
        );
    }

    if !proper_hierarchy {
        findings.push(
            Finding::new(
                Category::Headings,
                Severity::Medium,
                "Skipped heading levels",
                format!("The heading outline {skip_detail}; crawlers may misread the structure"),
                "Make heading levels sequential without gaps",
            )
            .time_estimate("15 min"),
        );
    }

    if !has_h2 {
        findings.push(
            Finding::new(
                Category::Headings,
                Severity::Low,
                "No H2 subheadings",
                "Long content without subheadings is harder to scan and to index",
                "Break the content into sections introduced by <h2> headings",
            )
            .time_estimate("15 min"),
        );
    }

    HeadingFacts {
        h1_count,
        h1_text,
        h1_length,
        distribution,
        proper_hierarchy,
        has_h2,
        descriptive_headings,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> HeadingFacts {
        check(&Document::parse(html), &PageContext::default())
    }

    #[test]
    fn missing_h1_is_critical() {
        let facts = run("<body><h2>Sub</h2></body>");
        assert_eq!(facts.h1_count, 0);
        let finding = facts
            .findings
            .iter()
            .find(|f| f.issue == "Missing H1 heading")
            .expect("missing h1 finding");
        assert_eq!(finding.severity, Severity::Critical);
    }

    #[test]
    fn multiple_h1_is_medium() {
        let facts = run("<body><h1>One</h1><h1>Two</h1></body>");
        assert_eq!(facts.h1_count, 2);
        assert!(facts.findings.iter().any(|f| f.issue == "Multiple H1 headings"));
    }

    #[test]
    fn detects_skipped_levels() {
        let facts = run("<body><h1>Title</h1><h4>Deep</h4></body>");
        assert!(!facts.proper_hierarchy);
        assert!(facts.findings.iter().any(|f| f.issue == "Skipped heading levels"));
    }

    #[test]
    fn sequential_levels_pass() {
        let facts = run(
            "<body><h1>A descriptive page title</h1><h2>A useful section</h2>\
             <h3>A deeper subsection here</h3></body>",
        );
        assert!(facts.proper_hierarchy);
        assert!(facts.has_single_h1());
        assert!(facts.descriptive_headings);
        assert!(facts.findings.is_empty(), "{:?}", facts.findings);
    }

    #[test]
    fn distribution_has_six_levels() {
        let facts = run("<body><h1>x</h1><h2>y</h2><h2>z</h2></body>");
        assert_eq!(facts.distribution, vec![1, 2, 0, 0, 0, 0]);
    }
}
