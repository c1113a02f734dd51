//! Content depth checks: word count, paragraph structure, depth class

use serde::Serialize;

use crate::document::Document;
use crate::types::{Category, Finding, PageContext, Severity};

/// Depth classification over the visible body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentDepth {
    Thin,
    Moderate,
    Comprehensive,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFacts {
    pub word_count: usize,
    pub paragraph_count: usize,
    pub has_list: bool,
    pub depth: ContentDepth,
    pub findings: Vec<Finding>,
}

fn classify_depth(word_count: usize, paragraph_count: usize) -> ContentDepth {
    if word_count < 300 {
        ContentDepth::Thin
    } else if word_count >= 800 && paragraph_count >= 5 {
        ContentDepth::Comprehensive
    } else {
        ContentDepth::Moderate
    }
}

pub fn check(doc: &Document, _ctx: &PageContext) -> ContentFacts {
    let text = doc.body_text();
    let word_count = text.split_whitespace().count();
    let paragraph_count = doc
        .elements("p")
        .iter()
        .filter(|el| !el.text().collect::<String>().trim().is_empty())
        .count();
    let has_list = doc.exists("ul") || doc.exists("ol");
    let depth = classify_depth(word_count, paragraph_count);

    let mut findings = Vec::new();

    match depth {
        ContentDepth::Thin => {
            findings.push(
                Finding::new(
                    Category::Content,
                    Severity::High,
                    "Thin content",
                    format!("{word_count} words is too little for the page to rank on its topic"),
                    "Expand the page to at least 300 words of substantive content",
                )
                .time_estimate("1 hour"),
            );
        }
        ContentDepth::Moderate => {
            findings.push(Finding::new(
                Category::Content,
                Severity::Info,
                "Content could be more comprehensive",
                format!(
                    "{word_count} words is workable; pages over 800 words with clear sections \
                     tend to rank better"
                ),
                "Deepen the strongest sections and add supporting detail",
            ));
        }
        ContentDepth::Comprehensive => {}
    }

    if word_count >= 300 && paragraph_count < 5 {
        findings.push(
            Finding::new(
                Category::Content,
                Severity::Low,
                "Content lacks structure",
                format!("{paragraph_count} paragraph(s) for {word_count} words reads as a wall of text"),
                "Split the content into at least five focused paragraphs",
            )
            .time_estimate("30 min"),
        );
    }

    if !has_list {
        findings.push(Finding::new(
            Category::Content,
            Severity::Info,
            "No lists found",
            "Bulleted or numbered lists improve scannability and featured-snippet eligibility",
            "Convert enumerable content into <ul> or <ol> lists",
        ));
    }

    ContentFacts {
        word_count,
        paragraph_count,
        has_list,
        depth,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> ContentFacts {
        check(&Document::parse(html), &PageContext::default())
    }

    fn paragraphs(count: usize, words_each: usize) -> String {
        (0..count)
            .map(|_| format!("<p>{}</p>", "word ".repeat(words_each)))
            .collect()
    }

    #[test]
    fn short_page_is_thin() {
        let facts = run("<body><p>Just a few words here.</p></body>");
        assert_eq!(facts.depth, ContentDepth::Thin);
        let finding = facts.findings.iter().find(|f| f.issue == "Thin content").unwrap();
        assert_eq!(finding.severity, Severity::High);
    }

    #[test]
    fn mid_length_page_is_moderate() {
        let html = format!("<body>{}</body>", paragraphs(5, 80));
        let facts = run(&html);
        assert_eq!(facts.word_count, 400);
        assert_eq!(facts.depth, ContentDepth::Moderate);
    }

    #[test]
    fn long_structured_page_is_comprehensive() {
        let html = format!("<body>{}<ul><li>point</li></ul></body>", paragraphs(6, 150));
        let facts = run(&html);
        assert_eq!(facts.depth, ContentDepth::Comprehensive);
        assert!(facts.has_list);
        assert!(!facts.findings.iter().any(|f| f.issue == "Thin content"));
    }

    #[test]
    fn wall_of_text_flagged() {
        let html = format!("<body><p>{}</p></body>", "word ".repeat(400));
        let facts = run(&html);
        assert!(facts.findings.iter().any(|f| f.issue == "Content lacks structure"));
    }

    #[test]
    fn empty_paragraphs_do_not_count() {
        let facts = run("<body><p>  </p><p>Real text</p></body>");
        assert_eq!(facts.paragraph_count, 1);
    }

    #[test]
    fn missing_list_is_informational() {
        let facts = run("<body><p>Text</p></body>");
        let finding = facts.findings.iter().find(|f| f.issue == "No lists found").unwrap();
        assert_eq!(finding.severity, Severity::Info);
    }
}
