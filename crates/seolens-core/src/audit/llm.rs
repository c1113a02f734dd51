//! LLM readability checks
//!
//! Estimates how well the page survives the HTML-to-text conversion that
//! LLM crawlers perform. Scored like any other category, but carries zero
//! weight in the overall score; the findings are advisory.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::document::Document;
use crate::types::{Category, Finding, PageContext, Severity};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmFacts {
    /// Length of the markdown rendering relative to the raw markup.
    pub extractable_ratio: f64,
    pub has_summary_paragraph: bool,
    /// H2/H3 headings phrased as questions, which match query phrasing.
    pub question_headings: usize,
    pub has_heading_outline: bool,
    pub has_lists_or_tables: bool,
    pub has_structured_data: bool,
    pub findings: Vec<Finding>,
}

/// Strip script/style/noscript/template blocks and comments before the
/// markdown conversion, so boilerplate does not inflate the text estimate.
fn sanitize_html(html: &str) -> String {
    static RE_TAG_BLOCKS: Lazy<Vec<Regex>> = Lazy::new(|| {
        [
            r"(?is)<script[^>]*?>[\s\S]*?</script>",
            r"(?is)<style[^>]*?>[\s\S]*?</style>",
            r"(?is)<noscript[^>]*?>[\s\S]*?</noscript>",
            r"(?is)<template[^>]*?>[\s\S]*?</template>",
        ]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("invalid block regex"))
        .collect()
    });
    static RE_COMMENT: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?is)<!--.*?-->").expect("invalid comment regex"));

    let mut clean = html.to_string();
    for re in RE_TAG_BLOCKS.iter() {
        clean = re.replace_all(&clean, "").into_owned();
    }
    RE_COMMENT.replace_all(&clean, "").into_owned()
}

pub fn check(raw_html: &str, doc: &Document, _ctx: &PageContext) -> LlmFacts {
    let markdown = html2md::parse_html(&sanitize_html(raw_html));
    let extractable_ratio = if raw_html.is_empty() {
        0.0
    } else {
        markdown.trim().len() as f64 / raw_html.len() as f64
    };

    let first_paragraph = doc
        .elements("p")
        .iter()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .find(|t| !t.is_empty())
        .unwrap_or_default();
    let has_summary_paragraph = first_paragraph.split_whitespace().count() >= 25;

    let question_headings = doc
        .elements("h2, h3")
        .iter()
        .filter(|el| el.text().collect::<String>().trim().ends_with('?'))
        .count();

    let has_heading_outline = doc.count("h1") == 1 && doc.count("h2") >= 2;
    let has_lists_or_tables = doc.exists("ul") || doc.exists("ol") || doc.exists("table");
    let has_structured_data = doc
        .elements("script")
        .iter()
        .any(|el| {
            el.value()
                .attr("type")
                .map(|t| t.to_ascii_lowercase().contains("ld+json"))
                .unwrap_or(false)
        });

    let mut findings = Vec::new();

    if extractable_ratio < 0.05 {
        findings.push(Finding::new(
            Category::LlmReadability,
            Severity::Info,
            "Low text-to-markup ratio",
            format!(
                "Only {:.1}% of the markup survives text extraction; LLM crawlers see \
                 mostly boilerplate",
                extractable_ratio * 100.0
            ),
            "Render the primary content as server-side HTML rather than script-driven markup",
        ));
    }

    if !has_summary_paragraph {
        findings.push(
            Finding::new(
                Category::LlmReadability,
                Severity::Low,
                "No summary paragraph detected",
                "Answer engines quote opening paragraphs; without one the page is rarely cited",
                "Open the page with a 2-3 sentence summary of its topic",
            )
            .time_estimate("15 min"),
        );
    }

    LlmFacts {
        extractable_ratio,
        has_summary_paragraph,
        question_headings,
        has_heading_outline,
        has_lists_or_tables,
        has_structured_data,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> LlmFacts {
        check(html, &Document::parse(html), &PageContext::default())
    }

    #[test]
    fn text_rich_page_scores_well() {
        let intro = "word ".repeat(30);
        let html = format!(
            "<body><h1>Guide</h1><p>{intro}</p><h2>What is it?</h2><p>More.</p>\
             <h2>How does it work?</h2><ul><li>step</li></ul></body>"
        );
        let facts = run(&html);
        assert!(facts.has_summary_paragraph);
        assert_eq!(facts.question_headings, 2);
        assert!(facts.has_heading_outline);
        assert!(facts.has_lists_or_tables);
    }

    #[test]
    fn script_heavy_page_has_low_ratio() {
        let script = format!("<script>{}</script>", "var x = 1;".repeat(500));
        let html = format!("<body>{script}<p>tiny</p></body>");
        let facts = run(&html);
        assert!(facts.extractable_ratio < 0.05);
        assert!(facts
            .findings
            .iter()
            .any(|f| f.issue == "Low text-to-markup ratio"));
    }

    #[test]
    fn short_opener_flags_missing_summary() {
        let facts = run("<body><h1>Title</h1><p>Too short.</p></body>");
        assert!(!facts.has_summary_paragraph);
        assert!(facts
            .findings
            .iter()
            .any(|f| f.issue == "No summary paragraph detected"));
    }

    #[test]
    fn sanitize_strips_comments_and_scripts() {
        let cleaned = sanitize_html("<p>keep</p><!-- drop --><script>drop()</script>");
        assert!(cleaned.contains("keep"));
        assert!(!cleaned.contains("drop"));
    }
}
