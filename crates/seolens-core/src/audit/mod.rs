//! Category checkers
//!
//! Eight independent pure functions over a parsed [`Document`]. Each one is
//! total over malformed input: absent data resolves to empty/zero/false
//! defaults and never to an error. Every checker returns a facts struct
//! carrying the raw observations plus the findings it derived from them.

pub mod content;
pub mod headings;
pub mod images;
pub mod links;
pub mod llm;
pub mod meta;
pub mod schema_markup;
pub mod semantic;

use crate::document::Document;
use crate::types::PageContext;

/// The combined output of all eight checkers for one page.
#[derive(Debug)]
pub struct PageFacts {
    pub meta: meta::MetaFacts,
    pub headings: headings::HeadingFacts,
    pub schema: schema_markup::SchemaFacts,
    pub semantic: semantic::SemanticFacts,
    pub images: images::ImageFacts,
    pub links: links::LinkFacts,
    pub content: content::ContentFacts,
    pub llm: llm::LlmFacts,
}

/// Run every checker over one document.
pub fn check_all(raw_html: &str, doc: &Document, ctx: &PageContext) -> PageFacts {
    PageFacts {
        meta: meta::check(doc, ctx),
        headings: headings::check(doc, ctx),
        schema: schema_markup::check(doc, ctx),
        semantic: semantic::check(doc, ctx),
        images: images::check(doc, ctx),
        links: links::check(doc, ctx),
        content: content::check(doc, ctx),
        llm: llm::check(raw_html, doc, ctx),
    }
}

impl PageFacts {
    /// All findings in checker order (the discovery order the ranker keeps
    /// for equal severities).
    pub fn all_findings(&self) -> Vec<crate::types::Finding> {
        let mut findings = Vec::new();
        findings.extend(self.meta.findings.iter().cloned());
        findings.extend(self.headings.findings.iter().cloned());
        findings.extend(self.schema.findings.iter().cloned());
        findings.extend(self.semantic.findings.iter().cloned());
        findings.extend(self.images.findings.iter().cloned());
        findings.extend(self.links.findings.iter().cloned());
        findings.extend(self.content.findings.iter().cloned());
        findings.extend(self.llm.findings.iter().cloned());
        findings
    }
}
