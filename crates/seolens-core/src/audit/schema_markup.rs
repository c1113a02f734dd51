//! Structured-data presence checks: JSON-LD blocks, detected types, gaps

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::document::Document;
use crate::schema::registry::TypeRegistry;
use crate::types::{Category, Finding, PageContext, Severity};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaFacts {
    pub block_count: usize,
    pub has_structured_data: bool,
    pub detected_types: Vec<String>,
    pub validation_issue_count: usize,
    pub has_organization_schema: bool,
    pub has_page_relevant_schema: bool,
    pub findings: Vec<Finding>,
}

/// Extract JSON-LD script block contents. The type attribute match is
/// case-insensitive and tolerates parameters like `; charset=utf-8`;
/// blocks with only whitespace are dropped.
pub fn extract_json_ld_blocks(doc: &Document) -> Vec<String> {
    doc.elements("script")
        .iter()
        .filter_map(|element| {
            let script_type = element
                .value()
                .attr("type")
                .map(|t| t.trim().to_ascii_lowercase())
                .unwrap_or_default();

            if script_type.contains("ld+json") {
                let text = element.text().collect::<String>().trim().to_string();
                if text.is_empty() { None } else { Some(text) }
            } else {
                None
            }
        })
        .collect()
}

/// Collect `@type` names from a parsed JSON-LD value, descending into
/// `@graph` arrays and nested objects.
fn collect_types(value: &JsonValue, out: &mut Vec<String>) {
    match value {
        JsonValue::Object(obj) => {
            if let Some(type_val) = obj.get("@type") {
                match type_val {
                    JsonValue::String(s) => out.push(shorten_type(s)),
                    JsonValue::Array(arr) => {
                        for item in arr {
                            if let JsonValue::String(s) = item {
                                out.push(shorten_type(s));
                            }
                        }
                    }
                    _ => {}
                }
            }
            for (key, nested) in obj {
                if key != "@type" {
                    collect_types(nested, out);
                }
            }
        }
        JsonValue::Array(arr) => {
            for item in arr {
                collect_types(item, out);
            }
        }
        _ => {}
    }
}

/// Reduce a possibly-IRI type to its local name ("https://schema.org/Product" -> "Product").
fn shorten_type(raw: &str) -> String {
    raw.rsplit(['/', '#']).next().unwrap_or(raw).to_string()
}

pub fn check(doc: &Document, ctx: &PageContext) -> SchemaFacts {
    let blocks = extract_json_ld_blocks(doc);
    let block_count = blocks.len();
    let has_structured_data = block_count > 0;

    let mut detected_types = Vec::new();
    let mut validation_issue_count = 0usize;
    for block in &blocks {
        match serde_json::from_str::<JsonValue>(block) {
            Ok(value) => collect_types(&value, &mut detected_types),
            Err(_) => validation_issue_count += 1,
        }
    }
    detected_types.sort();
    detected_types.dedup();

    let registry = TypeRegistry::global();
    let has_organization_schema = detected_types
        .iter()
        .any(|t| t == "Organization" || registry.is_descendant_of(t, "Organization"));

    let has_page_relevant_schema = match ctx.page_type.as_deref() {
        Some("product") => detected_types.iter().any(|t| t == "Product"),
        Some("article") | Some("blog") => detected_types
            .iter()
            .any(|t| matches!(t.as_str(), "Article" | "BlogPosting" | "NewsArticle")),
        Some("faq") => detected_types.iter().any(|t| t == "FAQPage"),
        _ => detected_types.iter().any(|t| {
            !matches!(t.as_str(), "WebSite" | "WebPage" | "BreadcrumbList")
        }),
    };

    let mut findings = Vec::new();

    if !has_structured_data {
        findings.push(
            Finding::new(
                Category::Schema,
                Severity::High,
                "No structured data found",
                "Search engines and LLM crawlers get no machine-readable description \
                 of the business or content",
                "Add a JSON-LD block describing the page's primary entity",
            )
            .location("<head>")
            .time_estimate("5 min"),
        );
    }

    if validation_issue_count > 0 {
        findings.push(
            Finding::new(
                Category::Schema,
                Severity::Medium,
                "Structured data has validation issues",
                format!(
                    "{validation_issue_count} JSON-LD block(s) fail to parse and will be ignored \
                     by crawlers"
                ),
                "Regenerate the invalid JSON-LD blocks",
            )
            .time_estimate("15 min"),
        );
    }

    if has_structured_data && !has_organization_schema {
        findings.push(
            Finding::new(
                Category::Schema,
                Severity::Medium,
                "Missing Organization schema",
                "Knowledge panels and brand queries have no entity to attach to",
                "Add an Organization or LocalBusiness JSON-LD object",
            )
            .time_estimate("5 min"),
        );
    }

    // Long-form pages benefit from Article schema, except "about us" pages,
    // which read like articles but describe the organization instead.
    let word_count = doc.body_text().split_whitespace().count();
    let about_signal = ctx.is_about_page() || {
        let title = doc.first_text("title").unwrap_or_default().to_lowercase();
        let h1 = doc.first_text("h1").unwrap_or_default().to_lowercase();
        title.contains("about us") || h1.contains("about us")
    };
    let article_family = detected_types
        .iter()
        .any(|t| matches!(t.as_str(), "Article" | "BlogPosting" | "NewsArticle"));
    let long_form = doc.exists("article") || (word_count >= 500 && doc.exists("h1"));
    if long_form && !article_family && !about_signal {
        findings.push(
            Finding::new(
                Category::Schema,
                Severity::Low,
                "Missing Article schema",
                "Long-form content without Article markup misses rich-result eligibility",
                "Add an Article JSON-LD object with headline, author, and dates",
            )
            .time_estimate("5 min"),
        );
    }

    if ctx.wants_faq() && !detected_types.iter().any(|t| t == "FAQPage") {
        findings.push(
            Finding::new(
                Category::Schema,
                Severity::Low,
                "Missing FAQ schema",
                "Conversion pages with an FAQ section can occupy extra search result space",
                "Add an FAQ section and matching FAQPage JSON-LD",
            )
            .time_estimate("15 min"),
        );
    }

    SchemaFacts {
        block_count,
        has_structured_data,
        detected_types,
        validation_issue_count,
        has_organization_schema,
        has_page_relevant_schema,
        findings,
    }
}
