//! Meta tag checks: title, description, Open Graph, canonical, viewport

use serde::Serialize;

use crate::document::Document;
use crate::types::{Category, Finding, PageContext, Severity};

/// Good title length range, in characters.
const TITLE_GOOD: std::ops::RangeInclusive<usize> = 30..=60;
/// Good meta description length range, in characters.
const DESCRIPTION_GOOD: std::ops::RangeInclusive<usize> = 120..=160;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaFacts {
    pub has_title: bool,
    pub title: String,
    pub title_length: usize,
    pub has_meta_description: bool,
    pub description_length: usize,
    pub has_og_title: bool,
    pub has_og_description: bool,
    pub has_og_image: bool,
    pub has_twitter_card: bool,
    pub has_canonical: bool,
    pub has_viewport: bool,
    pub has_favicon: bool,
    pub findings: Vec<Finding>,
}

impl MetaFacts {
    pub fn title_length_good(&self) -> bool {
        TITLE_GOOD.contains(&self.title_length)
    }

    pub fn description_length_good(&self) -> bool {
        DESCRIPTION_GOOD.contains(&self.description_length)
    }

    pub fn has_open_graph(&self) -> bool {
        self.has_og_title && self.has_og_description && self.has_og_image
    }
}

pub fn check(doc: &Document, _ctx: &PageContext) -> MetaFacts {
    let title = doc.first_text("title").unwrap_or_default();
    let has_title = !title.is_empty();
    let title_length = title.chars().count();

    let description = doc.meta_content("description").unwrap_or_default();
    let has_meta_description = !description.is_empty();
    let description_length = description.chars().count();

    let has_og_title = doc.meta_property("og:title").is_some();
    let has_og_description = doc.meta_property("og:description").is_some();
    let has_og_image = doc.meta_property("og:image").is_some();
    let has_twitter_card = doc.meta_content("twitter:card").is_some();
    let has_canonical = doc.exists(r#"link[rel="canonical"]"#);
    let has_viewport = doc.meta_content("viewport").is_some();
    let has_favicon =
        doc.exists(r#"link[rel="icon"]"#) || doc.exists(r#"link[rel="shortcut icon"]"#);

    let mut findings = Vec::new();

    if !has_title {
        findings.push(
            Finding::new(
                Category::Meta,
                Severity::Critical,
                "Missing page title",
                "Search engines and browser tabs show nothing for this page; \
                 it will not rank for anything",
                "Add a descriptive <title> element of 30-60 characters to <head>",
            )
            .location("<head>")
            .time_estimate("5 min"),
        );
    } else if title_length < *TITLE_GOOD.start() {
        findings.push(
            Finding::new(
                Category::Meta,
                Severity::Low,
                "Page title too short",
                format!("{title_length} characters gives search engines little to work with"),
                "Expand the title toward 30-60 characters with the page's main topic",
            )
            .current_code(format!("<title>{title}</title>"))
            .time_estimate("5 min"),
        );
    } else if title_length > *TITLE_GOOD.end() {
        findings.push(
            Finding::new(
                Category::Meta,
                Severity::Low,
                "Page title too long",
                format!("{title_length} characters will be truncated in search results"),
                "Trim the title to 60 characters or fewer",
            )
            .current_code(format!("<title>{title}</title>"))
            .time_estimate("5 min"),
        );
    }

    if !has_meta_description {
        findings.push(
            Finding::new(
                Category::Meta,
                Severity::High,
                "Missing meta description",
                "Search engines will pick an arbitrary text snippet, hurting click-through",
                "Add a meta description of 120-160 characters summarizing the page",
            )
            .location("<head>")
            .time_estimate("5 min"),
        );
    } else if description_length < *DESCRIPTION_GOOD.start() {
        findings.push(
            Finding::new(
                Category::Meta,
                Severity::Medium,
                "Meta description too short",
                format!("{description_length} characters wastes snippet space in search results"),
                "Expand the description toward 120-160 characters",
            )
            .time_estimate("2 min"),
        );
    } else if description_length > *DESCRIPTION_GOOD.end() {
        findings.push(
            Finding::new(
                Category::Meta,
                Severity::Low,
                "Meta description too long",
                format!("{description_length} characters will be truncated in search results"),
                "Trim the description to 160 characters or fewer",
            )
            .time_estimate("2 min"),
        );
    }

    if !(has_og_title && has_og_description && has_og_image) {
        findings.push(
            Finding::new(
                Category::Meta,
                Severity::High,
                "Missing Open Graph tags",
                "Shares on social platforms render without a title, description, or preview image",
                "Add og:title, og:description, and og:image meta tags",
            )
            .location("<head>")
            .time_estimate("5 min"),
        );
    }

    if !has_twitter_card {
        findings.push(
            Finding::new(
                Category::Meta,
                Severity::Low,
                "Missing Twitter card tags",
                "Shares on X/Twitter fall back to a bare link",
                r#"Add <meta name="twitter:card" content="summary_large_image">"#,
            )
            .time_estimate("2 min"),
        );
    }

    if !has_canonical {
        findings.push(
            Finding::new(
                Category::Meta,
                Severity::Low,
                "Missing canonical URL",
                "Duplicate URLs (tracking parameters, trailing slashes) can split ranking signals",
                r#"Add <link rel="canonical" href="..."> pointing at the preferred URL"#,
            )
            .time_estimate("2 min"),
        );
    }

    if !has_viewport {
        findings.push(
            Finding::new(
                Category::Meta,
                Severity::Medium,
                "Missing viewport meta tag",
                "Mobile browsers render the page zoomed out; mobile ranking suffers",
                r#"Add <meta name="viewport" content="width=device-width, initial-scale=1">"#,
            )
            .time_estimate("2 min"),
        );
    }

    if !has_favicon {
        findings.push(
            Finding::new(
                Category::Meta,
                Severity::Low,
                "Missing favicon",
                "Browser tabs and bookmarks show a generic icon",
                r#"Add <link rel="icon" href="/favicon.ico">"#,
            )
            .time_estimate("15 min"),
        );
    }

    MetaFacts {
        has_title,
        title,
        title_length,
        has_meta_description,
        description_length,
        has_og_title,
        has_og_description,
        has_og_image,
        has_twitter_card,
        has_canonical,
        has_viewport,
        has_favicon,
        findings,
    }
}
