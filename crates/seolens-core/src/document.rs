//! Read-only view over a parsed HTML document
//!
//! All queries are total: a malformed selector or absent element resolves
//! to an empty default instead of an error, so checkers never fail on
//! partial or broken markup.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document. Never mutated after construction.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse an HTML string. scraper's parser is error-recovering, so this
    /// always succeeds, even on badly broken markup.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Whether at least one element matches the selector.
    pub fn exists(&self, selector: &str) -> bool {
        match Selector::parse(selector) {
            Ok(sel) => self.html.select(&sel).next().is_some(),
            Err(_) => false,
        }
    }

    /// Number of elements matching the selector.
    pub fn count(&self, selector: &str) -> usize {
        match Selector::parse(selector) {
            Ok(sel) => self.html.select(&sel).count(),
            Err(_) => 0,
        }
    }

    /// All elements matching the selector, in document order.
    pub fn elements(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(sel) => self.html.select(&sel).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Trimmed text content of the first matching element.
    pub fn first_text(&self, selector: &str) -> Option<String> {
        self.elements(selector).first().map(|el| {
            el.text().collect::<String>().trim().to_string()
        })
    }

    /// Attribute value of the first matching element.
    pub fn first_attr(&self, selector: &str, attr: &str) -> Option<String> {
        self.elements(selector)
            .first()
            .and_then(|el| el.value().attr(attr))
            .map(|v| v.trim().to_string())
    }

    /// Content of a `<meta name="...">` tag.
    pub fn meta_content(&self, name: &str) -> Option<String> {
        self.first_attr(&format!(r#"meta[name="{name}"]"#), "content")
            .filter(|v| !v.is_empty())
    }

    /// Content of a `<meta property="...">` tag (Open Graph style).
    pub fn meta_property(&self, property: &str) -> Option<String> {
        self.first_attr(&format!(r#"meta[property="{property}"]"#), "content")
            .filter(|v| !v.is_empty())
    }

    /// Visible body text, whitespace-normalized. Script and style contents
    /// are excluded by selecting only body text nodes outside them.
    pub fn body_text(&self) -> String {
        let body = match Selector::parse("body") {
            Ok(sel) => sel,
            Err(_) => return String::new(),
        };
        let Some(body_el) = self.html.select(&body).next() else {
            return String::new();
        };

        let skip = ["script", "style", "noscript", "template"];
        let mut out = String::new();
        collect_text(body_el, &skip, &mut out);
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

fn collect_text(el: ElementRef<'_>, skip: &[&str], out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if !skip.contains(&child_el.value().name()) {
                collect_text(child_el, skip, out);
            }
        }
    }
}
