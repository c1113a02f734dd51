//! Scoring: per-category point tables, weighted overall score, grades
//!
//! Every category table sums to exactly 100 at full credit. The breakdown
//! items exist for report explainability; the score is the sum of the
//! earned column.

use crate::audit::content::{ContentDepth, ContentFacts};
use crate::audit::headings::HeadingFacts;
use crate::audit::images::ImageFacts;
use crate::audit::links::LinkFacts;
use crate::audit::llm::LlmFacts;
use crate::audit::meta::MetaFacts;
use crate::audit::schema_markup::SchemaFacts;
use crate::audit::semantic::SemanticFacts;
use crate::audit::PageFacts;
use crate::types::{Category, CategoryBreakdowns, CategoryScores, ScoreBreakdownItem};

/// A grading profile: category weights, grade ladder, and status labels.
///
/// The full report and the lightweight page audit use different ladders by
/// design (cheap preview vs. full report); they must stay independently
/// configurable and must not be unified.
pub struct ScoringProfile {
    pub name: &'static str,
    /// Weights over the scored categories. Must sum to 1.0.
    pub weights: &'static [(Category, f64)],
    /// Minimum score for each grade, highest first.
    pub grade_ladder: &'static [(u32, &'static str)],
}

/// Profile for the full audit report.
pub const FULL_REPORT: ScoringProfile = ScoringProfile {
    name: "full-report",
    weights: &[
        (Category::Meta, 0.20),
        (Category::Headings, 0.12),
        (Category::Schema, 0.15),
        (Category::Semantic, 0.10),
        (Category::Images, 0.10),
        (Category::Links, 0.08),
        (Category::Content, 0.25),
    ],
    grade_ladder: &[
        (90, "A+"),
        (80, "A"),
        (70, "B"),
        (60, "C"),
        (50, "D"),
        (0, "F"),
    ],
};

/// Profile for the lightweight page audit (preview).
pub const PAGE_AUDIT: ScoringProfile = ScoringProfile {
    name: "page-audit",
    weights: FULL_REPORT.weights,
    grade_ladder: &[(90, "A"), (80, "B"), (70, "C"), (60, "D"), (0, "F")],
};

impl ScoringProfile {
    pub fn grade(&self, score: u32) -> &'static str {
        self.grade_ladder
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or("F")
    }

    /// Weighted overall score, rounded to the nearest integer.
    pub fn overall(&self, scores: &CategoryScores) -> u32 {
        let weighted: f64 = self
            .weights
            .iter()
            .map(|(category, weight)| {
                let score = match category {
                    Category::Meta => scores.meta,
                    Category::Headings => scores.headings,
                    Category::Schema => scores.schema,
                    Category::Semantic => scores.semantic,
                    Category::Images => scores.images,
                    Category::Links => scores.links,
                    Category::Content => scores.content,
                    Category::LlmReadability => scores.llm_readability,
                };
                score as f64 * weight
            })
            .sum();
        (weighted.round() as u32).min(100)
    }
}

/// Status label shown next to the overall score.
pub fn status_label(score: u32) -> &'static str {
    match score {
        90.. => "excellent",
        70..=89 => "good",
        50..=69 => "needs improvement",
        _ => "poor",
    }
}

fn item(label: &str, points: u32, earned: bool) -> ScoreBreakdownItem {
    ScoreBreakdownItem::new(label, points, if earned { points } else { 0 })
}

fn total(items: &[ScoreBreakdownItem]) -> u32 {
    items.iter().map(|i| i.earned).sum()
}

/// Meta table: 15+10+15+10+20+5+5+10+10 = 100.
pub fn score_meta(facts: &MetaFacts) -> (u32, Vec<ScoreBreakdownItem>) {
    let items = vec![
        item("Page title present", 15, facts.has_title),
        item("Title length 30-60 characters", 10, facts.title_length_good()),
        item("Meta description present", 15, facts.has_meta_description),
        item(
            "Description length 120-160 characters",
            10,
            facts.description_length_good(),
        ),
        item("Open Graph tags", 20, facts.has_open_graph()),
        item("Twitter card", 5, facts.has_twitter_card),
        item("Favicon", 5, facts.has_favicon),
        item("Canonical URL", 10, facts.has_canonical),
        item("Viewport meta tag", 10, facts.has_viewport),
    ];
    (total(&items), items)
}

/// Headings table: 25+15+10+25+15+10 = 100.
pub fn score_headings(facts: &HeadingFacts) -> (u32, Vec<ScoreBreakdownItem>) {
    let items = vec![
        item("H1 present", 25, facts.h1_count >= 1),
        item("Exactly one H1", 15, facts.has_single_h1()),
        item("H1 length 20-70 characters", 10, facts.h1_length_good()),
        item("No skipped heading levels", 25, facts.proper_hierarchy),
        item("H2 subheadings present", 15, facts.has_h2),
        item("Headings are descriptive", 10, facts.descriptive_headings),
    ];
    (total(&items), items)
}

/// Schema table: 10 base + 40+15+15+20 = 100. The base credit is the floor
/// a page keeps even with no structured data at all.
pub fn score_schema(facts: &SchemaFacts) -> (u32, Vec<ScoreBreakdownItem>) {
    let items = vec![
        item("Baseline", 10, true),
        item("JSON-LD structured data present", 40, facts.has_structured_data),
        item(
            "Structured data parses cleanly",
            15,
            facts.has_structured_data && facts.validation_issue_count == 0,
        ),
        item(
            "Organization or LocalBusiness schema",
            15,
            facts.has_organization_schema,
        ),
        item(
            "Page-type-relevant schema",
            20,
            facts.has_structured_data && facts.has_page_relevant_schema,
        ),
    ];
    (total(&items), items)
}

/// Semantic table: 20+15+15+15+10+15+10 = 100.
pub fn score_semantic(facts: &SemanticFacts) -> (u32, Vec<ScoreBreakdownItem>) {
    let items = vec![
        item("Main landmark", 20, facts.has_main),
        item("Navigation landmark", 15, facts.has_navigation),
        item("Header landmark", 15, facts.has_header),
        item("Footer landmark", 15, facts.has_footer),
        item("Content sectioning elements", 10, facts.uses_content_sectioning()),
        item("Language attribute", 15, facts.has_lang),
        item("ARIA labels in use", 10, facts.aria_label_count > 0),
    ];
    (total(&items), items)
}

/// Images: 70 x alt-text fraction + 30 x lazy-loading fraction over eligible
/// images (everything past the first). A page with no images scores 100.
pub fn score_images(facts: &ImageFacts) -> (u32, Vec<ScoreBreakdownItem>) {
    if facts.total_images == 0 {
        let items = vec![
            ScoreBreakdownItem::new("Alt text coverage", 70, 70).detail("no images on page"),
            ScoreBreakdownItem::new("Lazy loading coverage", 30, 30).detail("no images on page"),
        ];
        return (100, items);
    }

    let alt_fraction = facts.images_with_alt as f64 / facts.total_images as f64;
    let lazy_fraction = if facts.eligible_for_lazy == 0 {
        1.0
    } else {
        facts.lazy_loaded as f64 / facts.eligible_for_lazy as f64
    };

    let alt_earned = (70.0 * alt_fraction).round() as u32;
    let lazy_earned = (30.0 * lazy_fraction).round() as u32;

    let items = vec![
        ScoreBreakdownItem::new("Alt text coverage", 70, alt_earned).detail(format!(
            "{}/{} images",
            facts.images_with_alt, facts.total_images
        )),
        ScoreBreakdownItem::new("Lazy loading coverage", 30, lazy_earned).detail(format!(
            "{}/{} eligible images",
            facts.lazy_loaded, facts.eligible_for_lazy
        )),
    ];
    ((alt_earned + lazy_earned).min(100), items)
}

/// Links table: 20 base + 30 + 15 + 20 + 5 + 10 = 100.
pub fn score_links(facts: &LinkFacts) -> (u32, Vec<ScoreBreakdownItem>) {
    let items = vec![
        item("Baseline", 20, true),
        item("At least 3 internal links", 30, facts.internal_links >= 3),
        item("At least 2 external links", 15, facts.external_links >= 2),
        item("No generic anchor text", 20, facts.generic_text_links == 0),
        item("New-tab links carry noopener", 5, facts.noopener_parity()),
        item("At least 5 links total", 10, facts.total_links >= 5),
    ];
    (total(&items), items)
}

/// Content table: 25+15+20+15+25 = 100.
pub fn score_content(facts: &ContentFacts) -> (u32, Vec<ScoreBreakdownItem>) {
    let items = vec![
        item("At least 300 words", 25, facts.word_count >= 300),
        item("At least 500 words", 15, facts.word_count >= 500),
        item("At least 5 paragraphs", 20, facts.paragraph_count >= 5),
        item("Uses lists", 15, facts.has_list),
        item(
            "Comprehensive content depth",
            25,
            facts.depth == ContentDepth::Comprehensive,
        ),
    ];
    (total(&items), items)
}

/// LLM readability table: 30+20+20+15+15 = 100. Advisory: zero weight in
/// the overall score.
pub fn score_llm(facts: &LlmFacts) -> (u32, Vec<ScoreBreakdownItem>) {
    let items = vec![
        item("Content extractable as text", 30, facts.extractable_ratio >= 0.05),
        item("Summary paragraph", 20, facts.has_summary_paragraph),
        item("Clear heading outline", 20, facts.has_heading_outline),
        item("Lists or tables", 15, facts.has_lists_or_tables),
        item("Structured data present", 15, facts.has_structured_data),
    ];
    (total(&items), items)
}

/// Score every category of one page's facts.
pub fn score_all(facts: &PageFacts) -> (CategoryScores, CategoryBreakdowns) {
    let (meta, meta_items) = score_meta(&facts.meta);
    let (headings, heading_items) = score_headings(&facts.headings);
    let (schema, schema_items) = score_schema(&facts.schema);
    let (semantic, semantic_items) = score_semantic(&facts.semantic);
    let (images, image_items) = score_images(&facts.images);
    let (links, link_items) = score_links(&facts.links);
    let (content, content_items) = score_content(&facts.content);
    let (llm_readability, llm_items) = score_llm(&facts.llm);

    (
        CategoryScores {
            meta,
            headings,
            schema,
            semantic,
            images,
            links,
            content,
            llm_readability,
        },
        CategoryBreakdowns {
            meta: meta_items,
            headings: heading_items,
            schema: schema_items,
            semantic: semantic_items,
            images: image_items,
            links: link_items,
            content: content_items,
            llm_readability: llm_items,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::check_all;
    use crate::document::Document;
    use crate::types::PageContext;

    fn facts_for(html: &str) -> PageFacts {
        check_all(html, &Document::parse(html), &PageContext::default())
    }

    #[test]
    fn weights_sum_to_one() {
        let sum: f64 = FULL_REPORT.weights.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}");
    }

    #[test]
    fn point_tables_sum_to_100_at_full_credit() {
        // An empty page earns the floor; the table maxima must still be 100.
        let facts = facts_for("");
        let tables: Vec<Vec<ScoreBreakdownItem>> = vec![
            score_meta(&facts.meta).1,
            score_headings(&facts.headings).1,
            score_schema(&facts.schema).1,
            score_semantic(&facts.semantic).1,
            score_images(&facts.images).1,
            score_links(&facts.links).1,
            score_content(&facts.content).1,
            score_llm(&facts.llm).1,
        ];
        for table in tables {
            let max: u32 = table.iter().map(|i| i.points).sum();
            assert_eq!(max, 100, "table {:?}", table);
        }
    }

    #[test]
    fn schema_floor_credit_without_structured_data() {
        let facts = facts_for("<body><p>nothing</p></body>");
        let (score, _) = score_schema(&facts.schema);
        assert_eq!(score, 10);
    }

    #[test]
    fn images_score_100_with_zero_images() {
        let facts = facts_for("<body>text</body>");
        let (score, _) = score_images(&facts.images);
        assert_eq!(score, 100);
    }

    #[test]
    fn images_fractional_credit() {
        let html = r#"<body>
            <img src="a" alt="a">
            <img src="b" alt="b" loading="lazy">
            <img src="c">
            <img src="d" alt="" loading="lazy">
        </body>"#;
        let facts = facts_for(html);
        // 3/4 have alt (empty alt credited), 2/3 eligible are lazy.
        let (score, _) = score_images(&facts.images);
        let expected = (70.0_f64 * 0.75).round() as u32 + (30.0_f64 * (2.0 / 3.0)).round() as u32;
        assert_eq!(score, expected);
    }

    #[test]
    fn single_image_gets_full_lazy_credit() {
        let facts = facts_for(r#"<body><img src="hero" alt="hero"></body>"#);
        let (score, _) = score_images(&facts.images);
        assert_eq!(score, 100);
    }

    #[test]
    fn grade_ladders_are_monotonic_and_distinct() {
        for profile in [&FULL_REPORT, &PAGE_AUDIT] {
            let mut last_min = u32::MAX;
            for (min, _) in profile.grade_ladder {
                assert!(*min < last_min, "{} ladder not descending", profile.name);
                last_min = *min;
            }
        }
        // The two ladders intentionally differ.
        assert_eq!(FULL_REPORT.grade(92), "A+");
        assert_eq!(PAGE_AUDIT.grade(92), "A");
        assert_eq!(FULL_REPORT.grade(55), "D");
        assert_eq!(PAGE_AUDIT.grade(55), "F");
    }

    #[test]
    fn overall_is_weighted_and_bounded() {
        let scores = CategoryScores {
            meta: 100,
            headings: 100,
            schema: 100,
            semantic: 100,
            images: 100,
            links: 100,
            content: 100,
            llm_readability: 0, // zero weight, must not matter
        };
        assert_eq!(FULL_REPORT.overall(&scores), 100);

        let scores = CategoryScores {
            meta: 0,
            headings: 0,
            schema: 0,
            semantic: 0,
            images: 0,
            links: 0,
            content: 0,
            llm_readability: 100,
        };
        assert_eq!(FULL_REPORT.overall(&scores), 0);
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(95), "excellent");
        assert_eq!(status_label(75), "good");
        assert_eq!(status_label(55), "needs improvement");
        assert_eq!(status_label(20), "poor");
    }
}
