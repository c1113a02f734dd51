//! Schema recommendation pipeline
//!
//! Matches a business description to a schema.org type and assembles the
//! JSON-LD objects for a page. Pure and synchronous: the registry is the
//! only long-lived state, and it is immutable.

pub mod address;
pub mod builder;
pub mod context;
pub mod hours;
pub mod matcher;
pub mod registry;

pub use builder::{build_page_schema, PageSchemaResult};
pub use context::BusinessContext;
pub use matcher::{match_business_type, TypeMatch};
pub use registry::{SchemaTypeDef, TypeRegistry};

use crate::types::PageContext;

/// Match a description and build the page's schema set in one step.
pub fn recommend_schema(
    description: &str,
    ctx: &BusinessContext,
    page: &PageContext,
) -> PageSchemaResult {
    let registry = TypeRegistry::global();
    let matched = match_business_type(registry, description);
    build_page_schema(registry, matched.type_name, ctx, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_matches_and_builds() {
        let ctx = BusinessContext {
            business_name: "Hop Forge Brewing".to_string(),
            address: "123 Main St, Springfield, IL 62704".to_string(),
            ..Default::default()
        };
        let result = recommend_schema("craft brewery downtown", &ctx, &PageContext::default());
        assert_eq!(result.primary["@type"], "Brewery");
        assert_eq!(result.primary["name"], "Hop Forge Brewing");
    }

    #[test]
    fn pipeline_is_total_on_empty_inputs() {
        let result = recommend_schema("", &BusinessContext::default(), &PageContext::default());
        assert_eq!(result.primary["@type"], "LocalBusiness");
        assert!(result.reviews.is_empty());
    }
}
