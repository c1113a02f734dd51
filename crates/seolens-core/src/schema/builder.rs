//! JSON-LD assembly
//!
//! Builds the structured-data objects for a page from a matched type and a
//! business context. Pure template resolution: the flat step copies context
//! fields whose names match inherited registry properties, then the nested
//! layers add what a flat copy cannot express (address, geo, hours, rating,
//! reviews) plus category-gated extras.

use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};

use super::address::parse_address;
use super::context::BusinessContext;
use super::hours::parse_hours;
use super::registry::TypeRegistry;
use crate::types::PageContext;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// The structured-data set for one page, ready to be injected into
/// `<script type="application/ld+json">` elements.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSchemaResult {
    pub primary: JsonValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<JsonValue>,
    pub reviews: Vec<JsonValue>,
    pub additional: Vec<JsonValue>,
    pub all: Vec<JsonValue>,
}

/// Build the full schema set for a page.
pub fn build_page_schema(
    registry: &TypeRegistry,
    type_name: &str,
    ctx: &BusinessContext,
    page: &PageContext,
) -> PageSchemaResult {
    let primary = build_primary(registry, type_name, ctx);
    let breadcrumb = build_breadcrumb(ctx, page);
    let reviews = build_reviews(ctx);
    let additional = build_additional(registry, type_name, ctx, page);

    let mut all = vec![primary.clone()];
    all.extend(breadcrumb.iter().cloned());
    all.extend(reviews.iter().cloned());
    all.extend(additional.iter().cloned());

    PageSchemaResult {
        primary,
        breadcrumb,
        reviews,
        additional,
        all,
    }
}

/// Flat copy plus nested layers for the matched type.
fn build_primary(registry: &TypeRegistry, type_name: &str, ctx: &BusinessContext) -> JsonValue {
    let mut obj = Map::new();
    obj.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
    obj.insert("@type".to_string(), json!(type_name));

    // Flat step: context fields matching inherited property names, empty
    // values skipped.
    for prop in registry.inherited_properties(type_name) {
        if let Some(value) = ctx.field_value(prop.name) {
            obj.insert(prop.name.to_string(), value);
        }
    }

    // Nested layers.
    if !ctx.address.trim().is_empty() {
        let address = parse_address(&ctx.address);
        if !address.is_empty() {
            let mut nested = serde_json::to_value(&address)
                .unwrap_or(JsonValue::Null)
                .as_object()
                .cloned()
                .unwrap_or_default();
            nested.retain(|_, v| v.as_str().map(|s| !s.is_empty()).unwrap_or(true));
            nested.insert("@type".to_string(), json!("PostalAddress"));
            obj.insert("address".to_string(), JsonValue::Object(nested));
        }
    }

    if let (Some(latitude), Some(longitude)) = (ctx.latitude, ctx.longitude) {
        obj.insert(
            "geo".to_string(),
            json!({
                "@type": "GeoCoordinates",
                "latitude": latitude,
                "longitude": longitude,
            }),
        );
    }

    if !ctx.hours.trim().is_empty() {
        let specs: Vec<JsonValue> = parse_hours(&ctx.hours)
            .into_iter()
            .map(|spec| {
                json!({
                    "@type": "OpeningHoursSpecification",
                    "dayOfWeek": spec.days,
                    "opens": spec.opens,
                    "closes": spec.closes,
                })
            })
            .collect();
        obj.insert("openingHoursSpecification".to_string(), JsonValue::Array(specs));
    }

    if let Some(rating_value) = ctx.rating_value {
        let mut rating = Map::new();
        rating.insert("@type".to_string(), json!("AggregateRating"));
        rating.insert("ratingValue".to_string(), json!(rating_value));
        if let Some(count) = ctx.rating_count {
            rating.insert("reviewCount".to_string(), json!(count));
        }
        obj.insert("aggregateRating".to_string(), JsonValue::Object(rating));
    }

    JsonValue::Object(obj)
}

fn build_breadcrumb(ctx: &BusinessContext, page: &PageContext) -> Option<JsonValue> {
    let page_name = page.page_name.as_deref()?.trim();
    if page_name.is_empty() || page_name.eq_ignore_ascii_case("home") {
        return None;
    }
    let base = ctx.url.trim_end_matches('/');
    let slug = page_name.to_lowercase().replace(' ', "-");
    Some(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": [
            {
                "@type": "ListItem",
                "position": 1,
                "name": "Home",
                "item": if base.is_empty() { "/".to_string() } else { format!("{base}/") },
            },
            {
                "@type": "ListItem",
                "position": 2,
                "name": page_name,
                "item": if base.is_empty() { format!("/{slug}") } else { format!("{base}/{slug}") },
            }
        ]
    }))
}

fn build_reviews(ctx: &BusinessContext) -> Vec<JsonValue> {
    ctx.testimonials
        .iter()
        .filter(|t| !t.text.trim().is_empty())
        .map(|t| {
            let mut review = Map::new();
            review.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
            review.insert("@type".to_string(), json!("Review"));
            review.insert("reviewBody".to_string(), json!(t.text.trim()));
            if !t.author.trim().is_empty() {
                review.insert(
                    "author".to_string(),
                    json!({ "@type": "Person", "name": t.author.trim() }),
                );
            }
            if let Some(rating) = t.rating {
                review.insert(
                    "reviewRating".to_string(),
                    json!({ "@type": "Rating", "ratingValue": rating }),
                );
            }
            if !ctx.business_name.trim().is_empty() {
                review.insert(
                    "itemReviewed".to_string(),
                    json!({ "@type": "LocalBusiness", "name": ctx.business_name.trim() }),
                );
            }
            JsonValue::Object(review)
        })
        .collect()
}

/// Category-gated extras: Menu/Reservation for food establishments on the
/// matching page names, Product for stores, Service for professional
/// services, SoftwareApplication for software types.
fn build_additional(
    registry: &TypeRegistry,
    type_name: &str,
    ctx: &BusinessContext,
    page: &PageContext,
) -> Vec<JsonValue> {
    let mut extras = Vec::new();
    let descends = |ancestor: &str| {
        type_name == ancestor || registry.is_descendant_of(type_name, ancestor)
    };
    let page_name = page
        .page_name
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    if descends("FoodEstablishment") {
        if page_name == "menu" && !ctx.menu_items.is_empty() {
            let items: Vec<JsonValue> = ctx
                .menu_items
                .iter()
                .filter(|item| !item.name.trim().is_empty())
                .map(|item| {
                    let mut menu_item = Map::new();
                    menu_item.insert("@type".to_string(), json!("MenuItem"));
                    menu_item.insert("name".to_string(), json!(item.name.trim()));
                    if !item.description.trim().is_empty() {
                        menu_item.insert("description".to_string(), json!(item.description.trim()));
                    }
                    if !item.price.trim().is_empty() {
                        menu_item.insert(
                            "offers".to_string(),
                            json!({ "@type": "Offer", "price": item.price.trim() }),
                        );
                    }
                    JsonValue::Object(menu_item)
                })
                .collect();
            extras.push(json!({
                "@context": SCHEMA_CONTEXT,
                "@type": "Menu",
                "name": format!("{} Menu", ctx.business_name.trim()),
                "hasMenuItem": items,
            }));
        }
        if matches!(page_name.as_str(), "reservations" | "book" | "booking") {
            extras.push(json!({
                "@context": SCHEMA_CONTEXT,
                "@type": "FoodEstablishmentReservation",
                "provider": { "@type": type_name, "name": ctx.business_name.trim() },
            }));
        }
    }

    if descends("Store") {
        for product in ctx.products.iter().filter(|p| !p.name.trim().is_empty()) {
            let mut obj = Map::new();
            obj.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
            obj.insert("@type".to_string(), json!("Product"));
            obj.insert("name".to_string(), json!(product.name.trim()));
            if !product.description.trim().is_empty() {
                obj.insert("description".to_string(), json!(product.description.trim()));
            }
            if !product.image.trim().is_empty() {
                obj.insert("image".to_string(), json!(product.image.trim()));
            }
            if !product.price.trim().is_empty() {
                obj.insert(
                    "offers".to_string(),
                    json!({ "@type": "Offer", "price": product.price.trim() }),
                );
            }
            extras.push(JsonValue::Object(obj));
        }
    }

    let professional = descends("ProfessionalService")
        || descends("LegalService")
        || descends("FinancialService")
        || descends("HomeAndConstructionBusiness")
        || descends("MedicalBusiness");
    if professional {
        for service in ctx.services.iter().filter(|s| !s.name.trim().is_empty()) {
            let mut obj = Map::new();
            obj.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
            obj.insert("@type".to_string(), json!("Service"));
            obj.insert("serviceType".to_string(), json!(service.name.trim()));
            if !service.description.trim().is_empty() {
                obj.insert("description".to_string(), json!(service.description.trim()));
            }
            if !ctx.business_name.trim().is_empty() {
                obj.insert(
                    "provider".to_string(),
                    json!({ "@type": type_name, "name": ctx.business_name.trim() }),
                );
            }
            extras.push(JsonValue::Object(obj));
        }
    }

    if descends("SoftwareApplication") {
        let mut obj = Map::new();
        obj.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
        obj.insert("@type".to_string(), json!("SoftwareApplication"));
        if !ctx.business_name.trim().is_empty() {
            obj.insert("name".to_string(), json!(ctx.business_name.trim()));
        }
        obj.insert("applicationCategory".to_string(), json!("BusinessApplication"));
        if !ctx.url.trim().is_empty() {
            obj.insert("url".to_string(), json!(ctx.url.trim()));
        }
        extras.push(JsonValue::Object(obj));
    }

    extras
}
