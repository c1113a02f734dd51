//! Business context: the flat record the schema builder draws from

use serde::{Deserialize, Serialize};

/// Everything known about the business behind a page. All fields are
/// optional in practice: empty strings and empty lists simply produce
/// smaller JSON-LD objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessContext {
    pub business_name: String,
    pub description: String,
    pub url: String,
    pub telephone: String,
    pub email: String,
    pub image: String,
    pub logo: String,
    pub price_range: String,
    /// Combined free-text postal address, e.g. "123 Main St, Springfield, IL 62704".
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Compact opening-hours string, e.g. "Mon-Fri 9am-5pm, Sat 10am-2pm".
    pub hours: String,
    pub rating_value: Option<f64>,
    pub rating_count: Option<u32>,
    pub same_as: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub services: Vec<ServiceItem>,
    pub menu_items: Vec<MenuItem>,
    pub products: Vec<ProductItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub author: String,
    pub text: String,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceItem {
    pub name: String,
    pub description: String,
    pub price: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductItem {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl BusinessContext {
    /// Value for a registry property name, if the context carries one.
    /// Empty values resolve to `None` and are skipped by the builder.
    pub fn field_value(&self, property: &str) -> Option<serde_json::Value> {
        let text = |s: &str| {
            if s.trim().is_empty() {
                None
            } else {
                Some(serde_json::Value::String(s.trim().to_string()))
            }
        };
        match property {
            "name" => text(&self.business_name),
            "description" => text(&self.description),
            "url" => text(&self.url),
            "telephone" => text(&self.telephone),
            "email" => text(&self.email),
            "image" => text(&self.image),
            "logo" => text(&self.logo),
            "priceRange" => text(&self.price_range),
            "sameAs" => {
                let links: Vec<serde_json::Value> = self
                    .same_as
                    .iter()
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| serde_json::Value::String(s.clone()))
                    .collect();
                if links.is_empty() {
                    None
                } else {
                    Some(serde_json::Value::Array(links))
                }
            }
            _ => None,
        }
    }
}
