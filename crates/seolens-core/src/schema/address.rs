//! Free-text postal address splitting
//!
//! Splits a combined address string into street/locality/region/postal/
//! country parts. Comma positions drive the split; regex fallbacks pull a
//! postal code out of whatever segment carries it. Always returns a
//! (possibly partial) address, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub street_address: String,
    pub address_locality: String,
    pub address_region: String,
    pub postal_code: String,
    pub address_country: String,
}

impl PostalAddress {
    pub fn is_empty(&self) -> bool {
        self.street_address.is_empty()
            && self.address_locality.is_empty()
            && self.address_region.is_empty()
            && self.postal_code.is_empty()
            && self.address_country.is_empty()
    }
}

/// "IL 62704" or "Illinois 62704-1234".
static REGION_POSTAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z .]*?)\s+(\d{4,5}(?:-\d{4})?)$").expect("invalid region regex")
});

/// Standalone postal code anywhere in a segment.
static POSTAL_ANYWHERE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{4,5}(?:-\d{4})?\b").expect("invalid postal regex"));

pub fn parse_address(input: &str) -> PostalAddress {
    let segments: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let mut address = PostalAddress::default();
    match segments.as_slice() {
        [] => {}
        [street] => {
            address.street_address = street.to_string();
        }
        [street, locality] => {
            address.street_address = street.to_string();
            address.address_locality = locality.to_string();
        }
        [street, locality, region, rest @ ..] => {
            address.street_address = street.to_string();
            address.address_locality = locality.to_string();
            if let Some(caps) = REGION_POSTAL.captures(region) {
                address.address_region = caps[1].trim().to_string();
                address.postal_code = caps[2].to_string();
            } else {
                address.address_region = region.to_string();
            }
            if let Some(country) = rest.first() {
                address.address_country = country.to_string();
            }
        }
    }

    // Postal code fallback: take it from wherever it appears.
    if address.postal_code.is_empty() {
        if let Some(m) = POSTAL_ANYWHERE.find(input) {
            address.postal_code = m.as_str().to_string();
        }
    }

    address
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_us_style_address() {
        let address = parse_address("123 Main St, Springfield, IL 62704, USA");
        assert_eq!(address.street_address, "123 Main St");
        assert_eq!(address.address_locality, "Springfield");
        assert_eq!(address.address_region, "IL");
        assert_eq!(address.postal_code, "62704");
        assert_eq!(address.address_country, "USA");
    }

    #[test]
    fn three_segment_address_without_country() {
        let address = parse_address("123 Main St, Springfield, IL 62704");
        assert_eq!(address.address_region, "IL");
        assert_eq!(address.postal_code, "62704");
        assert!(address.address_country.is_empty());
    }

    #[test]
    fn zip_plus_four() {
        let address = parse_address("1 Elm Ave, Dayton, OH 45402-1234");
        assert_eq!(address.postal_code, "45402-1234");
    }

    #[test]
    fn region_without_postal_code() {
        let address = parse_address("5 High St, Oxford, Oxfordshire, UK");
        assert_eq!(address.address_region, "Oxfordshire");
        assert_eq!(address.address_country, "UK");
        assert!(address.postal_code.is_empty());
    }

    #[test]
    fn postal_code_fallback_from_any_segment() {
        let address = parse_address("Dorpsstraat 1 1234 AB, Ons Dorp");
        assert_eq!(address.postal_code, "1234");
        assert_eq!(address.address_locality, "Ons Dorp");
    }

    #[test]
    fn street_only() {
        let address = parse_address("123 Main St");
        assert_eq!(address.street_address, "123 Main St");
        assert!(address.address_locality.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_address() {
        assert!(parse_address("").is_empty());
        assert!(parse_address("  ,  , ").is_empty());
    }
}
