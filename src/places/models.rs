//! Domain models for normalized places

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category name → places matched to it, covering every configured
/// category even when its sequence is empty. `BTreeMap` keeps the key order
/// stable for serialization.
pub type GroupedPlaces = BTreeMap<String, Vec<Place>>;

/// One coordinate pair, kept as the decimal-degree strings the endpoint
/// returned. No rounding, no numeric parsing — the map frontend consumes
/// them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LatLng {
    pub lat: String,
    pub lng: String,
}

impl LatLng {
    pub fn new(lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }
}

/// A place record flattened out of the SPARQL wrapper objects.
///
/// Field set matches the canonical place-property list exactly; all values
/// are plain strings except `coordinates`, which is always a non-empty
/// sequence — a single-point place still carries a one-element vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub item: String,
    pub item_label: String,
    pub item_description: String,
    pub instance_urls: String,
    pub instance_labels: String,
    pub coordinates: Vec<LatLng>,
    pub image_url: String,
    pub source: String,
    pub source_author_labels: String,
    pub source_label: String,
    pub source_publisher_city_label: String,
    pub source_publisher_label: String,
    pub source_publication_year: String,
    pub source_pages: String,
    pub source_dnb_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_serializes_with_camel_case_keys() {
        let place = Place {
            item: "http://www.wikidata.org/entity/Q1".into(),
            item_label: "Example".into(),
            item_description: String::new(),
            instance_urls: "http://www.wikidata.org/entity/Q40357".into(),
            instance_labels: "prison".into(),
            coordinates: vec![LatLng::new("52.1", "9.2")],
            image_url: String::new(),
            source: String::new(),
            source_author_labels: String::new(),
            source_label: String::new(),
            source_publisher_city_label: String::new(),
            source_publisher_label: String::new(),
            source_publication_year: String::new(),
            source_pages: String::new(),
            source_dnb_link: String::new(),
        };

        let json = serde_json::to_value(&place).unwrap();
        assert_eq!(json["itemLabel"], "Example");
        assert_eq!(json["instanceUrls"], "http://www.wikidata.org/entity/Q40357");
        assert_eq!(json["sourceDnbLink"], "");
        assert_eq!(json["coordinates"][0]["lat"], "52.1");
        assert_eq!(json["coordinates"][0]["lng"], "9.2");
    }
}
