//! Test helper factories
//!
//! Builders for raw bindings and SPARQL responses with the canonical
//! place-property set filled in.
#![allow(dead_code)]

use crate::places::categories::PLACE_PROPERTIES;
use crate::wikidata::models::{BindingValue, RawBinding, SparqlResponse, SparqlResults};

/// A raw binding carrying every canonical place property (empty literals),
/// with item, instance URLs, and coordinates overridden.
pub fn place_binding(item: &str, instance_urls: &str, coordinates: &str) -> RawBinding {
    let mut binding = RawBinding::new();
    for property in PLACE_PROPERTIES {
        binding.insert((*property).to_string(), BindingValue::literal(""));
    }
    binding.insert("item".into(), BindingValue::uri(item));
    binding.insert("instanceUrls".into(), BindingValue::literal(instance_urls));
    binding.insert("coordinates".into(), BindingValue::literal(coordinates));
    binding
}

/// A response wrapping the given bindings.
pub fn response_with(bindings: Vec<RawBinding>) -> SparqlResponse {
    SparqlResponse {
        head: Default::default(),
        results: SparqlResults { bindings },
    }
}
