//! Flattening of raw SPARQL bindings into [`Place`] records
//!
//! Two pure steps per binding: project every wrapper object down to its
//! `value` field, and parse the pipe-separated multi-point coordinate
//! string into an ordered `LatLng` sequence.

use super::models::{LatLng, Place};
use crate::wikidata::models::RawBinding;
use thiserror::Error;

/// Failure while flattening a binding. A missing property is a caller
/// error — the binding did not carry the canonical place-property set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceError {
    #[error("binding is missing the '{0}' property")]
    MissingProperty(&'static str),

    #[error("coordinate segment '{0}' is not a 'lat,lng' pair")]
    MalformedCoordinate(String),
}

/// Extract the plain `value` of one property, discarding the wrapper
/// metadata (`type`, language tag, datatype).
fn project<'a>(binding: &'a RawBinding, property: &'static str) -> Result<&'a str, PlaceError> {
    binding
        .get(property)
        .map(|wrapper| wrapper.value.as_str())
        .ok_or(PlaceError::MissingProperty(property))
}

/// Parse a coordinate value of one or more `lat,lng` pairs separated by a
/// pipe (multi-point geometries: buildings with disjoint structures, or
/// locations recorded at multiple times).
///
/// The lat/lng components stay strings; a single pair still yields a
/// one-element vector.
pub fn parse_coordinates(raw: &str) -> Result<Vec<LatLng>, PlaceError> {
    raw.split('|')
        .map(|pair| {
            let (lat, lng) = pair
                .split_once(',')
                .ok_or_else(|| PlaceError::MalformedCoordinate(pair.to_string()))?;
            Ok(LatLng::new(lat, lng))
        })
        .collect()
}

/// Flatten one raw binding into a [`Place`].
///
/// Expects exactly the canonical place-property set; any missing key is
/// reported as [`PlaceError::MissingProperty`].
pub fn normalize_place(binding: &RawBinding) -> Result<Place, PlaceError> {
    Ok(Place {
        item: project(binding, "item")?.to_owned(),
        item_label: project(binding, "itemLabel")?.to_owned(),
        item_description: project(binding, "itemDescription")?.to_owned(),
        instance_urls: project(binding, "instanceUrls")?.to_owned(),
        instance_labels: project(binding, "instanceLabels")?.to_owned(),
        coordinates: parse_coordinates(project(binding, "coordinates")?)?,
        image_url: project(binding, "imageUrl")?.to_owned(),
        source: project(binding, "source")?.to_owned(),
        source_author_labels: project(binding, "sourceAuthorLabels")?.to_owned(),
        source_label: project(binding, "sourceLabel")?.to_owned(),
        source_publisher_city_label: project(binding, "sourcePublisherCityLabel")?.to_owned(),
        source_publisher_label: project(binding, "sourcePublisherLabel")?.to_owned(),
        source_publication_year: project(binding, "sourcePublicationYear")?.to_owned(),
        source_pages: project(binding, "sourcePages")?.to_owned(),
        source_dnb_link: project(binding, "sourceDnbLink")?.to_owned(),
    })
}
