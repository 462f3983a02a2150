//! Multi-label assignment of places to map-marker categories

use super::categories::{ENTITY_URI_PREFIX, PLACE_CATEGORIES};
use super::models::GroupedPlaces;
use super::normalize::{normalize_place, PlaceError};
use crate::wikidata::models::RawBinding;
use std::collections::HashSet;

/// Assigns normalized places to marker categories by intersecting their
/// "instance of" Q-ids against each category's configured set.
///
/// The table is injected at construction so tests can substitute their own;
/// [`PlaceClassifier::default`] uses [`PLACE_CATEGORIES`].
pub struct PlaceClassifier {
    categories: &'static [(&'static str, &'static [&'static str])],
}

impl Default for PlaceClassifier {
    fn default() -> Self {
        Self::new(PLACE_CATEGORIES)
    }
}

impl PlaceClassifier {
    /// Classifier over an explicit category table.
    pub fn new(categories: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { categories }
    }

    /// Normalize each binding and append it to every category whose Q-id set
    /// intersects the place's instances.
    ///
    /// Multi-membership is deliberate: a place whose instances hit two
    /// categories lands in both sequences. A place matching no category is
    /// logged at warn level and dropped from the output. The returned map
    /// always covers every configured category name, preserving query-result
    /// order within each sequence.
    pub fn classify(&self, bindings: &[RawBinding]) -> Result<GroupedPlaces, PlaceError> {
        let mut grouped: GroupedPlaces = self
            .categories
            .iter()
            .map(|(name, _)| ((*name).to_string(), Vec::new()))
            .collect();

        for binding in bindings {
            let place = normalize_place(binding)?;

            let instance_qids: HashSet<&str> = place
                .instance_urls
                .split('|')
                .map(|url| url.trim_start_matches(ENTITY_URI_PREFIX))
                .collect();

            let mut found_category = false;

            for (name, qids) in self.categories {
                if qids.iter().any(|qid| instance_qids.contains(qid)) {
                    if let Some(members) = grouped.get_mut(*name) {
                        members.push(place.clone());
                    }
                    found_category = true;
                }
            }

            if !found_category {
                tracing::warn!(
                    instance_qids = %place.instance_urls,
                    place_qid = %place.item,
                    "The location cannot be assigned to a map marker category based on its Wikidata instances"
                );
            }
        }

        Ok(grouped)
    }
}
