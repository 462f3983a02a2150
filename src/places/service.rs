//! Pipeline service: query → gateway → normalize → classify

use super::classify::PlaceClassifier;
use super::models::GroupedPlaces;
use crate::wikidata::query::PLACES_QUERY;
use crate::wikidata::traits::SparqlGateway;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Composes the fixed place-discovery query, the SPARQL gateway, and the
/// classifier into the one-call entry point callers use.
///
/// A transport failure surfaces only as an all-empty grouping (plus the
/// gateway's log line); it is not an error here.
pub struct PlacesService {
    gateway: Arc<dyn SparqlGateway>,
    classifier: PlaceClassifier,
}

impl PlacesService {
    /// Service over the given gateway with the default category table.
    pub fn new(gateway: Arc<dyn SparqlGateway>) -> Self {
        Self {
            gateway,
            classifier: PlaceClassifier::default(),
        }
    }

    /// Fetch all places of the incident-location class and group them by
    /// marker category.
    pub async fn query_places(&self) -> Result<GroupedPlaces> {
        let response = self.gateway.execute_query(PLACES_QUERY).await;

        self.classifier
            .classify(response.bindings())
            .context("Failed to classify Wikidata places")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::categories::category_names;
    use crate::test_helpers::{place_binding, response_with};
    use crate::wikidata::mock::MockSparqlGateway;

    #[tokio::test]
    async fn test_query_places_groups_results() {
        let response = response_with(vec![
            place_binding(
                "http://www.wikidata.org/entity/Q1",
                "http://www.wikidata.org/entity/Q40357",
                "52.3667941,9.7448449240635|52.3642957,9.7473133",
            ),
            place_binding(
                "http://www.wikidata.org/entity/Q2",
                "http://www.wikidata.org/entity/Q108047541",
                "50.9,6.9",
            ),
        ]);
        let gateway = Arc::new(MockSparqlGateway::with_response(response));
        let service = PlacesService::new(gateway.clone());

        let grouped = service.query_places().await.unwrap();
        assert_eq!(grouped["prisons"].len(), 1);
        assert_eq!(grouped["fieldOffices"].len(), 1);
        assert_eq!(grouped["prisons"][0].coordinates.len(), 2);

        // Exactly one query went out, and it is the place-discovery query.
        let executed = gateway.executed_queries().await;
        assert_eq!(executed.len(), 1);
        assert!(executed[0].contains("wd:Q106996250"));
    }

    #[tokio::test]
    async fn test_gateway_failure_degrades_to_empty_grouping() {
        let service = PlacesService::new(Arc::new(MockSparqlGateway::failing()));

        let grouped = service.query_places().await.unwrap();
        assert_eq!(grouped.len(), category_names().count());
        assert!(grouped.values().all(|members| members.is_empty()));
    }
}
