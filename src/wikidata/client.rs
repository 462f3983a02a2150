//! HTTP gateway to a Wikidata-style SPARQL endpoint
//!
//! One outbound GET per [`SparqlGateway::execute_query`] call. Failures are
//! terminal for that call: they are logged with the status and the exact
//! query sent, and the caller receives the empty response.

use super::models::SparqlResponse;
use super::query::normalize_query;
use super::traits::SparqlGateway;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header;

/// SPARQL endpoint client.
///
/// Thread-safe and cheaply cloneable (shares the reqwest client internally).
#[derive(Clone)]
pub struct WikidataClient {
    client: reqwest::Client,
    url: String,
}

impl WikidataClient {
    /// Create a new client for the given endpoint URL.
    ///
    /// The user agent identifies this application to the endpoint; the
    /// Wikimedia query service rejects anonymous agents.
    pub fn new(url: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Endpoint URL this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SparqlGateway for WikidataClient {
    async fn execute_query(&self, query: &str) -> SparqlResponse {
        let query = normalize_query(query);

        let result = self
            .client
            .get(&self.url)
            .header(header::ACCEPT, "application/sparql-results+json")
            .query(&[("query", query.as_str())])
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                let e = anyhow::Error::from(e);
                tracing::error!(query = %query, error = format!("{e:#}"), "Wikidata request failed");
                return SparqlResponse::default();
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), query = %query, "Wikidata request failed");
            return SparqlResponse::default();
        }

        match response.json::<SparqlResponse>().await {
            Ok(parsed) => parsed,
            Err(e) => {
                let e = anyhow::Error::from(e);
                tracing::error!(
                    status = status.as_u16(),
                    query = %query,
                    error = format!("{e:#}"),
                    "Wikidata request failed"
                );
                SparqlResponse::default()
            }
        }
    }
}
