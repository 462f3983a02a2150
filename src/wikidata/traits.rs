//! Trait abstraction for SPARQL query execution

use super::models::SparqlResponse;
use async_trait::async_trait;

/// Executes SPARQL queries against an endpoint.
///
/// Implementations never surface transport failures to the caller: a failed
/// request degrades to the empty [`SparqlResponse`] after logging a
/// diagnostic. Callers that need resilience must wrap the gateway
/// themselves — there are no retries here.
#[async_trait]
pub trait SparqlGateway: Send + Sync {
    /// Execute a query and return the parsed result set, or the empty
    /// response on any transport or protocol failure.
    async fn execute_query(&self, query: &str) -> SparqlResponse;
}
