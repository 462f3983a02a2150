//! In-memory mock implementation of SparqlGateway for testing without a
//! network endpoint.

use super::models::SparqlResponse;
use super::traits::SparqlGateway;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Mock gateway returning a canned response and recording executed queries.
pub struct MockSparqlGateway {
    response: SparqlResponse,
    executed: Mutex<Vec<String>>,
}

impl MockSparqlGateway {
    /// Gateway that answers every query with the given response.
    pub fn with_response(response: SparqlResponse) -> Self {
        Self {
            response,
            executed: Mutex::new(Vec::new()),
        }
    }

    /// Gateway that answers every query with the empty response, as the real
    /// client does on transport failure.
    pub fn failing() -> Self {
        Self::with_response(SparqlResponse::default())
    }

    /// Queries executed so far, in order.
    pub async fn executed_queries(&self) -> Vec<String> {
        self.executed.lock().await.clone()
    }
}

#[async_trait]
impl SparqlGateway for MockSparqlGateway {
    async fn execute_query(&self, query: &str) -> SparqlResponse {
        self.executed.lock().await.push(query.to_string());
        self.response.clone()
    }
}
