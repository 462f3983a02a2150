//! Wikidata SPARQL endpoint access
//!
//! Protocol models, the fixed place-discovery query, and the HTTP gateway.

pub mod client;
pub mod models;
pub mod query;
pub mod traits;

pub use client::WikidataClient;
pub use traits::SparqlGateway;

#[cfg(test)]
pub(crate) mod mock;
