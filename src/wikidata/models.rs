//! Serde models for the SPARQL 1.1 JSON results protocol
//!
//! Only `results.bindings` is consumed downstream; `head` is kept so a full
//! response round-trips cleanly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One result row: variable name → typed value wrapper.
pub type RawBinding = HashMap<String, BindingValue>;

/// Top-level SPARQL JSON response.
///
/// `Default` yields the empty response the gateway hands back on transport
/// failure: no variables, no bindings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SparqlResponse {
    #[serde(default)]
    pub head: SparqlHead,
    #[serde(default)]
    pub results: SparqlResults,
}

impl SparqlResponse {
    /// Borrow the result rows.
    pub fn bindings(&self) -> &[RawBinding] {
        &self.results.bindings
    }

    /// True when the response carries no rows (including the failure case).
    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }
}

/// `head` section — the projected variable names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SparqlHead {
    #[serde(default)]
    pub vars: Vec<String>,
}

/// `results` section — the ordered binding rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SparqlResults {
    #[serde(default)]
    pub bindings: Vec<RawBinding>,
}

/// A single bound value: `type` tag plus the plain `value`, with the
/// optional literal annotations the protocol allows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BindingValue {
    #[serde(rename = "type", default)]
    pub value_type: String,
    pub value: String,
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl BindingValue {
    /// A plain literal wrapper, the common case in tests and fixtures.
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value_type: "literal".into(),
            value: value.into(),
            lang: None,
            datatype: None,
        }
    }

    /// A URI wrapper.
    pub fn uri(value: impl Into<String>) -> Self {
        Self {
            value_type: "uri".into(),
            value: value.into(),
            lang: None,
            datatype: None,
        }
    }
}
