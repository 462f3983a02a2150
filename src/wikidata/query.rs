//! The fixed place-discovery SPARQL query
//!
//! Selects every item whose class is the incident-location type Q106996250
//! and that carries at least one coordinate statement, together with each
//! relevant property statement and its time qualifiers, labeled in German
//! and English, ordered by item, property, statement.

use once_cell::sync::Lazy;
use regex::Regex;

/// SPARQL text for the place-discovery query. Static — no runtime parameters.
///
/// The non-time property branch and the time-value branch are a UNION; the
/// qualifier block is OPTIONAL with the same split. Changing the property
/// lists here must be mirrored in [`crate::places::categories`].
pub const PLACES_QUERY: &str = "
    SELECT
        ?item
        ?itemLabel
        ?itemDescription
        ?property
        ?statement
        ?propertyValue
        ?propertyValueLabel
        ?propertyTimePrecision
        ?qualifier
        ?qualifierValue
        ?qualifierValueLabel
        ?qualifierTimePrecision
    WHERE {
        ?item wdt:P31 wd:Q106996250.
        FILTER(EXISTS { ?item wdt:P625 ?coordinateLocation. })
        ?property wikibase:claim ?claim.
        ?item ?claim ?statement.
        {
            ?property wikibase:propertyType ?propertyType.
            FILTER(?property IN(
                wd:P18, wd:P31, wd:P355, wd:P625, wd:P749, wd:P793, wd:P1037, wd:P1128, wd:P1343, wd:P1365,
                wd:P1366, wd:P5630, wd:P6375
            ))
            FILTER(?propertyType != wikibase:Time)
            ?property wikibase:statementProperty ?ps.
            ?statement ?ps ?propertyValue.
        }
        UNION
        {
            ?property wikibase:statementValue ?psv.
            FILTER(?property IN(wd:P571, wd:P576))
            ?statement ?psv ?propertyValueNode.
            ?propertyValueNode wikibase:timeValue ?propertyValue;
                wikibase:timePrecision ?propertyTimePrecision.
        }
        OPTIONAL {
            {
                ?qualifier wikibase:propertyType ?qualifierType.
                FILTER(?qualifier IN(wd:P304, wd:P625, wd:P1480, wd:P2096, wd:P6375))
                FILTER(?qualifierType != wikibase:Time)
                ?qualifier wikibase:qualifier ?pq.
                ?statement ?pq ?qualifierValue.
            }
            UNION
            {
                ?qualifier wikibase:qualifierValue ?pqv.
                FILTER(?qualifier IN(wd:P580, wd:P582, wd:P585, wd:P1319, wd:P1326, wd:P8554, wd:P8555))
                ?statement ?pqv ?qualifierValueNode.
                ?qualifierValueNode wikibase:timeValue ?qualifierValue;
                    wikibase:timePrecision ?qualifierTimePrecision.
            }
        }
        SERVICE wikibase:label { bd:serviceParam wikibase:language \"de,en\". }
    }
    ORDER BY (?item) (?property) (?statement)";

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s\s+").expect("whitespace regex is valid"));

/// Collapse runs of two or more whitespace characters into a single space
/// and trim the ends. Applied once before transmission; SPARQL treats all
/// inter-token whitespace alike, so semantics are unchanged.
pub fn normalize_query(query: &str) -> String {
    WHITESPACE_RUN.replace_all(query.trim(), " ").into_owned()
}
