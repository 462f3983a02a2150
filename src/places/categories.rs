//! Static lookup tables: marker categories, the canonical place-property
//! list, and the property/qualifier label maps
//!
//! These are configuration, not logic — updating a Q-id or label must never
//! require touching the algorithms that consume them.

/// Common prefix of full Wikidata entity URIs, stripped to obtain bare Q-ids.
pub const ENTITY_URI_PREFIX: &str = "http://www.wikidata.org/entity/";

/// Map-marker category name → Q-ids of the place instances it covers.
///
/// An empty set means the category has no automatic classification rule and
/// is only populated by explicit backfill. A Q-id appearing in more than one
/// set is allowed; the classifier treats membership as multi-label.
pub const PLACE_CATEGORIES: &[(&str, &[&str])] = &[
    ("events", &[]),
    (
        "extPolicePrisons",
        &[
            "Q108047650", // Extended police prison
            "Q108048094", // Police Detention Camp
        ],
    ),
    (
        "fieldOffices",
        &[
            "Q108047541", // Gestapo Field Office
            "Q108047989", // Outpost (State Police)
            "Q108047676", // Border Police Commissariat
            "Q108047833", // Border police station
            "Q108047775", // Branch office (border police)
        ],
    ),
    (
        "laborEducationCamps",
        &[
            "Q277565", // labor education camp
        ],
    ),
    ("memorials", &[]),
    (
        "prisons",
        &[
            "Q40357", // prison
        ],
    ),
    (
        "statePoliceHeadquarters",
        &[
            "Q108047581", // State Police Headquarter
        ],
    ),
    (
        "statePoliceOffices",
        &[
            "Q108048310", // Branch office (state police)
            "Q2101520",   // Political police (Germany)
            "Q108047567", // State Police Office
        ],
    ),
];

/// Canonical property list of a queried place. Normalization consumes
/// exactly these keys, in this order.
pub const PLACE_PROPERTIES: &[&str] = &[
    "item",
    "itemLabel",
    "itemDescription",
    "instanceUrls",
    "instanceLabels",
    "coordinates",
    "imageUrl",
    "source",
    "sourceAuthorLabels",
    "sourceLabel",
    "sourcePublisherCityLabel",
    "sourcePublisherLabel",
    "sourcePublicationYear",
    "sourcePages",
    "sourceDnbLink",
];

/// Wikidata property id → label used for queried location statements.
pub const PROPERTY_LABELS: &[(&str, &str)] = &[
    ("P18", "images"),
    ("P31", "instances"),
    ("P355", "subsidiaries"),
    ("P571", "inceptionDates"),
    ("P576", "dissolvedDates"),
    ("P625", "coordinates"),
    ("P749", "parentOrganizations"),
    ("P793", "significantEvents"),
    ("P1037", "directors"),
    ("P1128", "employeeCounts"),
    ("P1343", "describedBySources"),
    ("P1365", "replaces"),
    ("P1366", "replacedBys"),
    ("P5630", "prisonerCounts"),
    ("P6375", "streetAddresses"),
];

/// Wikidata qualifier id → label used for statement annotations.
pub const QUALIFIER_LABELS: &[(&str, &str)] = &[
    ("P304", "pages"),
    ("P580", "startTime"),
    ("P582", "endTime"),
    ("P585", "pointInTime"),
    ("P625", "coordinates"),
    ("P1319", "earliestDate"),
    ("P1326", "latestDate"),
    ("P1480", "sourcingCircumstances"),
    ("P2096", "mediaLegend"),
    ("P6375", "streetAddress"),
    ("P8554", "earliestEndDate"),
    ("P8555", "latestStartDate"),
];

/// Label for a statement property id, if configured.
pub fn property_label(id: &str) -> Option<&'static str> {
    PROPERTY_LABELS
        .iter()
        .find(|(pid, _)| *pid == id)
        .map(|(_, label)| *label)
}

/// Label for a qualifier id, if configured.
pub fn qualifier_label(id: &str) -> Option<&'static str> {
    QUALIFIER_LABELS
        .iter()
        .find(|(qid, _)| *qid == id)
        .map(|(_, label)| *label)
}

/// Names of all configured marker categories, in table order.
pub fn category_names() -> impl Iterator<Item = &'static str> {
    PLACE_CATEGORIES.iter().map(|(name, _)| *name)
}
