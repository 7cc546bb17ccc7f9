//! Ontology vocabulary for the sequence-statistics graph
//!
//! One static definition of every class, object property and datatype
//! property used by the linked-data encoders. Both the JSON-LD `@context`
//! and the Turtle prefix/term expansion are generated from these tables,
//! so the two serializations cannot drift apart.

/// RDF vocabulary constants
pub mod rdf {
    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:value IRI, bound to the `value` term
    pub const VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";
}

/// XSD datatype constants
pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

/// Dublin Core terms used for report-level metadata
pub mod dct {
    pub const CREATED: &str = "http://purl.org/dc/terms/created";
    pub const LICENSE: &str = "http://purl.org/dc/terms/license";
    pub const PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
}

/// PAV provenance terms
pub mod pav {
    pub const VERSION: &str = "http://purl.org/pav/version";
}

/// Local ontology namespace for sequence-statistics terms
pub const SOS_NAMESPACE: &str = "http://me.com/sos#";

/// Namespace under which report node IRIs are synthesized
pub const DATA_NAMESPACE: &str = "http://me.com/data/QNT";

/// Constant metadata IRIs attached to every report node
pub const LICENSE_IRI: &str = "https://creativecommons.org/publicdomain/zero/1.0/";
pub const PUBLISHER_IRI: &str = "http://me.com";

/// Unit terms imported from the Units Ontology, keyed by their term name.
pub const UNIT_TERMS: &[(&str, &str)] = &[
    ("countUnit", "http://purl.obolibrary.org/obo/UO_0000189"),
    ("percent", "http://purl.obolibrary.org/obo/UO_0000187"),
    ("ratio", "http://purl.obolibrary.org/obo/UO_0000190"),
];

/// Classes: the report itself, matrix containers, row shapes and the typed
/// value nodes scalar fields point at.
pub const CLASSES: &[&str] = &[
    "SequenceStatisticsReport",
    "SequenceStatisticsMatrix",
    "Row",
    "ExactBaseStatistics",
    "BaseRangeStatistics",
    "PerBaseSequenceQuality",
    "PerTileSequenceQuality",
    "PerSequnceQualityScores",
    "PerBaseSequenceContent",
    "PerSequenceGCContent",
    "PerBaseNContent",
    "SequenceLengthDistribution",
    "SequenceDuplicationLevels",
    "OverrepresentedSequences",
    "KmerContent",
    "PhredQualityScore",
    "NucleotideBaseContent",
    "SequenceReadContent",
    "SequenceReadLength",
    "SequenceDuplicationLevel",
    "NContent",
];

/// Object properties: edges between report, matrices, rows and value nodes.
pub const OBJECT_PROPERTIES: &[&str] = &[
    "hasMatrix",
    "hasRow",
    "hasUnit",
    "totalSequences",
    "filteredSequences",
    "sequenceLength",
    "percentGC",
    "basePosition",
    "kmerSequence",
    "meanBaseCallQuality",
    "medianBaseCallQuality",
    "baseCallQuality",
    "baseCallQualityLowerQuartile",
    "baseCallQualityUpperQuartile",
    "baseCallQuality10thPercentile",
    "baseCallQuality90thPercentile",
    "nCount",
    "observedPerExpectedOverall",
    "observedPerExpectedMax",
    "observedPerExpectedMaxPosition",
    "percentGuanine",
    "percentAdenine",
    "percentThymine",
    "percentCytosine",
    "sequenceDuplicationLevel",
    "sequenceReadCount",
    "sequenceReadLength",
    "sequenceReadPercentage",
    "sequenceReadRelativeCount",
    "minSequenceLength",
    "maxSequenceLength",
    "meanSequenceLength",
    "medianSequenceLength",
    "overallMeanBaseCallQuality",
    "overallMedianBaseCallQuality",
    "overallNContent",
];

/// Datatype properties carrying xsd:string literals.
pub const DATA_PROPERTIES_STRING: &[&str] = &[
    "filename",
    "fileType",
    "encoding",
    "possibleSourceOfSequence",
    "overrepresentedSequence",
];

/// Datatype properties carrying xsd:integer literals.
pub const DATA_PROPERTIES_INTEGER: &[&str] = &["rowIndex"];

/// Turtle prefix table. `sos` is the local ontology namespace.
pub const PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("sos", SOS_NAMESPACE),
    ("obo", "http://purl.obolibrary.org/obo/"),
    ("dct", "http://purl.org/dc/terms/"),
    ("pav", "http://purl.org/pav/"),
];

/// Expand a context term to its full IRI.
///
/// Terms resolve in a fixed order: imported unit terms, `value`, metadata
/// terms, then the local ontology namespace for everything else.
pub fn term_iri(term: &str) -> String {
    if let Some((_, iri)) = UNIT_TERMS.iter().find(|(name, _)| *name == term) {
        return (*iri).to_string();
    }
    match term {
        "value" => rdf::VALUE.to_string(),
        "created" => dct::CREATED.to_string(),
        "license" => dct::LICENSE.to_string(),
        "publisher" => dct::PUBLISHER.to_string(),
        "version" => pav::VERSION.to_string(),
        _ => format!("{SOS_NAMESPACE}{term}"),
    }
}

/// Compact a full IRI to a prefixed name where a prefix matches.
pub fn compact_iri(iri: &str) -> Option<String> {
    for (prefix, namespace) in PREFIXES {
        if let Some(local) = iri.strip_prefix(namespace) {
            // prefixed names cannot carry path separators in the local part
            if !local.is_empty() && !local.contains('/') && !local.contains('#') {
                return Some(format!("{prefix}:{local}"));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_terms_expand_into_sos_namespace() {
        assert_eq!(term_iri("hasRow"), "http://me.com/sos#hasRow");
        assert_eq!(term_iri("PhredQualityScore"), "http://me.com/sos#PhredQualityScore");
    }

    #[test]
    fn test_imported_terms_keep_their_iris() {
        assert_eq!(term_iri("countUnit"), "http://purl.obolibrary.org/obo/UO_0000189");
        assert_eq!(term_iri("value"), rdf::VALUE);
        assert_eq!(term_iri("created"), dct::CREATED);
    }

    #[test]
    fn test_compaction_round_trips_through_prefixes() {
        assert_eq!(compact_iri(&term_iri("hasRow")).unwrap(), "sos:hasRow");
        assert_eq!(compact_iri(&term_iri("countUnit")).unwrap(), "obo:UO_0000189");
        assert_eq!(compact_iri("http://example.org/unprefixed"), None);
    }

    #[test]
    fn test_vocabulary_is_disjoint() {
        for class in CLASSES {
            assert!(!OBJECT_PROPERTIES.contains(class));
            assert!(!DATA_PROPERTIES_STRING.contains(class));
        }
        for prop in DATA_PROPERTIES_STRING {
            assert!(!OBJECT_PROPERTIES.contains(prop));
        }
    }
}
