//! Linked-data graph construction and serialization
//!
//! The JSON-LD and Turtle encoders share one graph representation: a tree
//! of [`LdNode`]s built once per summary. JSON-LD renders the tree with a
//! generated `@context`; Turtle flattens the same tree into triples with
//! blank nodes for nested value and row nodes. Both expand terms through
//! [`crate::vocab`], so the two outputs describe the same graph.

use crate::parser::Matrix;
use crate::summary::Summary;
use crate::vocab::{self, xsd};
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Number, Value};

/// A property value in the linked-data graph.
#[derive(Debug, Clone, PartialEq)]
pub enum LdValue {
    /// Plain string literal
    Str(String),
    /// Integer literal
    Int(i64),
    /// Float literal
    Float(f64),
    /// Reference to a context-defined term, e.g. a unit
    Term(&'static str),
    /// Absolute IRI reference
    Iri(String),
    /// Literal with an explicit datatype IRI
    Typed(String, &'static str),
    /// Nested node
    Node(Box<LdNode>),
    /// Ordered list of nested nodes
    Nodes(Vec<LdNode>),
}

/// One node in the graph: an optional IRI, its classes, and ordered
/// (property, value) pairs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LdNode {
    pub id: Option<String>,
    pub types: Vec<&'static str>,
    pub props: Vec<(&'static str, LdValue)>,
}

impl LdNode {
    fn typed(class: &'static str) -> LdNode {
        LdNode {
            types: vec![class],
            ..LdNode::default()
        }
    }

    fn push(&mut self, prop: &'static str, value: LdValue) {
        self.props.push((prop, value));
    }

    /// Number of triples this node expands to.
    pub fn triple_count(&self) -> usize {
        let mut count = self.types.len();
        for (_, value) in &self.props {
            count += match value {
                LdValue::Node(node) => 1 + node.triple_count(),
                LdValue::Nodes(nodes) => nodes
                    .iter()
                    .map(|n| 1 + n.triple_count())
                    .sum::<usize>(),
                _ => 1,
            };
        }
        count
    }
}

/// Row class for a base-position token: positions like `50-100` describe a
/// range of bases, single positions an exact base.
fn base_stat_class(position: &str) -> &'static str {
    if position.contains('-') {
        "BaseRangeStatistics"
    } else {
        "ExactBaseStatistics"
    }
}

/// Builds the linked-data graph for one summary.
pub struct Semantics<'a> {
    summary: &'a Summary,
    identifier: String,
}

impl<'a> Semantics<'a> {
    pub fn new(summary: &'a Summary, id: Option<&str>) -> Semantics<'a> {
        Semantics {
            summary,
            identifier: summary.identifier(id),
        }
    }

    /// The report node IRI synthesized from the identifier.
    pub fn report_iri(&self) -> String {
        format!("{}{}", vocab::DATA_NAMESPACE, self.identifier)
    }

    /// Build the report graph: descriptive metadata, one typed value node
    /// per scalar field, and one container node per present matrix whose
    /// rows carry a zero-based `rowIndex` in source order.
    pub fn graph(&self) -> LdNode {
        let s = self.summary;
        let mut report = LdNode {
            id: Some(self.report_iri()),
            types: vec!["SequenceStatisticsReport"],
            props: Vec::new(),
        };

        report.push(
            "created",
            LdValue::Typed(
                Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                xsd::DATE_TIME,
            ),
        );
        report.push("license", LdValue::Iri(vocab::LICENSE_IRI.to_string()));
        report.push("publisher", LdValue::Iri(vocab::PUBLISHER_IRI.to_string()));
        report.push("version", LdValue::Str(s.fastqc_version.clone()));

        report.push("filename", LdValue::Str(s.filename.clone()));
        report.push("fileType", LdValue::Str(s.file_type.clone()));
        report.push("encoding", LdValue::Str(s.encoding.clone()));
        report.push(
            "totalSequences",
            value_node(
                "SequenceReadContent",
                Some("countUnit"),
                LdValue::Int(s.total_sequences as i64),
            ),
        );
        if let Some(filtered) = s.filtered_sequences {
            report.push(
                "filteredSequences",
                value_node(
                    "SequenceReadContent",
                    Some("countUnit"),
                    LdValue::Int(filtered as i64),
                ),
            );
        }
        report.push(
            "sequenceLength",
            value_node(
                "SequenceReadLength",
                None,
                LdValue::Str(s.sequence_length.clone()),
            ),
        );
        report.push(
            "percentGC",
            value_node(
                "NucleotideBaseContent",
                Some("percent"),
                LdValue::Float(s.percent_gc),
            ),
        );
        report.push(
            "minSequenceLength",
            value_node(
                "SequenceReadLength",
                None,
                LdValue::Int(s.min_length as i64),
            ),
        );
        report.push(
            "maxSequenceLength",
            value_node(
                "SequenceReadLength",
                None,
                LdValue::Int(s.max_length as i64),
            ),
        );
        if let Some(mean) = s.mean_sequence_length {
            report.push(
                "meanSequenceLength",
                value_node("SequenceReadLength", None, LdValue::Float(mean)),
            );
        }
        if let Some(median) = s.median_sequence_length {
            report.push(
                "medianSequenceLength",
                value_node("SequenceReadLength", None, LdValue::Float(median)),
            );
        }
        if let Some(quality) = s.overall_mean_quality_score {
            report.push(
                "overallMeanBaseCallQuality",
                value_node("PhredQualityScore", None, LdValue::Float(quality)),
            );
        }
        if let Some(quality) = s.overall_median_quality_score {
            report.push(
                "overallMedianBaseCallQuality",
                value_node("PhredQualityScore", None, LdValue::Float(quality)),
            );
        }
        if let Some(n_content) = s.overall_n_content {
            report.push(
                "overallNContent",
                value_node("NContent", None, LdValue::Float(n_content)),
            );
        }

        let mut matrices: Vec<LdNode> = Vec::new();
        if let Some(m) = &s.per_base_sequence_quality {
            matrices.push(per_base_sequence_quality_node(m));
        }
        if let Some(m) = &s.per_sequence_quality_scores {
            matrices.push(per_sequence_quality_scores_node(m));
        }
        if let Some(m) = &s.per_base_sequence_content {
            matrices.push(per_base_sequence_content_node(m));
        }
        if let Some(m) = &s.per_sequence_gc_content {
            matrices.push(per_sequence_gc_content_node(m));
        }
        if let Some(m) = &s.per_base_n_content {
            matrices.push(per_base_n_content_node(m));
        }
        if let Some(m) = &s.sequence_length_distribution {
            matrices.push(sequence_length_distribution_node(m));
        }
        if let Some(m) = &s.sequence_duplication_levels {
            matrices.push(sequence_duplication_levels_node(m));
        }
        if let Some(m) = &s.overrepresented_sequences {
            matrices.push(overrepresented_sequences_node(m));
        }
        if let Some(m) = &s.kmer_content {
            matrices.push(kmer_content_node(m));
        }
        report.push("hasMatrix", LdValue::Nodes(matrices));

        report
    }

    /// JSON-LD object with `@context`, built from [`Semantics::graph`].
    pub fn json_ld(&self) -> Value {
        json_ld_of(&self.graph())
    }

    /// Turtle serialization, built from [`Semantics::graph`].
    pub fn turtle(&self) -> String {
        turtle_of(&self.graph())
    }
}

fn value_node(class: &'static str, unit: Option<&'static str>, value: LdValue) -> LdValue {
    let mut node = LdNode::typed(class);
    if let Some(unit) = unit {
        node.push("hasUnit", LdValue::Term(unit));
    }
    node.push("value", value);
    LdValue::Node(Box::new(node))
}

fn row_node(index: usize, position: Option<&str>) -> LdNode {
    let mut node = LdNode::typed("Row");
    if let Some(position) = position {
        node.types.push(base_stat_class(position));
    }
    node.push("rowIndex", LdValue::Int(index as i64));
    if let Some(position) = position {
        node.push("basePosition", LdValue::Str(position.to_string()));
    }
    node
}

fn matrix_node(
    class: &'static str,
    matrix: &Matrix,
    build_row: impl Fn(usize, &[String]) -> LdNode,
) -> LdNode {
    let mut node = LdNode::typed(class);
    let rows = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| build_row(i, row))
        .collect();
    node.push("hasRow", LdValue::Nodes(rows));
    node
}

fn per_base_sequence_quality_node(matrix: &Matrix) -> LdNode {
    matrix_node("PerBaseSequenceQuality", matrix, |i, row| {
        let mut node = row_node(i, Some(&row[0]));
        let quality_columns = [
            ("meanBaseCallQuality", 1),
            ("medianBaseCallQuality", 2),
            ("baseCallQualityLowerQuartile", 3),
            ("baseCallQualityUpperQuartile", 4),
            ("baseCallQuality10thPercentile", 5),
            ("baseCallQuality90thPercentile", 6),
        ];
        for (prop, column) in quality_columns {
            node.push(
                prop,
                value_node(
                    "PhredQualityScore",
                    None,
                    LdValue::Str(row[column].clone()),
                ),
            );
        }
        node
    })
}

fn per_sequence_quality_scores_node(matrix: &Matrix) -> LdNode {
    matrix_node("PerSequnceQualityScores", matrix, |i, row| {
        let mut node = row_node(i, None);
        node.push(
            "baseCallQuality",
            value_node("PhredQualityScore", None, LdValue::Str(row[0].clone())),
        );
        node.push(
            "sequenceReadCount",
            value_node(
                "SequenceReadContent",
                Some("countUnit"),
                LdValue::Str(row[1].clone()),
            ),
        );
        node
    })
}

fn per_base_sequence_content_node(matrix: &Matrix) -> LdNode {
    matrix_node("PerBaseSequenceContent", matrix, |i, row| {
        let mut node = row_node(i, Some(&row[0]));
        let base_columns = [
            ("percentGuanine", 1),
            ("percentAdenine", 2),
            ("percentThymine", 3),
            ("percentCytosine", 4),
        ];
        for (prop, column) in base_columns {
            node.push(
                prop,
                value_node(
                    "NucleotideBaseContent",
                    Some("percent"),
                    LdValue::Str(row[column].clone()),
                ),
            );
        }
        node
    })
}

fn per_sequence_gc_content_node(matrix: &Matrix) -> LdNode {
    matrix_node("PerSequenceGCContent", matrix, |i, row| {
        let mut node = row_node(i, None);
        node.push(
            "percentGC",
            value_node(
                "NucleotideBaseContent",
                Some("percent"),
                LdValue::Str(row[0].clone()),
            ),
        );
        node.push(
            "sequenceReadCount",
            value_node(
                "SequenceReadContent",
                Some("countUnit"),
                LdValue::Str(row[1].clone()),
            ),
        );
        node
    })
}

fn per_base_n_content_node(matrix: &Matrix) -> LdNode {
    matrix_node("PerBaseNContent", matrix, |i, row| {
        let mut node = row_node(i, Some(&row[0]));
        node.push(
            "nCount",
            value_node(
                "NContent",
                Some("countUnit"),
                LdValue::Str(row[1].clone()),
            ),
        );
        node
    })
}

fn sequence_length_distribution_node(matrix: &Matrix) -> LdNode {
    matrix_node("SequenceLengthDistribution", matrix, |i, row| {
        let mut node = row_node(i, None);
        node.push(
            "sequenceReadLength",
            value_node(
                "SequenceReadLength",
                Some("countUnit"),
                LdValue::Str(row[0].clone()),
            ),
        );
        node.push(
            "sequenceReadCount",
            value_node(
                "SequenceReadContent",
                Some("countUnit"),
                LdValue::Str(row[1].clone()),
            ),
        );
        node
    })
}

fn sequence_duplication_levels_node(matrix: &Matrix) -> LdNode {
    matrix_node("SequenceDuplicationLevels", matrix, |i, row| {
        let mut node = row_node(i, None);
        node.push(
            "sequenceDuplicationLevel",
            value_node(
                "SequenceDuplicationLevel",
                Some("countUnit"),
                LdValue::Str(row[0].clone()),
            ),
        );
        node.push(
            "sequenceReadRelativeCount",
            value_node(
                "SequenceReadContent",
                Some("percent"),
                LdValue::Str(row[1].clone()),
            ),
        );
        if let Some(total) = row.get(2) {
            node.push(
                "sequenceReadPercentage",
                value_node(
                    "SequenceReadContent",
                    Some("percent"),
                    LdValue::Str(total.clone()),
                ),
            );
        }
        node
    })
}

fn overrepresented_sequences_node(matrix: &Matrix) -> LdNode {
    matrix_node("OverrepresentedSequences", matrix, |i, row| {
        let mut node = row_node(i, None);
        node.push("overrepresentedSequence", LdValue::Str(row[0].clone()));
        node.push(
            "sequenceReadCount",
            value_node(
                "SequenceReadContent",
                Some("countUnit"),
                LdValue::Str(row[1].clone()),
            ),
        );
        node.push(
            "sequenceReadPercentage",
            value_node(
                "SequenceReadContent",
                Some("percent"),
                LdValue::Str(row[2].clone()),
            ),
        );
        node.push("possibleSourceOfSequence", LdValue::Str(row[3].clone()));
        node
    })
}

fn kmer_content_node(matrix: &Matrix) -> LdNode {
    matrix_node("KmerContent", matrix, |i, row| {
        let mut node = row_node(i, None);
        node.push("kmerSequence", LdValue::Str(row[0].clone()));
        node.push(
            "sequenceReadCount",
            value_node(
                "SequenceReadContent",
                Some("countUnit"),
                LdValue::Str(row[1].clone()),
            ),
        );
        node.push(
            "observedPerExpectedOverall",
            value_node(
                "SequenceReadContent",
                Some("ratio"),
                LdValue::Str(row[2].clone()),
            ),
        );
        node.push(
            "observedPerExpectedMax",
            value_node(
                "SequenceReadContent",
                Some("ratio"),
                LdValue::Str(row[3].clone()),
            ),
        );
        node.push("observedPerExpectedMaxPosition", LdValue::Str(row[4].clone()));
        node
    })
}

//
// JSON-LD rendering
//

/// Generate the `@context` from the static vocabulary: classes and object
/// properties as IRI-valued terms, datatype properties bound to their XSD
/// types, plus the imported unit and metadata terms.
pub fn jsonld_context() -> Value {
    let mut context = Map::new();
    for (term, iri) in vocab::UNIT_TERMS {
        context.insert((*term).to_string(), Value::String((*iri).to_string()));
    }
    context.insert(
        "value".to_string(),
        Value::String(vocab::rdf::VALUE.to_string()),
    );
    context.insert(
        "created".to_string(),
        serde_json::json!({ "@id": vocab::dct::CREATED, "@type": xsd::DATE_TIME }),
    );
    context.insert(
        "license".to_string(),
        serde_json::json!({ "@id": vocab::dct::LICENSE, "@type": "@id" }),
    );
    context.insert(
        "publisher".to_string(),
        serde_json::json!({ "@id": vocab::dct::PUBLISHER, "@type": "@id" }),
    );
    context.insert(
        "version".to_string(),
        serde_json::json!({ "@id": vocab::pav::VERSION, "@type": xsd::STRING }),
    );
    for term in vocab::CLASSES.iter().chain(vocab::OBJECT_PROPERTIES) {
        context.insert(
            (*term).to_string(),
            serde_json::json!({ "@id": vocab::term_iri(term), "@type": "@id" }),
        );
    }
    for term in vocab::DATA_PROPERTIES_STRING {
        context.insert(
            (*term).to_string(),
            serde_json::json!({ "@id": vocab::term_iri(term), "@type": xsd::STRING }),
        );
    }
    for term in vocab::DATA_PROPERTIES_INTEGER {
        context.insert(
            (*term).to_string(),
            serde_json::json!({ "@id": vocab::term_iri(term), "@type": xsd::INTEGER }),
        );
    }
    Value::Object(context)
}

/// Render a graph as a JSON-LD object with `@context`.
pub fn json_ld_of(graph: &LdNode) -> Value {
    let mut map = Map::new();
    map.insert("@context".to_string(), jsonld_context());
    fill_node(graph, &mut map);
    Value::Object(map)
}

fn fill_node(node: &LdNode, map: &mut Map<String, Value>) {
    if let Some(id) = &node.id {
        map.insert("@id".to_string(), Value::String(id.clone()));
    }
    match node.types.len() {
        0 => {}
        1 => {
            map.insert(
                "@type".to_string(),
                Value::String(node.types[0].to_string()),
            );
        }
        _ => {
            map.insert(
                "@type".to_string(),
                Value::Array(
                    node.types
                        .iter()
                        .map(|t| Value::String((*t).to_string()))
                        .collect(),
                ),
            );
        }
    }
    for (prop, value) in &node.props {
        map.insert((*prop).to_string(), json_value(value));
    }
}

fn json_value(value: &LdValue) -> Value {
    match value {
        LdValue::Str(s) => Value::String(s.clone()),
        LdValue::Int(i) => Value::Number((*i).into()),
        LdValue::Float(f) => Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        LdValue::Term(term) => Value::String((*term).to_string()),
        LdValue::Iri(iri) => Value::String(iri.clone()),
        LdValue::Typed(literal, _) => Value::String(literal.clone()),
        LdValue::Node(node) => {
            let mut map = Map::new();
            fill_node(node, &mut map);
            Value::Object(map)
        }
        LdValue::Nodes(nodes) => Value::Array(
            nodes
                .iter()
                .map(|node| {
                    let mut map = Map::new();
                    fill_node(node, &mut map);
                    Value::Object(map)
                })
                .collect(),
        ),
    }
}

//
// Turtle rendering
//

/// Render a graph as Turtle: declared prefixes, then one triple per line
/// in deterministic traversal order, blank nodes labelled `_:b0`, `_:b1`…
pub fn turtle_of(graph: &LdNode) -> String {
    let mut out = String::new();
    for (prefix, namespace) in vocab::PREFIXES {
        out.push_str(&format!("@prefix {prefix}: <{namespace}> .\n"));
    }
    out.push('\n');

    let mut counter = 0usize;
    let subject = match &graph.id {
        Some(id) => format!("<{id}>"),
        None => next_blank(&mut counter),
    };
    emit_node(graph, &subject, &mut out, &mut counter);
    out
}

fn next_blank(counter: &mut usize) -> String {
    let label = format!("_:b{counter}");
    *counter += 1;
    label
}

fn term_ref(term: &str) -> String {
    let iri = vocab::term_iri(term);
    vocab::compact_iri(&iri).unwrap_or(format!("<{iri}>"))
}

fn emit_node(node: &LdNode, subject: &str, out: &mut String, counter: &mut usize) {
    for class in &node.types {
        out.push_str(&format!("{subject} a {} .\n", term_ref(class)));
    }
    for (prop, value) in &node.props {
        let predicate = term_ref(prop);
        match value {
            LdValue::Node(child) => {
                let label = next_blank(counter);
                out.push_str(&format!("{subject} {predicate} {label} .\n"));
                emit_node(child, &label, out, counter);
            }
            LdValue::Nodes(children) => {
                for child in children {
                    let label = next_blank(counter);
                    out.push_str(&format!("{subject} {predicate} {label} .\n"));
                    emit_node(child, &label, out, counter);
                }
            }
            other => {
                out.push_str(&format!(
                    "{subject} {predicate} {} .\n",
                    object_ref(other)
                ));
            }
        }
    }
}

fn object_ref(value: &LdValue) -> String {
    match value {
        LdValue::Str(s) => format!("\"{}\"", escape_literal(s)),
        LdValue::Int(i) => i.to_string(),
        LdValue::Float(f) => format_float(*f),
        LdValue::Term(term) => term_ref(term),
        LdValue::Iri(iri) => vocab::compact_iri(iri).unwrap_or(format!("<{iri}>")),
        LdValue::Typed(literal, datatype) => {
            let datatype = vocab::compact_iri(datatype)
                .unwrap_or(format!("<{datatype}>"));
            format!("\"{}\"^^{datatype}", escape_literal(literal))
        }
        LdValue::Node(_) | LdValue::Nodes(_) => unreachable!("handled in emit_node"),
    }
}

fn escape_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}

fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.is_finite() {
        format!("{f:.1}")
    } else {
        format!("{f}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::SAMPLE_REPORT;

    fn sample_summary() -> Summary {
        Summary::from_text(SAMPLE_REPORT).unwrap()
    }

    fn matrix_nodes(jsonld: &Value) -> &Vec<Value> {
        jsonld["hasMatrix"].as_array().unwrap()
    }

    fn find_matrix<'a>(jsonld: &'a Value, class: &str) -> &'a Value {
        matrix_nodes(jsonld)
            .iter()
            .find(|m| m["@type"] == class)
            .unwrap()
    }

    #[test]
    fn test_report_iri_from_identifier() {
        let summary = sample_summary();
        let semantics = Semantics::new(&summary, None);
        assert_eq!(semantics.report_iri(), "http://me.com/data/QNTsample");
        let semantics = Semantics::new(&summary, Some("RUN42"));
        assert_eq!(semantics.report_iri(), "http://me.com/data/QNTRUN42");
    }

    #[test]
    fn test_row_index_preserves_source_order() {
        let summary = sample_summary();
        let jsonld = Semantics::new(&summary, None).json_ld();
        let quality = find_matrix(&jsonld, "PerBaseSequenceQuality");
        let indexes: Vec<i64> = quality["hasRow"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["rowIndex"].as_i64().unwrap())
            .collect();
        assert_eq!(indexes, vec![0, 1]);
    }

    #[test]
    fn test_base_position_row_typing() {
        let summary = sample_summary();
        let jsonld = Semantics::new(&summary, None).json_ld();
        let quality = find_matrix(&jsonld, "PerBaseSequenceQuality");
        let row = &quality["hasRow"][0];
        let types = row["@type"].as_array().unwrap();
        assert!(types.contains(&Value::String("Row".to_string())));
        assert!(types.contains(&Value::String("ExactBaseStatistics".to_string())));
        assert_eq!(base_stat_class("50-100"), "BaseRangeStatistics");
    }

    #[test]
    fn test_absent_matrix_has_no_node() {
        let summary = sample_summary();
        let jsonld = Semantics::new(&summary, None).json_ld();
        assert!(matrix_nodes(&jsonld)
            .iter()
            .all(|m| m["@type"] != "KmerContent"));
    }

    #[test]
    fn test_context_covers_every_term_in_the_graph() {
        let summary = sample_summary();
        let graph = Semantics::new(&summary, None).graph();
        let context = jsonld_context();
        let context = context.as_object().unwrap();

        fn check(node: &LdNode, context: &Map<String, Value>) {
            for class in &node.types {
                assert!(context.contains_key(*class), "missing class {class}");
            }
            for (prop, value) in &node.props {
                assert!(context.contains_key(*prop), "missing property {prop}");
                match value {
                    LdValue::Term(term) => {
                        assert!(context.contains_key(*term), "missing term {term}")
                    }
                    LdValue::Node(child) => check(child, context),
                    LdValue::Nodes(children) => {
                        children.iter().for_each(|c| check(c, context))
                    }
                    _ => {}
                }
            }
        }
        check(&graph, context);
    }

    #[test]
    fn test_turtle_declares_prefixes_and_types_the_report() {
        let summary = sample_summary();
        let turtle = Semantics::new(&summary, None).turtle();
        assert!(turtle.contains("@prefix sos: <http://me.com/sos#> ."));
        assert!(turtle.contains(
            "<http://me.com/data/QNTsample> a sos:SequenceStatisticsReport ."
        ));
        assert!(turtle.contains("sos:hasUnit obo:UO_0000189 ."));
        assert!(turtle.contains("dct:license"));
    }

    #[test]
    fn test_turtle_is_graph_equivalent_to_jsonld() {
        // Both serializations come from the same LdNode tree; the turtle
        // statement count must match the tree's triple expansion exactly.
        let summary = sample_summary();
        let graph = Semantics::new(&summary, None).graph();
        let turtle = turtle_of(&graph);
        let statements = turtle
            .lines()
            .filter(|line| line.ends_with(" .") && !line.starts_with("@prefix"))
            .count();
        assert_eq!(statements, graph.triple_count());

        // and every rowIndex triple in the turtle mirrors a JSON-LD rowIndex
        let jsonld = json_ld_of(&graph);
        let jsonld_rows: usize = matrix_nodes(&jsonld)
            .iter()
            .map(|m| m["hasRow"].as_array().unwrap().len())
            .sum();
        let turtle_rows = turtle
            .lines()
            .filter(|line| line.contains(" sos:rowIndex "))
            .count();
        assert_eq!(jsonld_rows, turtle_rows);
    }

    #[test]
    fn test_float_literals_keep_a_decimal_point() {
        assert_eq!(format_float(20.0), "20.0");
        assert_eq!(format_float(12.5), "12.5");
    }
}
