//! FastQC Report Converter
//!
//! Parses the multi-section `fastqc_data.txt` report produced by FastQC
//! into an immutable per-report [`Summary`], derives the documented
//! aggregate statistics, and re-encodes the summary in several downstream
//! representations:
//! - plain JSON
//! - JSON-LD with an ontology `@context`
//! - Turtle triples, graph-equivalent to the JSON-LD
//! - a flattened single-row TSV
//!
//! Reports are independent: each produces its own summary with no shared
//! mutable state, so multiple inputs can be processed in parallel.

pub mod convert;
pub mod error;
pub mod parser;
pub mod reader;
pub mod semantics;
pub mod stats;
pub mod summary;
pub mod vocab;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use convert::{Converter, OutputFormat};
pub use error::{Error, Result};
pub use parser::{Matrix, ModuleKind, Report};
pub use summary::Summary;
