//! Output format selection and flat encoders
//!
//! The JSON and TSV encoders live here; the JSON-LD and Turtle encoders
//! delegate to [`crate::semantics`]. Formats are a closed enumeration —
//! an unrecognized discriminator is a caller error, never a no-op.

use crate::error::{Error, Result};
use crate::semantics::Semantics;
use crate::summary::Summary;
use std::fmt;
use std::str::FromStr;

/// The supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    JsonLd,
    Turtle,
    Tsv,
}

impl OutputFormat {
    /// File extension used when writing `<original-filename>.<ext>`.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::JsonLd => "jsonld",
            OutputFormat::Turtle => "ttl",
            OutputFormat::Tsv => "tsv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(name: &str) -> Result<OutputFormat> {
        match name {
            "json" => Ok(OutputFormat::Json),
            "json-ld" | "jsonld" => Ok(OutputFormat::JsonLd),
            "turtle" | "ttl" => Ok(OutputFormat::Turtle),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::JsonLd => "json-ld",
            OutputFormat::Turtle => "turtle",
            OutputFormat::Tsv => "tsv",
        };
        write!(f, "{name}")
    }
}

/// Stateless encoder facade over one summary.
pub struct Converter<'a> {
    summary: &'a Summary,
    id: Option<&'a str>,
}

impl<'a> Converter<'a> {
    pub fn new(summary: &'a Summary, id: Option<&'a str>) -> Converter<'a> {
        Converter { summary, id }
    }

    pub fn convert_to(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.to_json(),
            OutputFormat::JsonLd => self.to_jsonld(),
            OutputFormat::Turtle => Ok(self.to_turtle()),
            OutputFormat::Tsv => Ok(self.to_tsv()),
        }
    }

    /// Structural dump of the summary. With an identifier override the
    /// summary nests under that identifier as the single key.
    pub fn to_json(&self) -> Result<String> {
        let json = match self.id {
            Some(id) => {
                let mut wrapper = serde_json::Map::new();
                wrapper.insert(id.to_string(), serde_json::to_value(self.summary)?);
                serde_json::to_string(&serde_json::Value::Object(wrapper))?
            }
            None => serde_json::to_string(self.summary)?,
        };
        Ok(json)
    }

    pub fn to_jsonld(&self) -> Result<String> {
        let object = Semantics::new(self.summary, self.id).json_ld();
        Ok(serde_json::to_string(&object)?)
    }

    pub fn to_turtle(&self) -> String {
        Semantics::new(self.summary, self.id).turtle()
    }

    /// One tab-separated line in fixed column order. Absent values render
    /// as empty columns, never as errors.
    pub fn to_tsv(&self) -> String {
        let s = self.summary;
        let columns: [String; 17] = [
            s.identifier(self.id),
            s.fastqc_version.clone(),
            s.filename.clone(),
            s.file_type.clone(),
            s.encoding.clone(),
            s.total_sequences.to_string(),
            opt_str(s.filtered_sequences),
            s.sequence_length.clone(),
            s.min_length.to_string(),
            s.max_length.to_string(),
            opt_str(s.mean_sequence_length),
            opt_str(s.median_sequence_length),
            s.percent_gc.to_string(),
            opt_str(s.total_duplicate_percentage),
            opt_str(s.overall_mean_quality_score),
            opt_str(s.overall_median_quality_score),
            opt_str(s.overall_n_content),
        ];
        columns.join("\t")
    }
}

fn opt_str<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
