//! FastQC report parsing module
//!
//! Splits the raw `fastqc_data.txt` text into named module blocks and
//! extracts scalar fields and per-module matrices from them. The grammar
//! is irregular across sections: every section ends with `>>END_MODULE`,
//! fields are tab-separated, lines starting with `#` are column headers —
//! except the `#Total Duplicate Percentage` pseudo-row inside the
//! Sequence Duplication Levels module, which is data.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Section terminator line
pub const MODULE_TERMINATOR: &str = ">>END_MODULE";

/// Prefix of a module tag line, e.g. `>>Basic Statistics`
const TAG_PREFIX: &str = ">>";

/// Prefix of a column-header line
const HEADER_PREFIX: &str = "#";

/// The one header-looking line that is actually data
const DUPLICATE_PSEUDO_ROW: &str = "#Total Duplicate Percentage";

/// A tabular module: ordered rows of tab-split string fields.
/// Every row of a given matrix has the same field count.
pub type Matrix = Vec<Vec<String>>;

/// The closed set of FastQC modules this crate knows how to extract.
///
/// Each identity carries its parsing rules: the literal tag string, whether
/// the module is mandatory, and the documented data-row arity where the
/// module has a fixed column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    BasicStatistics,
    PerBaseSequenceQuality,
    PerTileSequenceQuality,
    PerSequenceQualityScores,
    PerBaseSequenceContent,
    PerSequenceGcContent,
    PerBaseNContent,
    SequenceLengthDistribution,
    SequenceDuplicationLevels,
    OverrepresentedSequences,
    AdapterContent,
    KmerContent,
}

impl ModuleKind {
    /// All known modules, in canonical report order.
    pub const ALL: [ModuleKind; 12] = [
        ModuleKind::BasicStatistics,
        ModuleKind::PerBaseSequenceQuality,
        ModuleKind::PerTileSequenceQuality,
        ModuleKind::PerSequenceQualityScores,
        ModuleKind::PerBaseSequenceContent,
        ModuleKind::PerSequenceGcContent,
        ModuleKind::PerBaseNContent,
        ModuleKind::SequenceLengthDistribution,
        ModuleKind::SequenceDuplicationLevels,
        ModuleKind::OverrepresentedSequences,
        ModuleKind::AdapterContent,
        ModuleKind::KmerContent,
    ];

    /// The literal module name as it appears in the tag line.
    pub fn tag(self) -> &'static str {
        match self {
            ModuleKind::BasicStatistics => "Basic Statistics",
            ModuleKind::PerBaseSequenceQuality => "Per base sequence quality",
            ModuleKind::PerTileSequenceQuality => "Per tile sequence quality",
            ModuleKind::PerSequenceQualityScores => "Per sequence quality scores",
            ModuleKind::PerBaseSequenceContent => "Per base sequence content",
            ModuleKind::PerSequenceGcContent => "Per sequence GC content",
            ModuleKind::PerBaseNContent => "Per base N content",
            ModuleKind::SequenceLengthDistribution => "Sequence Length Distribution",
            ModuleKind::SequenceDuplicationLevels => "Sequence Duplication Levels",
            ModuleKind::OverrepresentedSequences => "Overrepresented sequences",
            ModuleKind::AdapterContent => "Adapter Content",
            ModuleKind::KmerContent => "Kmer Content",
        }
    }

    /// Documented data-row arity, where the module has a fixed column count.
    ///
    /// Per-tile quality and adapter content vary across FastQC versions and
    /// are not enforced.
    pub fn arity(self) -> Option<usize> {
        match self {
            ModuleKind::BasicStatistics => Some(2),
            ModuleKind::PerBaseSequenceQuality => Some(7),
            ModuleKind::PerTileSequenceQuality => None,
            ModuleKind::PerSequenceQualityScores => Some(2),
            ModuleKind::PerBaseSequenceContent => Some(5),
            ModuleKind::PerSequenceGcContent => Some(2),
            ModuleKind::PerBaseNContent => Some(2),
            ModuleKind::SequenceLengthDistribution => Some(2),
            ModuleKind::SequenceDuplicationLevels => Some(3),
            ModuleKind::OverrepresentedSequences => Some(4),
            ModuleKind::AdapterContent => None,
            ModuleKind::KmerContent => Some(5),
        }
    }

    /// Only Basic Statistics must be present, and must come first.
    pub fn is_mandatory(self) -> bool {
        matches!(self, ModuleKind::BasicStatistics)
    }
}

/// One named report section: its tag and every line of the block,
/// tab-split, in source order (tag and header lines included).
#[derive(Debug, Clone)]
pub struct ModuleBlock {
    pub tag: String,
    pub rows: Vec<Vec<String>>,
}

impl ModuleBlock {
    fn from_lines(lines: &[&str]) -> Option<ModuleBlock> {
        let rows: Vec<Vec<String>> = lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| line.split('\t').map(str::to_string).collect())
            .collect();
        if rows.is_empty() {
            return None;
        }
        // The tag line is usually first, but the Basic Statistics block is
        // preceded by the ##FastQC version line.
        let tag = rows
            .iter()
            .find(|row| row[0].starts_with(TAG_PREFIX))
            .map(|row| row[0].trim_start_matches(TAG_PREFIX).to_string())?;
        Some(ModuleBlock { tag, rows })
    }

    /// Data rows: everything except the tag line and `#` header lines,
    /// keeping the duplicate-percentage pseudo-row out of matrix views.
    fn data_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .filter(|row| {
                !row[0].starts_with(TAG_PREFIX)
                    && !row[0].starts_with(HEADER_PREFIX)
            })
            .cloned()
            .collect()
    }

    /// The `#Total Duplicate Percentage` pseudo-row, if this block has one.
    fn pseudo_row(&self) -> Option<&Vec<String>> {
        self.rows
            .iter()
            .find(|row| row[0].starts_with(DUPLICATE_PSEUDO_ROW))
    }
}

/// A parsed report: the ordered module blocks plus the Basic Statistics
/// name→value map.
#[derive(Debug, Clone)]
pub struct Report {
    blocks: Vec<ModuleBlock>,
    basic: HashMap<String, String>,
}

/// Scalar fields extracted from the Basic Statistics module.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicStatistics {
    pub fastqc_version: String,
    pub filename: String,
    pub file_type: String,
    pub encoding: String,
    pub total_sequences: u64,
    pub sequences_flagged_as_poor_quality: Option<u64>,
    pub filtered_sequences: Option<u64>,
    pub sequence_length: String,
    pub percent_gc: f64,
}

impl Report {
    /// Split raw report text on the `>>END_MODULE` terminator into ordered
    /// module blocks and index the mandatory Basic Statistics fields.
    pub fn parse(text: &str) -> Result<Report> {
        if text.trim().is_empty() {
            return Err(Error::MalformedReport("empty input".to_string()));
        }
        if !text.contains(MODULE_TERMINATOR) {
            return Err(Error::MalformedReport(format!(
                "section terminator {MODULE_TERMINATOR} never occurs"
            )));
        }

        let blocks: Vec<ModuleBlock> = text
            .split(MODULE_TERMINATOR)
            .filter_map(|chunk| {
                let lines: Vec<&str> = chunk.lines().collect();
                ModuleBlock::from_lines(&lines)
            })
            .collect();

        if blocks.is_empty() {
            return Err(Error::MalformedReport(
                "no module blocks found".to_string(),
            ));
        }
        if blocks[0].tag != ModuleKind::BasicStatistics.tag() {
            return Err(Error::MissingMandatoryModule(
                ModuleKind::BasicStatistics.tag(),
            ));
        }

        // Two-field rows of the first block, header and tag lines included:
        // the ##FastQC version line and the tag line both carry meaning here.
        let basic: HashMap<String, String> = blocks[0]
            .rows
            .iter()
            .filter(|row| row.len() == 2)
            .map(|row| (row[0].clone(), row[1].clone()))
            .collect();

        Ok(Report { blocks, basic })
    }

    fn block(&self, kind: ModuleKind) -> Option<&ModuleBlock> {
        self.blocks.iter().find(|b| b.tag == kind.tag())
    }

    fn required(&self, key: &'static str) -> Result<&str> {
        self.basic
            .get(key)
            .map(String::as_str)
            .ok_or(Error::FieldNotFound(key))
    }

    fn required_u64(&self, key: &'static str) -> Result<u64> {
        let raw = self.required(key)?;
        raw.parse().map_err(|_| {
            Error::MalformedReport(format!("{key} is not an integer: {raw}"))
        })
    }

    fn optional_u64(&self, key: &str) -> Result<Option<u64>> {
        match self.basic.get(key) {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| {
                Error::MalformedReport(format!("{key} is not an integer: {raw}"))
            }),
        }
    }

    /// Extract the mandatory Basic Statistics scalars.
    ///
    /// `Filtered Sequences` and `Sequences flagged as poor quality`
    /// alternate across FastQC versions, so both are optional.
    pub fn basic_statistics(&self) -> Result<BasicStatistics> {
        let fastqc_version = self.required("##FastQC")?.to_string();
        let filename = self.required("Filename")?.to_string();
        let file_type = self.required("File type")?.to_string();
        let encoding = self.required("Encoding")?.to_string();
        let total_sequences = self.required_u64("Total Sequences")?;
        let sequences_flagged_as_poor_quality =
            self.optional_u64("Sequences flagged as poor quality")?;
        let filtered_sequences = self.optional_u64("Filtered Sequences")?;
        let sequence_length = self.required("Sequence length")?.to_string();
        let percent_gc_raw = self.required("%GC")?;
        let percent_gc = percent_gc_raw.parse().map_err(|_| {
            Error::MalformedReport(format!("%GC is not numeric: {percent_gc_raw}"))
        })?;
        Ok(BasicStatistics {
            fastqc_version,
            filename,
            file_type,
            encoding,
            total_sequences,
            sequences_flagged_as_poor_quality,
            filtered_sequences,
            sequence_length,
            percent_gc,
        })
    }

    /// Extract a module's data rows, with tag and header lines stripped.
    ///
    /// Returns `None` when the module is absent — most modules are optional
    /// depending on FastQC configuration. Rows with a field count different
    /// from the module's documented arity make the report malformed.
    pub fn matrix(&self, kind: ModuleKind) -> Result<Option<Matrix>> {
        let block = match self.block(kind) {
            Some(block) => block,
            None => return Ok(None),
        };
        let rows = block.data_rows();
        if let Some(arity) = kind.arity() {
            if let Some(bad) = rows.iter().find(|row| row.len() != arity) {
                return Err(Error::MalformedReport(format!(
                    "{} row has {} fields, expected {arity}: {}",
                    kind.tag(),
                    bad.len(),
                    bad.join("\\t"),
                )));
            }
        }
        Ok(Some(rows))
    }

    /// The total duplicate percentage from the pseudo-row embedded in the
    /// Sequence Duplication Levels module. `None` when the module is absent.
    pub fn total_duplicate_percentage(&self) -> Result<Option<f64>> {
        let block = match self.block(ModuleKind::SequenceDuplicationLevels) {
            Some(block) => block,
            None => return Ok(None),
        };
        let row = block.pseudo_row().ok_or_else(|| {
            Error::MalformedReport(
                "Sequence Duplication Levels has no Total Duplicate Percentage row"
                    .to_string(),
            )
        })?;
        let raw = row.get(1).map(String::as_str).unwrap_or("");
        let value = raw.parse().map_err(|_| {
            Error::MalformedReport(format!(
                "Total Duplicate Percentage is not numeric: {raw}"
            ))
        })?;
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::SAMPLE_REPORT;

    #[test]
    fn test_parse_splits_modules() {
        let report = Report::parse(SAMPLE_REPORT).unwrap();
        assert!(report.block(ModuleKind::BasicStatistics).is_some());
        assert!(report.block(ModuleKind::PerBaseSequenceQuality).is_some());
        assert!(report.block(ModuleKind::KmerContent).is_none());
    }

    #[test]
    fn test_basic_statistics_fields() {
        let report = Report::parse(SAMPLE_REPORT).unwrap();
        let basic = report.basic_statistics().unwrap();
        assert_eq!(basic.fastqc_version, "0.10.1");
        assert_eq!(basic.filename, "sample.fastq");
        assert_eq!(basic.file_type, "Conventional base calls");
        assert_eq!(basic.encoding, "Sanger / Illumina 1.9");
        assert_eq!(basic.total_sequences, 1000);
        assert_eq!(basic.filtered_sequences, Some(0));
        assert_eq!(basic.sequence_length, "100");
        assert!((basic.percent_gc - 48.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_matrix_strips_tag_and_headers() {
        let report = Report::parse(SAMPLE_REPORT).unwrap();
        let matrix = report
            .matrix(ModuleKind::PerBaseSequenceQuality)
            .unwrap()
            .unwrap();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0][0], "1");
        assert!(matrix.iter().all(|row| row.len() == 7));
    }

    #[test]
    fn test_absent_module_is_none() {
        let report = Report::parse(SAMPLE_REPORT).unwrap();
        assert!(report.matrix(ModuleKind::KmerContent).unwrap().is_none());
    }

    #[test]
    fn test_pseudo_row_is_data_not_header() {
        let report = Report::parse(SAMPLE_REPORT).unwrap();
        let pct = report.total_duplicate_percentage().unwrap().unwrap();
        assert!((pct - 12.5).abs() < f64::EPSILON);
        // but it must not leak into the matrix view
        let matrix = report
            .matrix(ModuleKind::SequenceDuplicationLevels)
            .unwrap()
            .unwrap();
        assert!(matrix.iter().all(|row| !row[0].starts_with('#')));
    }

    #[test]
    fn test_missing_terminator_is_malformed() {
        let err = Report::parse("not a fastqc report\n").unwrap_err();
        assert!(matches!(err, Error::MalformedReport(_)));
    }

    #[test]
    fn test_basic_statistics_must_come_first() {
        let text = "\
>>Per base sequence quality\tpass
#Base\tMean\tMedian\tLower Quartile\tUpper Quartile\t10th Percentile\t90th Percentile
1\t30.0\t31.0\t28.0\t33.0\t26.0\t35.0
>>END_MODULE
";
        let err = Report::parse(text).unwrap_err();
        assert!(matches!(err, Error::MissingMandatoryModule(_)));
    }

    #[test]
    fn test_missing_required_field() {
        let text = "\
##FastQC\t0.10.1
>>Basic Statistics\tpass
#Measure\tValue
Filename\tsample.fastq
>>END_MODULE
";
        let report = Report::parse(text).unwrap();
        let err = report.basic_statistics().unwrap_err();
        assert!(matches!(err, Error::FieldNotFound("File type")));
    }

    #[test]
    fn test_arity_mismatch_is_malformed() {
        let text = "\
##FastQC\t0.10.1
>>Basic Statistics\tpass
Filename\tsample.fastq
>>END_MODULE
>>Per base N content\tpass
#Base\tN-Count
1\t0.0\textra
>>END_MODULE
";
        let report = Report::parse(text).unwrap();
        let err = report.matrix(ModuleKind::PerBaseNContent).unwrap_err();
        assert!(matches!(err, Error::MalformedReport(_)));
    }
}
