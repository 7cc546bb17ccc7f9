//! The per-report summary record
//!
//! One immutable `Summary` is assembled per report and handed read-only to
//! every encoder. Optional modules surface as `None`, never as errors, and
//! derived statistics that depend on an absent module are `None` as well.

use crate::error::Result;
use crate::parser::{Matrix, ModuleKind, Report};
use crate::stats::{self, QualityColumn};
use serde::{Deserialize, Serialize};

/// Everything extracted and derived from one FastQC report.
///
/// Field order matches the JSON layout downstream consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub fastqc_version: String,
    pub filename: String,
    pub file_type: String,
    pub encoding: String,
    pub total_sequences: u64,
    pub sequences_flagged_as_poor_quality: Option<u64>,
    pub filtered_sequences: Option<u64>,
    pub sequence_length: String,
    pub percent_gc: f64,
    pub per_base_sequence_quality: Option<Matrix>,
    pub per_tile_sequence_quality: Option<Matrix>,
    pub per_sequence_quality_scores: Option<Matrix>,
    pub per_base_sequence_content: Option<Matrix>,
    pub per_sequence_gc_content: Option<Matrix>,
    pub per_base_n_content: Option<Matrix>,
    pub sequence_length_distribution: Option<Matrix>,
    pub total_duplicate_percentage: Option<f64>,
    pub sequence_duplication_levels: Option<Matrix>,
    pub overrepresented_sequences: Option<Matrix>,
    pub adapter_content: Option<Matrix>,
    pub kmer_content: Option<Matrix>,
    pub min_length: u64,
    pub max_length: u64,
    pub overall_mean_quality_score: Option<f64>,
    pub overall_median_quality_score: Option<f64>,
    pub overall_n_content: Option<f64>,
    pub mean_sequence_length: Option<f64>,
    pub median_sequence_length: Option<f64>,
}

impl Summary {
    /// Parse raw report text and assemble its summary.
    pub fn from_text(text: &str) -> Result<Summary> {
        Summary::from_report(&Report::parse(text)?)
    }

    /// Pure merge of extracted scalars, matrices and derived statistics.
    pub fn from_report(report: &Report) -> Result<Summary> {
        let basic = report.basic_statistics()?;
        let (min_length, max_length) = stats::min_max_length(&basic.sequence_length)?;

        let per_base_sequence_quality =
            report.matrix(ModuleKind::PerBaseSequenceQuality)?;
        let per_base_n_content = report.matrix(ModuleKind::PerBaseNContent)?;
        let sequence_length_distribution =
            report.matrix(ModuleKind::SequenceLengthDistribution)?;

        let overall_mean_quality_score = per_base_sequence_quality
            .as_ref()
            .map(|m| stats::overall_quality_score(m, QualityColumn::Mean))
            .transpose()?;
        let overall_median_quality_score = per_base_sequence_quality
            .as_ref()
            .map(|m| stats::overall_quality_score(m, QualityColumn::Median))
            .transpose()?;
        let overall_n_content = per_base_n_content
            .as_ref()
            .map(|m| stats::overall_n_content(m))
            .transpose()?;
        let mean_sequence_length = sequence_length_distribution
            .as_ref()
            .map(|m| stats::mean_sequence_length(m))
            .transpose()?;
        let median_sequence_length = sequence_length_distribution
            .as_ref()
            .map(|m| stats::median_sequence_length(m))
            .transpose()?;

        Ok(Summary {
            fastqc_version: basic.fastqc_version,
            filename: basic.filename,
            file_type: basic.file_type,
            encoding: basic.encoding,
            total_sequences: basic.total_sequences,
            sequences_flagged_as_poor_quality: basic.sequences_flagged_as_poor_quality,
            filtered_sequences: basic.filtered_sequences,
            sequence_length: basic.sequence_length,
            percent_gc: basic.percent_gc,
            per_base_sequence_quality,
            per_tile_sequence_quality: report.matrix(ModuleKind::PerTileSequenceQuality)?,
            per_sequence_quality_scores: report
                .matrix(ModuleKind::PerSequenceQualityScores)?,
            per_base_sequence_content: report.matrix(ModuleKind::PerBaseSequenceContent)?,
            per_sequence_gc_content: report.matrix(ModuleKind::PerSequenceGcContent)?,
            per_base_n_content,
            sequence_length_distribution,
            total_duplicate_percentage: report.total_duplicate_percentage()?,
            sequence_duplication_levels: report
                .matrix(ModuleKind::SequenceDuplicationLevels)?,
            overrepresented_sequences: report
                .matrix(ModuleKind::OverrepresentedSequences)?,
            adapter_content: report.matrix(ModuleKind::AdapterContent)?,
            kmer_content: report.matrix(ModuleKind::KmerContent)?,
            min_length,
            max_length,
            overall_mean_quality_score,
            overall_median_quality_score,
            overall_n_content,
            mean_sequence_length,
            median_sequence_length,
        })
    }

    /// The report identifier: the caller-supplied override when given,
    /// otherwise the filename stem before the first dot.
    pub fn identifier(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => id.to_string(),
            None => self
                .filename
                .split('.')
                .next()
                .unwrap_or(&self.filename)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::SAMPLE_REPORT;

    #[test]
    fn test_assembles_scalars_and_derived_stats() {
        let summary = Summary::from_text(SAMPLE_REPORT).unwrap();
        assert_eq!(summary.fastqc_version, "0.10.1");
        assert_eq!(summary.total_sequences, 1000);
        assert_eq!(summary.min_length, 100);
        assert_eq!(summary.max_length, 100);
        assert!((summary.overall_mean_quality_score.unwrap() - 20.0).abs() < 1e-9);
        assert!((summary.overall_median_quality_score.unwrap() - 20.0).abs() < 1e-9);
        assert!((summary.overall_n_content.unwrap() - 0.5).abs() < 1e-9);
        assert!((summary.mean_sequence_length.unwrap() - 100.0).abs() < 1e-9);
        assert!((summary.median_sequence_length.unwrap() - 100.0).abs() < 1e-9);
        assert!((summary.total_duplicate_percentage.unwrap() - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_absent_modules_are_none_not_errors() {
        let summary = Summary::from_text(SAMPLE_REPORT).unwrap();
        assert!(summary.kmer_content.is_none());
        assert!(summary.adapter_content.is_none());
        assert!(summary.per_tile_sequence_quality.is_none());
        // matrices that are present stay in source order
        assert_eq!(summary.per_base_sequence_quality.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let a = Summary::from_text(SAMPLE_REPORT).unwrap();
        let b = Summary::from_text(SAMPLE_REPORT).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_identifier_defaults_to_filename_stem() {
        let summary = Summary::from_text(SAMPLE_REPORT).unwrap();
        assert_eq!(summary.identifier(None), "sample");
        assert_eq!(summary.identifier(Some("RUN42")), "RUN42");
    }
}
