//! Derived statistics over extracted FastQC matrices
//!
//! The only non-trivial arithmetic in the crate. Quality aggregation works
//! in the linear error-probability domain: Phred scores are converted with
//! `p = 10^(q / -10)`, averaged, and converted back. Averaging the
//! logarithmic scores directly gives a different (wrong) answer.

use crate::error::{Error, Result};
use crate::parser::Matrix;

/// Column of the per-base quality matrix to aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityColumn {
    Mean,
    Median,
}

impl QualityColumn {
    fn index(self) -> usize {
        match self {
            QualityColumn::Mean => 1,
            QualityColumn::Median => 2,
        }
    }
}

fn parse_field(raw: &str, statistic: &'static str) -> Result<f64> {
    raw.parse().map_err(|_| {
        Error::computation(statistic, format!("non-numeric field: {raw:?}"))
    })
}

/// Min and max read length from the Basic Statistics length spec, which is
/// either an exact integer literal or a `lo-hi` range.
pub fn min_max_length(sequence_length: &str) -> Result<(u64, u64)> {
    let parse = |raw: &str| {
        raw.trim().parse::<u64>().map_err(|_| {
            Error::computation(
                "min/max sequence length",
                format!("bad length spec: {sequence_length:?}"),
            )
        })
    };
    match sequence_length.split_once('-') {
        Some((lo, hi)) => Ok((parse(lo)?, parse(hi)?)),
        None => {
            let exact = parse(sequence_length)?;
            Ok((exact, exact))
        }
    }
}

/// Overall quality across base positions, aggregated in the linear
/// error-probability domain and converted back to the Phred scale.
pub fn overall_quality_score(per_base_quality: &Matrix, column: QualityColumn) -> Result<f64> {
    let statistic = "overall quality score";
    if per_base_quality.is_empty() {
        return Err(Error::computation(statistic, "empty quality matrix"));
    }
    let mut sum = 0.0;
    for row in per_base_quality {
        let q = parse_field(&row[column.index()], statistic)?;
        sum += 10f64.powf(q / -10.0);
    }
    let mean_probability = sum / per_base_quality.len() as f64;
    Ok(-10.0 * mean_probability.log10())
}

/// Arithmetic mean of the per-base N percentage column.
pub fn overall_n_content(per_base_n: &Matrix) -> Result<f64> {
    let statistic = "overall N content";
    if per_base_n.is_empty() {
        return Err(Error::computation(statistic, "empty N content matrix"));
    }
    let mut sum = 0.0;
    for row in per_base_n {
        sum += parse_field(&row[1], statistic)?;
    }
    Ok(sum / per_base_n.len() as f64)
}

/// Representative length of one distribution bin: the literal value for an
/// exact bin, the midpoint for a `lo-hi` range bin.
fn representative_length(token: &str, statistic: &'static str) -> Result<f64> {
    match token.split_once('-') {
        Some((lo, hi)) => {
            let lo = parse_field(lo, statistic)?;
            let hi = parse_field(hi, statistic)?;
            Ok((lo + hi) / 2.0)
        }
        None => parse_field(token, statistic),
    }
}

/// Weighted mean read length from the length distribution: the sum of
/// representative length times count over every bin, divided by the total
/// read count.
pub fn mean_sequence_length(distribution: &Matrix) -> Result<f64> {
    let statistic = "mean sequence length";
    if distribution.is_empty() {
        return Err(Error::computation(statistic, "empty length distribution"));
    }
    if distribution.len() == 1 {
        return representative_length(&distribution[0][0], statistic);
    }
    let mut weighted_sum = 0.0;
    let mut total_count = 0.0;
    for row in distribution {
        let length = representative_length(&row[0], statistic)?;
        let count = parse_field(&row[1], statistic)?;
        weighted_sum += length * count;
        total_count += count;
    }
    if total_count == 0.0 {
        return Err(Error::computation(statistic, "distribution counts sum to zero"));
    }
    Ok(weighted_sum / total_count)
}

/// Exact median read length over the multiset implied by the
/// (representative length, count) bins. Deterministic: bins are sorted by
/// length and the central elements located through cumulative counts.
pub fn median_sequence_length(distribution: &Matrix) -> Result<f64> {
    let statistic = "median sequence length";
    if distribution.is_empty() {
        return Err(Error::computation(statistic, "empty length distribution"));
    }
    if distribution.len() == 1 {
        return representative_length(&distribution[0][0], statistic);
    }

    let mut bins: Vec<(f64, u64)> = Vec::with_capacity(distribution.len());
    let mut total: u64 = 0;
    for row in distribution {
        let length = representative_length(&row[0], statistic)?;
        let count = parse_field(&row[1], statistic)?.round() as u64;
        if count == 0 {
            continue;
        }
        total += count;
        bins.push((length, count));
    }
    if total == 0 {
        return Err(Error::computation(statistic, "distribution counts sum to zero"));
    }
    bins.sort_by(|a, b| a.0.total_cmp(&b.0));

    // The middle element for an odd total, the average of the two central
    // elements for an even one; (total-1)/2 and total/2 cover both cases.
    let lower = element_at(&bins, (total - 1) / 2);
    let upper = element_at(&bins, total / 2);
    Ok((lower + upper) / 2.0)
}

fn element_at(bins: &[(f64, u64)], index: u64) -> f64 {
    let mut seen = 0;
    for &(length, count) in bins {
        seen += count;
        if index < seen {
            return length;
        }
    }
    // index is always < total by construction
    bins.last().map(|b| b.0).unwrap_or(0.0)
}
