/// Shared data types for the flood frequency analysis engine.
///
/// Everything here is a plain value type: the engine is a pure function of
/// its inputs, so these structs are created fresh per analysis call and
/// never carry shared or persisted state. Types read by the presentation
/// layer derive Serialize/Deserialize so results cross the boundary as JSON
/// without adapter code.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for the analysis API.
///
/// Malformed rows are a data-quality concern and are dropped silently during
/// extraction; these variants cover the failures a caller must hear about.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FfaError {
    /// Distribution selector did not match any supported fitter
    #[error("unsupported distribution: {0}")]
    UnsupportedDistribution(String),

    /// Time granularity selector did not match any supported mode
    #[error("unsupported granularity: {0}")]
    UnsupportedGranularity(String),

    /// Analysis requested on an empty annual maxima series
    #[error("annual maxima series is empty")]
    EmptySeries,
}

// ---------------------------------------------------------------------------
// Input side
// ---------------------------------------------------------------------------

/// Declared time resolution of the raw observation rows.
///
/// Annual data may carry a bare year ("1994") in its date column; the finer
/// granularities always carry a parseable calendar date or datetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Annual,
    Monthly,
    Daily,
    Hourly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Annual => "annual",
            Granularity::Monthly => "monthly",
            Granularity::Daily => "daily",
            Granularity::Hourly => "hourly",
        }
    }
}

impl FromStr for Granularity {
    type Err = FfaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" => Ok(Granularity::Annual),
            "monthly" => Ok(Granularity::Monthly),
            "daily" => Ok(Granularity::Daily),
            "hourly" => Ok(Granularity::Hourly),
            other => Err(FfaError::UnsupportedGranularity(other.to_string())),
        }
    }
}

/// One peak observation per hydrological year, in chronological order.
///
/// This is the canonical series produced by extraction. Rank-dependent
/// fields live on [`crate::analysis::plotting::PlottingPosition`], a derived
/// view computed under a different sort order - the chronological series is
/// never mutated after extraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualMaximum {
    pub year: i32,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Output side
// ---------------------------------------------------------------------------

/// One sample of the fitted discharge-vs-return-period curve.
///
/// Every fitter emits these over the same canonical return-period ladder
/// ([`crate::analysis::fitters::RETURN_PERIODS`]), so chart rendering and
/// interpolation can assume aligned x-axis sampling across distributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub return_period: f64,
    pub discharge: f64,
}

/// Sample statistics of the analyzed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub std_dev: f64,
    pub skew: f64,
    pub n: usize,
}

/// Headline design-flood predictions interpolated from the fitted curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Predictions {
    pub q10: f64,
    pub q50: f64,
    pub q100: f64,
    pub q500: f64,
}

/// Complete output of one analysis invocation.
///
/// `positions` is the empirical scatter (observed maxima with rank-based
/// plotting positions); `curve` is the theoretical fit. The two must never
/// be conflated: residual comparison between them is exactly how fit
/// quality is judged downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub positions: Vec<crate::analysis::plotting::PlottingPosition>,
    pub curve: Vec<CurvePoint>,
    pub stats: SummaryStats,
    pub predictions: Predictions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_labels_round_trip() {
        for g in [
            Granularity::Annual,
            Granularity::Monthly,
            Granularity::Daily,
            Granularity::Hourly,
        ] {
            let parsed: Granularity = g.as_str().parse().expect("label should parse back");
            assert_eq!(parsed, g);
        }
    }

    #[test]
    fn test_granularity_parse_is_case_insensitive() {
        assert_eq!("Annual".parse::<Granularity>(), Ok(Granularity::Annual));
        assert_eq!("  HOURLY ".parse::<Granularity>(), Ok(Granularity::Hourly));
    }

    #[test]
    fn test_unknown_granularity_fails_loudly() {
        let err = "fortnightly".parse::<Granularity>().unwrap_err();
        assert_eq!(
            err,
            FfaError::UnsupportedGranularity("fortnightly".to_string())
        );
        assert!(err.to_string().contains("fortnightly"));
    }
}
