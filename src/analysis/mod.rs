/// Statistical analysis pipeline for the flood frequency engine.
///
/// Submodules:
/// - `moments`     — sample mean / standard deviation / skewness.
/// - `probit`      — inverse standard normal CDF approximation.
/// - `gamma`       — Lanczos Gamma function (Weibull scale parameter).
/// - `plotting`    — empirical Weibull plotting positions.
/// - `fitters`     — the five distribution fitters and their selector enum.
/// - `interpolate` — log-space interpolation over a fitted curve.
///
/// `analyze` wires them into the single entry point the presentation layer
/// consumes: one immutable [`AnalysisResult`] per invocation, no shared
/// state between calls.

pub mod fitters;
pub mod gamma;
pub mod interpolate;
pub mod moments;
pub mod plotting;
pub mod probit;

use log::info;

use crate::model::{AnalysisResult, AnnualMaximum, FfaError, Predictions, SummaryStats};
use fitters::Distribution;

/// Runs the full frequency analysis on an annual maxima series.
///
/// Produces the empirical plotting-position scatter, the fitted
/// discharge-vs-return-period curve for the requested distribution, sample
/// statistics, and the four headline design-flood predictions.
///
/// An empty series cannot be fitted and is refused with
/// [`FfaError::EmptySeries`] rather than yielding a curve of NaNs.
pub fn analyze(
    ams: &[AnnualMaximum],
    distribution: Distribution,
) -> Result<AnalysisResult, FfaError> {
    if ams.is_empty() {
        return Err(FfaError::EmptySeries);
    }

    let values: Vec<f64> = ams.iter().map(|a| a.value).collect();
    let sample = moments::moments(&values);

    let curve = distribution.fit(&values, &sample);
    let positions = plotting::plotting_positions(ams);

    let predictions = Predictions {
        q10: interpolate::predict(&curve, 10.0),
        q50: interpolate::predict(&curve, 50.0),
        q100: interpolate::predict(&curve, 100.0),
        q500: interpolate::predict(&curve, 500.0),
    };

    info!(
        "fitted {} over {} annual maxima (mean {:.1}, q100 {:.1})",
        distribution.as_str(),
        ams.len(),
        sample.mean,
        predictions.q100
    );

    Ok(AnalysisResult {
        positions,
        curve,
        stats: SummaryStats {
            mean: sample.mean,
            std_dev: sample.std_dev,
            skew: sample.skew,
            n: ams.len(),
        },
        predictions,
    })
}
