/// ffa_engine: flood frequency analysis from raw discharge observations.
///
/// A pure, stateless statistical engine: it reduces an irregular time
/// series to an Annual Maxima Series, assigns empirical plotting positions,
/// fits one of five extreme-value distributions, and interpolates
/// design-flood predictions (Q10/Q50/Q100/Q500) from the fitted curve.
/// File parsing, chart rendering, and narrative reporting are collaborator
/// concerns that only read [`AnalysisResult`] fields.
///
/// # Module structure
///
/// ```text
/// ffa_engine
/// ├── model       — shared data types (AnnualMaximum, CurvePoint, FfaError, …)
/// ├── ams         — annual maxima extraction from raw (date, value) rows
/// ├── analysis
/// │   ├── moments     — sample mean / standard deviation / skewness
/// │   ├── probit      — inverse standard normal CDF approximation
/// │   ├── gamma       — Lanczos Gamma function
/// │   ├── plotting    — empirical Weibull plotting positions
/// │   ├── fitters     — Gumbel, Normal, Log-Normal, Log-Pearson III, Weibull
/// │   └── interpolate — log-space interpolation over a fitted curve
/// └── fixtures (test only) — representative rows and annual maxima
/// ```
///
/// # Entry points
///
/// The two operations collaborators consume:
///
/// ```
/// use ffa_engine::{Distribution, Granularity, analyze, extract_annual_maxima};
/// use std::collections::HashMap;
///
/// let rows: Vec<HashMap<String, String>> = vec![
///     [("year".to_string(), "1990".to_string()),
///      ("peak".to_string(), "44800".to_string())].into(),
///     [("year".to_string(), "1991".to_string()),
///      ("peak".to_string(), "26100".to_string())].into(),
/// ];
///
/// let ams = extract_annual_maxima(&rows, "year", "peak", Granularity::Annual);
/// let result = analyze(&ams, Distribution::Gumbel)?;
/// assert!(result.predictions.q100 > 0.0);
/// # Ok::<(), ffa_engine::FfaError>(())
/// ```

/// Public modules
pub mod ams;
pub mod analysis;
pub mod model;

#[cfg(test)]
pub(crate) mod fixtures;

pub use ams::extract_annual_maxima;
pub use analysis::analyze;
pub use analysis::fitters::{Distribution, RETURN_PERIODS};
pub use analysis::interpolate::predict;
pub use analysis::moments::{MomentSummary, moments};
pub use analysis::plotting::{PlottingPosition, plotting_positions};
pub use analysis::probit::z_score;
pub use model::{
    AnalysisResult, AnnualMaximum, CurvePoint, FfaError, Granularity, Predictions, SummaryStats,
};
