/// Parametric extreme-value distribution fitters.
///
/// Five interchangeable method-of-moments / frequency-factor fitters, each
/// producing a discharge-vs-return-period curve over the same canonical
/// ladder so charts and the interpolator can assume aligned sampling.
/// Parameter estimation is deliberately approximate (no maximum
/// likelihood): moments in for Gumbel/Normal/Weibull, log10-space moments
/// for Log-Normal and Log-Pearson III.
///
/// Selection is a closed enum matched exhaustively - there is no fallback
/// fitter. Unrecognized selector strings fail in [`FromStr`] with
/// [`FfaError::UnsupportedDistribution`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::analysis::gamma::gamma;
use crate::analysis::moments::{MomentSummary, moments};
use crate::analysis::probit::z_score;
use crate::model::{CurvePoint, FfaError};

/// Canonical return-period ladder (years), shared by every fitter.
pub const RETURN_PERIODS: [f64; 13] = [
    1.01, 1.1, 1.25, 1.5, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0,
];

/// Euler-Mascheroni constant, truncated as in the frequency-factor
/// literature the Gumbel location formula comes from.
const EULER_GAMMA: f64 = 0.5772;

/// Substitute for non-positive discharges entering log10.
const LOG_FLOOR: f64 = 0.01;

/// Below this |skew|, the Log-Pearson III frequency factor collapses to the
/// normal quantile (guards the 2/g division; Wilson-Hilferty is continuous
/// in g at zero).
const SKEW_EPS: f64 = 1e-6;

/// Coefficient-of-variation exponent for the Weibull shape heuristic.
const WEIBULL_CV_EXPONENT: f64 = -1.086;

// ---------------------------------------------------------------------------
// Distribution selector
// ---------------------------------------------------------------------------

/// The closed set of supported extreme-value distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distribution {
    Gumbel,
    Normal,
    LogNormal,
    LogPearson3,
    Weibull,
}

impl Distribution {
    /// Every supported distribution, in presentation order.
    pub const ALL: [Distribution; 5] = [
        Distribution::Gumbel,
        Distribution::Normal,
        Distribution::LogNormal,
        Distribution::LogPearson3,
        Distribution::Weibull,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Distribution::Gumbel => "gumbel",
            Distribution::Normal => "normal",
            Distribution::LogNormal => "log-normal",
            Distribution::LogPearson3 => "log-pearson-iii",
            Distribution::Weibull => "weibull",
        }
    }

    /// Fits this distribution and samples it over [`RETURN_PERIODS`].
    ///
    /// `stats` must be the moments of `values`; the raw sample is consumed
    /// directly by the log-space fitters, which compute their own
    /// transformed moments.
    pub fn fit(self, values: &[f64], stats: &MomentSummary) -> Vec<CurvePoint> {
        match self {
            Distribution::Gumbel => gumbel_curve(stats),
            Distribution::Normal => normal_curve(stats),
            Distribution::LogNormal => log_normal_curve(values),
            Distribution::LogPearson3 => log_pearson3_curve(values),
            Distribution::Weibull => weibull_curve(stats),
        }
    }
}

impl FromStr for Distribution {
    type Err = FfaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gumbel" | "ev1" | "gumbel (ev1)" => Ok(Distribution::Gumbel),
            "normal" => Ok(Distribution::Normal),
            "log-normal" | "lognormal" => Ok(Distribution::LogNormal),
            "log-pearson-iii" | "log-pearson3" | "lp3" => Ok(Distribution::LogPearson3),
            "weibull" => Ok(Distribution::Weibull),
            other => Err(FfaError::UnsupportedDistribution(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Fitters
// ---------------------------------------------------------------------------

/// Gumbel (EV1) by method of moments.
///
/// Scale alpha = pi / (sqrt(6) * s), location u = mean - 0.5772 / alpha;
/// Q(T) = u - ln(-ln(1 - 1/T)) / alpha, clamped to >= 0.
fn gumbel_curve(stats: &MomentSummary) -> Vec<CurvePoint> {
    let alpha = (std::f64::consts::PI / 6.0_f64.sqrt()) / stats.std_dev;
    let u = stats.mean - EULER_GAMMA / alpha;

    RETURN_PERIODS
        .iter()
        .map(|&t| {
            let p = 1.0 - 1.0 / t;
            let discharge = u - (-p.ln()).ln() / alpha;
            CurvePoint { return_period: t, discharge: discharge.max(0.0) }
        })
        .collect()
}

/// Normal: Q(T) = mean + z(1 - 1/T) * s, clamped to >= 0.
fn normal_curve(stats: &MomentSummary) -> Vec<CurvePoint> {
    RETURN_PERIODS
        .iter()
        .map(|&t| {
            let z = z_score(1.0 - 1.0 / t);
            let discharge = stats.mean + z * stats.std_dev;
            CurvePoint { return_period: t, discharge: discharge.max(0.0) }
        })
        .collect()
}

/// Log10-transforms a sample, flooring non-positive values.
fn log_transform(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&v| if v > 0.0 { v.log10() } else { LOG_FLOOR.log10() })
        .collect()
}

/// Log-Normal: a normal fit on log10 values, mapped back through 10^x.
///
/// Not clamped - log space guarantees a positive discharge.
fn log_normal_curve(values: &[f64]) -> Vec<CurvePoint> {
    let logs = log_transform(values);
    let log_stats = moments(&logs);

    RETURN_PERIODS
        .iter()
        .map(|&t| {
            let z = z_score(1.0 - 1.0 / t);
            let log_q = log_stats.mean + z * log_stats.std_dev;
            CurvePoint { return_period: t, discharge: 10.0_f64.powf(log_q) }
        })
        .collect()
}

/// Log-Pearson Type III via the Wilson-Hilferty frequency factor.
///
/// K = (2/g) * ((1 + g*z/6 - g^2/36)^3 - 1) for log-space skew g; at
/// near-zero skew this degrades to the Log-Normal frequency factor K = z.
/// The approximation is known to lose reliability for |g| beyond about 2;
/// no clamp is applied, matching the method-of-moments convention of the
/// rest of this module.
fn log_pearson3_curve(values: &[f64]) -> Vec<CurvePoint> {
    let logs = log_transform(values);
    let log_stats = moments(&logs);
    let g = log_stats.skew;

    RETURN_PERIODS
        .iter()
        .map(|&t| {
            let z = z_score(1.0 - 1.0 / t);
            let k = if g.abs() < SKEW_EPS {
                z
            } else {
                (2.0 / g) * ((1.0 + g * z / 6.0 - g * g / 36.0).powi(3) - 1.0)
            };
            let log_q = log_stats.mean + k * log_stats.std_dev;
            CurvePoint { return_period: t, discharge: 10.0_f64.powf(log_q) }
        })
        .collect()
}

/// Two-parameter Weibull.
///
/// Shape from the coefficient-of-variation heuristic k = (s/mean)^-1.086,
/// scale lambda = mean / Gamma(1 + 1/k); Q(T) = lambda * (-ln(1/T))^(1/k),
/// clamped to >= 0. The shape heuristic is a rough fit carried for
/// compatibility; its error bound is uncharacterized.
fn weibull_curve(stats: &MomentSummary) -> Vec<CurvePoint> {
    let k = (stats.std_dev / stats.mean).powf(WEIBULL_CV_EXPONENT);
    let lambda = stats.mean / gamma(1.0 + 1.0 / k);

    RETURN_PERIODS
        .iter()
        .map(|&t| {
            let discharge = lambda * (-(1.0 / t).ln()).powf(1.0 / k);
            CurvePoint { return_period: t, discharge: discharge.max(0.0) }
        })
        .collect()
}
