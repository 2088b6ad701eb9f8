/// Sample moment estimation (mean, standard deviation, skewness).
///
/// Used both on raw discharge values and on log10-transformed values for
/// the log-based fitters; callers supply the pre-transformed sample.
///
/// Degenerate samples resolve to zero rather than failing, keeping the
/// downstream frequency-factor formulas total. Callers dividing by the
/// standard deviation or skew must guard those zeros.

use serde::{Deserialize, Serialize};

/// Mean, standard deviation, and skewness of a numeric sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub skew: f64,
}

/// Computes sample moments.
///
/// Standard deviation uses Bessel's correction (n - 1 divisor) and is
/// defined as 0 for n <= 1. Skewness is the standardized third moment with
/// the n / ((n-1)(n-2)) small-sample factor, defined as 0 for n <= 2 or a
/// zero standard deviation.
pub fn moments(values: &[f64]) -> MomentSummary {
    let n = values.len();
    if n == 0 {
        return MomentSummary { mean: 0.0, std_dev: 0.0, skew: 0.0 };
    }

    let nf = n as f64;
    let mean = values.iter().sum::<f64>() / nf;

    let std_dev = if n > 1 {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (nf - 1.0);
        variance.sqrt()
    } else {
        0.0
    };

    let skew = if n > 2 && std_dev > 0.0 {
        let cubed_sum = values
            .iter()
            .map(|v| ((v - mean) / std_dev).powi(3))
            .sum::<f64>();
        nf / ((nf - 1.0) * (nf - 2.0)) * cubed_sum
    } else {
        0.0
    };

    MomentSummary { mean, std_dev, skew }
}
