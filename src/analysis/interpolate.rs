/// Return-period interpolation over a fitted curve.
///
/// The canonical ladder is sampled log-evenly enough that linear
/// interpolation in log10(T) between neighboring points stays faithful to
/// the fitted distribution; interpolating linearly in T would overshoot
/// badly across the wide high-return-period gaps (500 to 1000 years).

use crate::model::CurvePoint;

/// Floating tolerance for treating a target as an exact ladder hit.
const EXACT_TOLERANCE: f64 = 0.01;

/// Predicts the discharge for return period `t` from a fitted curve.
///
/// An exact ladder point (within [`EXACT_TOLERANCE`]) returns its discharge
/// directly. Targets outside the curve's span return 0.0 - a documented
/// sentinel, not a prediction; the ladder already covers the operationally
/// relevant range, so callers must not present the sentinel as a value.
pub fn predict(curve: &[CurvePoint], t: f64) -> f64 {
    if let Some(exact) = curve.iter().find(|c| (c.return_period - t).abs() < EXACT_TOLERANCE) {
        return exact.discharge;
    }

    let (Some(first), Some(last)) = (curve.first(), curve.last()) else {
        return 0.0;
    };
    if t < first.return_period || t > last.return_period {
        return 0.0;
    }

    for pair in curve.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        if lower.return_period <= t && t <= upper.return_period {
            let fraction = (t.log10() - lower.return_period.log10())
                / (upper.return_period.log10() - lower.return_period.log10());
            return lower.discharge + fraction * (upper.discharge - lower.discharge);
        }
    }

    0.0
}
