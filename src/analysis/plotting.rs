/// Empirical plotting positions (Weibull formula).
///
/// Assigns each historical annual maximum a rank-based exceedance
/// probability P = m/(n+1) and return period T = 1/P, where m is the
/// 1-based rank under a descending sort by discharge.
///
/// The output is a derived view, separately typed from the chronological
/// [`AnnualMaximum`] series: rank-dependent fields computed under one sort
/// order never leak into the series stored under another. This empirical
/// scatter is what gets compared against the fitted theoretical curve.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::model::AnnualMaximum;

/// One observed annual maximum with its empirical plotting position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlottingPosition {
    pub year: i32,
    pub value: f64,
    /// 1-based rank under descending sort by value.
    pub rank: usize,
    /// Weibull plotting position, m/(n+1), strictly inside (0, 1).
    pub exceedance_probability: f64,
    /// Empirical return period, 1/P, in years.
    pub return_period: f64,
}

/// Ranks the series descending by value and assigns plotting positions.
///
/// Ties keep their chronological relative order (stable sort), so the
/// assignment is deterministic for any input.
pub fn plotting_positions(ams: &[AnnualMaximum]) -> Vec<PlottingPosition> {
    let mut sorted: Vec<AnnualMaximum> = ams.to_vec();
    sorted.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

    let n = sorted.len() as f64;
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let rank = index + 1;
            let exceedance_probability = rank as f64 / (n + 1.0);
            PlottingPosition {
                year: item.year,
                value: item.value,
                rank,
                exceedance_probability,
                return_period: 1.0 / exceedance_probability,
            }
        })
        .collect()
}
