/// Test fixtures: representative observation rows and annual maxima.
///
/// The discharge magnitudes mirror USGS annual peak records for a large
/// midwestern river gauge (tens of thousands of cfs, mildly right-skewed),
/// so fitter tests run against realistic flood statistics rather than toy
/// numbers. Values are synthetic - no claim of matching any real site.

use std::collections::HashMap;

use crate::model::AnnualMaximum;

/// Builds a raw observation row keyed by the default column names.
pub(crate) fn row(date: &str, value: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("date".to_string(), date.to_string());
    map.insert("value".to_string(), value.to_string());
    map
}

/// Deterministic permutation of a row set, for order-invariance tests.
pub(crate) fn shuffled(rows: &[HashMap<String, String>]) -> Vec<HashMap<String, String>> {
    let mut permuted: Vec<HashMap<String, String>> = rows.to_vec();
    permuted.reverse();
    let shift = permuted.len() / 3;
    permuted.rotate_left(shift);
    permuted
}

/// Fifteen years of annual peak discharge (cfs).
pub(crate) fn fixture_ams() -> Vec<AnnualMaximum> {
    vec![
        AnnualMaximum { year: 1982, value: 44800.0 },
        AnnualMaximum { year: 1983, value: 26100.0 },
        AnnualMaximum { year: 1984, value: 30900.0 },
        AnnualMaximum { year: 1985, value: 22400.0 },
        AnnualMaximum { year: 1986, value: 35300.0 },
        AnnualMaximum { year: 1987, value: 19700.0 },
        AnnualMaximum { year: 1988, value: 14200.0 },
        AnnualMaximum { year: 1989, value: 24600.0 },
        AnnualMaximum { year: 1990, value: 27800.0 },
        AnnualMaximum { year: 1991, value: 21500.0 },
        AnnualMaximum { year: 1992, value: 25300.0 },
        AnnualMaximum { year: 1993, value: 52600.0 },
        AnnualMaximum { year: 1994, value: 23900.0 },
        AnnualMaximum { year: 1995, value: 29400.0 },
        AnnualMaximum { year: 1996, value: 33100.0 },
    ]
}
