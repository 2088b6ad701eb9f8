/// Annual Maxima Series extraction.
///
/// Reduces an irregular, possibly multi-granularity series of discharge
/// observations to one independent extreme value per year. Input rows are
/// field-name -> raw-string maps, as handed over by the ingestion layer
/// after it parses tabular or manually-entered data; this module owns no
/// file format.
///
/// Row-level failures (missing value, non-numeric value, unresolvable date)
/// are a data-quality policy, not a system error: the row is dropped
/// silently and the drop count is reported at debug level.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use log::debug;
use std::collections::{BTreeMap, HashMap};

use crate::model::{AnnualMaximum, Granularity};

/// Date-only layouts tried first; covers ISO and common US exports.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Datetime layouts for hourly/timeseries data. RFC 3339 (offset-bearing
/// gauge timestamps) is tried separately before these naive layouts.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
];

/// Extracts the Annual Maxima Series from raw observation rows.
///
/// For each row, `value_field` is parsed as a real number and `date_field`
/// is resolved to a year according to `granularity`. One running maximum is
/// kept per resolved year; the output holds one [`AnnualMaximum`] per year
/// that had at least one valid row, sorted ascending by year.
///
/// The result is invariant to input row order - only the per-year maximum
/// matters. An empty result is not an error here; callers decide whether an
/// empty series disables downstream fitting.
pub fn extract_annual_maxima(
    rows: &[HashMap<String, String>],
    date_field: &str,
    value_field: &str,
    granularity: Granularity,
) -> Vec<AnnualMaximum> {
    let mut yearly_max: BTreeMap<i32, f64> = BTreeMap::new();
    let mut dropped = 0usize;

    for row in rows {
        let value = row
            .get(value_field)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite());

        let year = row.get(date_field).and_then(|raw| resolve_year(raw, granularity));

        match (year, value) {
            (Some(year), Some(value)) => {
                let current = yearly_max.entry(year).or_insert(f64::NEG_INFINITY);
                if value > *current {
                    *current = value;
                }
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(
            "dropped {} of {} rows during annual maxima extraction",
            dropped,
            rows.len()
        );
    }

    yearly_max
        .into_iter()
        .map(|(year, value)| AnnualMaximum { year, value })
        .collect()
}

/// Resolves the year component of a raw date string.
///
/// Annual data may carry a bare 4-digit year, which is used directly.
/// Finer granularities always attempt a calendar parse; when that fails
/// (ad-hoc spreadsheet exports), a leading 4-digit run of the string is
/// taken as the year. `None` drops the row.
fn resolve_year(raw: &str, granularity: Granularity) -> Option<i32> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    match granularity {
        Granularity::Annual => {
            if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
                s.parse().ok()
            } else {
                calendar_year(s)
            }
        }
        Granularity::Monthly | Granularity::Daily | Granularity::Hourly => {
            calendar_year(s).or_else(|| leading_year(s))
        }
    }
}

/// Parses a calendar date or datetime and returns its year.
fn calendar_year(s: &str) -> Option<i32> {
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date.year());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.year());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.year());
        }
    }
    None
}

/// Takes the first four digits of a digit-prefixed string as the year.
fn leading_year(s: &str) -> Option<i32> {
    let prefix = s.as_bytes().iter().take_while(|b| b.is_ascii_digit()).count();
    if prefix >= 4 { s[..4].parse().ok() } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{row, shuffled};

    // --- Year resolution ----------------------------------------------------

    #[test]
    fn test_annual_granularity_accepts_bare_year() {
        assert_eq!(resolve_year("1994", Granularity::Annual), Some(1994));
        assert_eq!(resolve_year(" 2013 ", Granularity::Annual), Some(2013));
    }

    #[test]
    fn test_annual_granularity_accepts_full_date() {
        assert_eq!(resolve_year("1994-06-12", Granularity::Annual), Some(1994));
    }

    #[test]
    fn test_annual_granularity_has_no_digit_fallback() {
        // A 5-digit numeral is neither a bare year nor a calendar date.
        assert_eq!(resolve_year("19945", Granularity::Annual), None);
    }

    #[test]
    fn test_daily_granularity_parses_common_layouts() {
        assert_eq!(resolve_year("2013-04-18", Granularity::Daily), Some(2013));
        assert_eq!(resolve_year("2013/04/18", Granularity::Daily), Some(2013));
        assert_eq!(resolve_year("04/18/2013", Granularity::Daily), Some(2013));
    }

    #[test]
    fn test_hourly_granularity_parses_datetimes() {
        assert_eq!(
            resolve_year("2013-04-18T07:45:00", Granularity::Hourly),
            Some(2013)
        );
        assert_eq!(
            resolve_year("2013-04-18T07:45:00-05:00", Granularity::Hourly),
            Some(2013)
        );
        assert_eq!(resolve_year("2013-04-18 07:45", Granularity::Hourly), Some(2013));
    }

    #[test]
    fn test_daily_granularity_falls_back_to_leading_digits() {
        // Malformed export: year prefix survives, remainder does not parse.
        assert_eq!(resolve_year("1986.10.04", Granularity::Daily), Some(1986));
        assert_eq!(resolve_year("1986", Granularity::Monthly), Some(1986));
    }

    #[test]
    fn test_unresolvable_date_returns_none() {
        assert_eq!(resolve_year("last spring", Granularity::Daily), None);
        assert_eq!(resolve_year("", Granularity::Annual), None);
        assert_eq!(resolve_year("812", Granularity::Monthly), None);
    }

    // --- Extraction ---------------------------------------------------------

    #[test]
    fn test_extract_keeps_per_year_maximum() {
        let rows = vec![
            row("1990", "100"),
            row("1990", "150"),
            row("1991", "80"),
        ];
        let ams = extract_annual_maxima(&rows, "date", "value", Granularity::Annual);
        assert_eq!(
            ams,
            vec![
                AnnualMaximum { year: 1990, value: 150.0 },
                AnnualMaximum { year: 1991, value: 80.0 },
            ]
        );
    }

    #[test]
    fn test_extract_is_invariant_to_row_order() {
        let rows = vec![
            row("2013-04-18", "28700"),
            row("2013-11-02", "12100"),
            row("2015-12-29", "31400"),
            row("2015-03-14", "29950"),
            row("2019-05-02", "18800"),
        ];
        let forward = extract_annual_maxima(&rows, "date", "value", Granularity::Daily);
        let permuted = extract_annual_maxima(&shuffled(&rows), "date", "value", Granularity::Daily);
        assert_eq!(forward, permuted);
        assert_eq!(forward.len(), 3);
        assert_eq!(forward[0], AnnualMaximum { year: 2013, value: 28700.0 });
    }

    #[test]
    fn test_extract_output_is_sorted_by_year() {
        let rows = vec![row("2001", "5"), row("1987", "9"), row("1993", "7")];
        let ams = extract_annual_maxima(&rows, "date", "value", Granularity::Annual);
        let years: Vec<i32> = ams.iter().map(|a| a.year).collect();
        assert_eq!(years, vec![1987, 1993, 2001]);
    }

    #[test]
    fn test_extract_drops_non_numeric_values() {
        let rows = vec![
            row("1990", "100"),
            row("1990", "ice affected"),
            row("1991", ""),
            row("1991", "NaN"),
        ];
        let ams = extract_annual_maxima(&rows, "date", "value", Granularity::Annual);
        assert_eq!(ams, vec![AnnualMaximum { year: 1990, value: 100.0 }]);
    }

    #[test]
    fn test_extract_drops_rows_with_missing_fields() {
        let mut missing_value = HashMap::new();
        missing_value.insert("date".to_string(), "1990".to_string());

        let mut missing_date = HashMap::new();
        missing_date.insert("value".to_string(), "44800".to_string());

        let ams = extract_annual_maxima(
            &[missing_value, missing_date],
            "date",
            "value",
            Granularity::Annual,
        );
        assert!(ams.is_empty());
    }

    #[test]
    fn test_extract_empty_input_yields_empty_series() {
        let ams = extract_annual_maxima(&[], "date", "value", Granularity::Daily);
        assert!(ams.is_empty());
    }

    #[test]
    fn test_extract_uses_declared_field_names() {
        let mut r = HashMap::new();
        r.insert("peak_dt".to_string(), "1982-12-04".to_string());
        r.insert("peak_va".to_string(), "44800".to_string());

        let ams = extract_annual_maxima(&[r], "peak_dt", "peak_va", Granularity::Daily);
        assert_eq!(ams, vec![AnnualMaximum { year: 1982, value: 44800.0 }]);
    }
}
