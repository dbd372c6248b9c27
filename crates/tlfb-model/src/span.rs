//! Reportable period span calculation.
//!
//! The span is the whole-day difference `end - start`. Both bounds must be
//! complete calendar dates in `YYYY-MM-DD` form; anything else (empty,
//! malformed, or shaped like a date but impossible such as `2022-13-40`)
//! leaves the span undefined.

use chrono::NaiveDate;

/// Value stored in `days` when the span is undefined.
pub const UNDEFINED_SPAN_DAYS: i64 = 0;

/// Parse a reportable-period bound.
pub fn parse_period_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Whole days from `start` to `end`, or `None` if either bound is not a date.
///
/// The result is signed; an `end` before `start` yields a negative span.
///
/// # Examples
/// ```
/// use tlfb_model::span::span_days;
///
/// assert_eq!(span_days("2022-07-15", "2022-08-09"), Some(25));
/// assert_eq!(span_days("2022-07-15", "2022-07-15"), Some(0));
/// assert_eq!(span_days("", "2022-08-09"), None);
/// ```
pub fn span_days(start: &str, end: &str) -> Option<i64> {
    let start = parse_period_date(start)?;
    let end = parse_period_date(end)?;
    Some((end - start).num_days())
}
