//! Fiscal-period normalization.
//!
//! Derives whole-calendar-month period lengths from fiscal dates. The
//! period length rounds a partial month up; the truncated count drops the
//! opening partial month and drives equalization proration.

use chrono::{Datelike, NaiveDate};

use crate::models::TaxPeriod;

const DEFAULT_MONTHS: u32 = 12;

/// Builds a [`TaxPeriod`] from optional fiscal dates and optional explicit
/// month-count overrides.
///
/// An override of at least one month wins over the computed value, per
/// count. Without usable dates (absent, or `end` before `start`) and
/// without an override, both counts fall back to twelve. Never fails.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use corptax_core::calculations::period::normalize_period;
///
/// let period = normalize_period(
///     NaiveDate::from_ymd_opt(2022, 4, 1),
///     NaiveDate::from_ymd_opt(2023, 1, 31),
///     None,
///     None,
/// );
///
/// assert_eq!(period.months_in_period, 10);
/// assert_eq!(period.months_truncated, 10);
/// ```
pub fn normalize_period(
    fiscal_start: Option<NaiveDate>,
    fiscal_end: Option<NaiveDate>,
    months_in_period: Option<u32>,
    months_truncated: Option<u32>,
) -> TaxPeriod {
    let computed = match (fiscal_start, fiscal_end) {
        (Some(start), Some(end)) if end >= start => Some(month_span(start, end)),
        _ => None,
    };
    let (computed_months, computed_truncated) =
        computed.unwrap_or((DEFAULT_MONTHS, DEFAULT_MONTHS));

    TaxPeriod {
        fiscal_start,
        fiscal_end,
        months_in_period: override_or(months_in_period, computed_months),
        months_truncated: override_or(months_truncated, computed_truncated),
    }
}

fn override_or(explicit: Option<u32>, computed: u32) -> u32 {
    match explicit {
        Some(months) if months >= 1 => months,
        _ => computed,
    }
}

/// Whole-month span of `start..=end` as `(months_in_period,
/// months_truncated)`. Requires `end >= start`.
fn month_span(start: NaiveDate, end: NaiveDate) -> (u32, u32) {
    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    // A leftover partial month counts as a whole one.
    if months == 0 || end.day() >= start.day() {
        months += 1;
    }
    let months = months.max(1) as u32;

    let truncated = if start.day() == 1 {
        months
    } else if start.year() == end.year() && start.month() == end.month() {
        1
    } else {
        // Drop the opening partial month, but never below one.
        months.saturating_sub(1).max(1)
    };

    (months, truncated)
}
