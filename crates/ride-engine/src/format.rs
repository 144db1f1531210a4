//! Display formatting: English ordinal suffixes and calendar fields.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{Result, RideError};

/// Full English month names, indexed by `month0` (0 = January).
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar fields of a date, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedDate {
    /// Full English month name (e.g., "October").
    pub month_name: &'static str,
    /// Day of month (1-31).
    pub day: u32,
    /// Calendar year.
    pub year: i32,
}

/// Extract the display fields of a date.
pub fn format_date(date: NaiveDate) -> FormattedDate {
    FormattedDate {
        month_name: MONTH_NAMES[date.month0() as usize],
        day: date.day(),
        year: date.year(),
    }
}

/// The English ordinal suffix for a number.
///
/// Follows the CLDR ordinal categories for English (one/two/few/other)
/// rather than a bare last-digit check: 11, 12, and 13 take "th" even
/// though they end in 1, 2, 3.
pub fn ordinal_suffix(n: i64) -> &'static str {
    if (11..=13).contains(&(n.rem_euclid(100))) {
        return "th";
    }
    match n.rem_euclid(10) {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Format a day of month with its ordinal suffix in superscript markup,
/// e.g. `31` → `"31<sup>st</sup>"`.
///
/// # Errors
///
/// Returns [`RideError::InvalidDay`] if `day` is less than 1.
pub fn day_with_ordinal(day: i64) -> Result<String> {
    if day < 1 {
        return Err(RideError::InvalidDay(format!(
            "day must be a positive number, got {day}"
        )));
    }
    Ok(format!("{day}<sup>{}</sup>", ordinal_suffix(day)))
}
