//! The rendered view of the next ride, assembled from the resolver,
//! the season rule, and the formatters.

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use crate::error::Result;
use crate::format::{day_with_ordinal, format_date};
use crate::resolve::next_ride;
use crate::season::Season;

/// Everything a page needs to announce the next ride.
///
/// Built fresh on every call — never cached across renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RideEvent {
    /// Full English month name (e.g., "October").
    pub month_name: &'static str,
    /// Day of month (1-31).
    pub day: u32,
    /// Calendar year.
    pub year: i32,
    /// Day of month with superscript ordinal markup (e.g., "31<sup>st</sup>").
    pub day_with_ordinal: String,
    /// Ride weekday name for the resolved month's season.
    pub day_name: &'static str,
    /// Meeting time (e.g., "6:30pm").
    pub meet_time: &'static str,
    /// Roll-out time (e.g., "7:00pm").
    pub ride_time: &'static str,
}

/// Compute the next ride at or after `now` and format it for display.
///
/// The season times come from the *resolved* occurrence's month, not from
/// `now`'s month — a query late in October can already announce a Sunday
/// ride in November.
///
/// # Errors
///
/// Returns [`crate::RideError`] if the date arithmetic leaves chrono's
/// representable range. A formatting error here would indicate a resolver
/// bug and is deliberately propagated, not swallowed.
pub fn upcoming_ride(now: NaiveDateTime) -> Result<RideEvent> {
    let date = next_ride(now)?;
    let season = Season::for_month(date.month())?;
    let times = season.times();
    let formatted = format_date(date);

    Ok(RideEvent {
        month_name: formatted.month_name,
        day: formatted.day,
        year: formatted.year,
        day_with_ordinal: day_with_ordinal(i64::from(formatted.day))?,
        day_name: times.day_name,
        meet_time: times.meet_time,
        ride_time: times.ride_time,
    })
}
