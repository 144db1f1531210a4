//! Season classification for the monthly ride.
//!
//! The ride meets on the last Friday of the month from April through
//! October, and on the last Sunday from November through March. The
//! target weekday and the display labels/times are two views of the same
//! classification, so both hang off a single [`Season`] value — they
//! cannot drift apart.

use chrono::Weekday;
use serde::Serialize;

use crate::error::{Result, RideError};

/// The two halves of the ride calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Season {
    /// April through October: last Friday, evening ride.
    Warm,
    /// November through March: last Sunday, afternoon ride.
    Winter,
}

/// Display labels and times for a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventTimes {
    /// Full English name of the ride weekday (e.g., "Friday").
    pub day_name: &'static str,
    /// Meeting time (e.g., "6:30pm").
    pub meet_time: &'static str,
    /// Roll-out time (e.g., "7:00pm").
    pub ride_time: &'static str,
}

impl Season {
    /// Classify a calendar month (1 = January … 12 = December).
    ///
    /// # Errors
    ///
    /// Returns [`RideError::InvalidMonth`] if `month` is outside 1–12.
    pub fn for_month(month: u32) -> Result<Season> {
        match month {
            4..=10 => Ok(Season::Warm),
            1..=3 | 11 | 12 => Ok(Season::Winter),
            _ => Err(RideError::InvalidMonth(format!(
                "month must be 1-12, got {month}"
            ))),
        }
    }

    /// Whether this is the winter half of the calendar.
    pub fn is_winter(self) -> bool {
        matches!(self, Season::Winter)
    }

    /// The weekday the ride falls on in this season.
    pub fn target_weekday(self) -> Weekday {
        match self {
            Season::Warm => Weekday::Fri,
            Season::Winter => Weekday::Sun,
        }
    }

    /// Display labels and times for this season.
    pub fn times(self) -> EventTimes {
        match self {
            Season::Warm => EventTimes {
                day_name: "Friday",
                meet_time: "6:30pm",
                ride_time: "7:00pm",
            },
            Season::Winter => EventTimes {
                day_name: "Sunday",
                meet_time: "1:30pm",
                ride_time: "2:00pm",
            },
        }
    }
}
