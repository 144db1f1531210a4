//! Resolution of the next ride date from an explicit "now" anchor.
//!
//! All functions take the anchor as an argument (no system clock access) —
//! the caller provides "now", keeping these functions pure, testable, and
//! WASM-compatible.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::error::{Result, RideError};
use crate::season::Season;

/// Upper bound on roll-forward steps. Every month contains at least one
/// occurrence of any weekday, so resolution needs at most one advance;
/// the cap makes termination explicit.
const MAX_ROLL_FORWARD: u32 = 12;

/// Find the date of the last ride-weekday in a month.
///
/// Computes the last calendar day of the month, then steps back
/// `(last_day.weekday - target_weekday + 7) mod 7` days to the most
/// recent occurrence of the season's target weekday.
///
/// # Arguments
///
/// * `year` — Calendar year
/// * `month` — Calendar month, 1 = January … 12 = December
///
/// # Errors
///
/// Returns [`RideError::InvalidMonth`] if `month` is outside 1–12, or
/// [`RideError::InvalidDatetime`] if the date is unrepresentable (years
/// outside chrono's supported range).
pub fn last_ride_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    let season = Season::for_month(month)?;
    let target = season.target_weekday();

    let (next_year, next_month) = advance_month(year, month);
    let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .ok_or_else(|| {
            RideError::InvalidDatetime(format!("unrepresentable date in {year}-{month:02}"))
        })?;

    let back = (last_day.weekday().num_days_from_sunday() as i64
        - target.num_days_from_sunday() as i64
        + 7)
        % 7;
    Ok(last_day - Duration::days(back))
}

/// The last instant of a calendar day (23:59:59.999 local).
///
/// Comparisons against this bound treat the entire ride day as still
/// upcoming until it fully elapses.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // 23:59:59.999 is always a valid wall-clock time.
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN))
}

/// Resolve the next ride date at or after `now`.
///
/// Starts with the current month's candidate; if `now` is strictly past
/// the end of the candidate day, advances to the first day of the
/// following month and re-evaluates. The season rule is re-applied after
/// each advance, so the target weekday flips exactly at season boundaries
/// (October's Friday rule becomes November's Sunday rule).
///
/// # Errors
///
/// Returns [`RideError::InvalidDatetime`] if the date arithmetic leaves
/// chrono's representable range.
pub fn next_ride(now: NaiveDateTime) -> Result<NaiveDate> {
    let mut year = now.year();
    let mut month = now.month();

    for _ in 0..MAX_ROLL_FORWARD {
        let candidate = last_ride_of_month(year, month)?;
        if now <= end_of_day(candidate) {
            return Ok(candidate);
        }
        (year, month) = advance_month(year, month);
    }

    // Unreachable given the loop invariant; resolve the final month anyway
    // rather than panic.
    last_ride_of_month(year, month)
}

/// The month after `(year, month)`, wrapping December into January.
fn advance_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_last_friday_of_october_2025() {
        let date = last_ride_of_month(2025, 10).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 10, 31).unwrap());
        assert_eq!(date.weekday(), Weekday::Fri);
    }

    #[test]
    fn test_last_sunday_of_november_2025() {
        let date = last_ride_of_month(2025, 11).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
        assert_eq!(date.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_last_sunday_of_december_2025() {
        let date = last_ride_of_month(2025, 12).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 12, 28).unwrap());
    }

    #[test]
    fn test_last_sunday_of_march_2026() {
        let date = last_ride_of_month(2026, 3).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 29).unwrap());
    }

    #[test]
    fn test_last_friday_of_april_2026() {
        let date = last_ride_of_month(2026, 4).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 4, 24).unwrap());
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(last_ride_of_month(2025, 0).is_err());
        assert!(last_ride_of_month(2025, 13).is_err());
    }

    #[test]
    fn test_resolve_early_in_month() {
        // October 1, 2025 — last Friday is October 31
        let date = next_ride(at(2025, 10, 1, 0, 0)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 10, 31).unwrap());
        assert_eq!(date.weekday(), Weekday::Fri);
    }

    #[test]
    fn test_resolve_on_ride_day_late_at_night() {
        // A query made on the ride day itself, even at 23:00, still
        // returns today's ride.
        let date = next_ride(at(2025, 10, 31, 23, 0)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 10, 31).unwrap());
    }

    #[test]
    fn test_resolve_at_exact_end_of_day_is_inclusive() {
        let bound = end_of_day(NaiveDate::from_ymd_opt(2025, 10, 31).unwrap());
        let date = next_ride(bound).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 10, 31).unwrap());
    }

    #[test]
    fn test_resolve_rolls_forward_across_season_boundary() {
        // November 1 at midnight: October's last Friday (Oct 31) has
        // elapsed, so the resolver re-evaluates under November's Sunday
        // rule.
        let date = next_ride(at(2025, 11, 1, 0, 0)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
        assert_eq!(date.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_resolve_winter_months() {
        let date = next_ride(at(2025, 12, 1, 0, 0)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 12, 28).unwrap());

        let date = next_ride(at(2026, 3, 1, 0, 0)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 29).unwrap());
    }

    #[test]
    fn test_resolve_spring_season_boundary() {
        // After March 29, 2026 (last Sunday), the resolver flips back to
        // April's Friday rule.
        let date = next_ride(at(2026, 3, 30, 0, 0)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 4, 24).unwrap());
        assert_eq!(date.weekday(), Weekday::Fri);
    }

    #[test]
    fn test_resolve_december_rolls_into_january() {
        // December 28, 2025 is the last Sunday; Dec 29 rolls into 2026.
        let date = next_ride(at(2025, 12, 29, 0, 0)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 25).unwrap());
        assert_eq!(date.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_resolved_weekday_matches_season_rule() {
        for month in 1..=12 {
            let date = next_ride(at(2025, month, 1, 12, 0)).unwrap();
            let season = Season::for_month(date.month()).unwrap();
            assert_eq!(date.weekday(), season.target_weekday());
        }
    }

    #[test]
    fn test_end_of_day_bound() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 31).unwrap();
        let bound = end_of_day(date);
        assert_eq!(bound.date(), date);
        assert!(bound > date.and_hms_opt(23, 59, 59).unwrap());
        assert!(bound < date.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap());
    }
}
