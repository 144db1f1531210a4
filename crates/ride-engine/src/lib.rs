//! # ride-engine
//!
//! Deterministic date computation for the monthly Critical Mass ride.
//!
//! The ride meets on the last Friday of the month from April through
//! October and on the last Sunday from November through March. This crate
//! resolves the next ride date from an explicit "now" anchor (rolling
//! forward across month and season boundaries once a ride day has fully
//! elapsed) and formats the result for display.
//!
//! All functions take explicit inputs — no system clock access, no I/O —
//! so the crate is pure, deterministic, and WASM-compatible. The caller
//! provides "now".
//!
//! ## Modules
//!
//! - [`season`] — month → target weekday and display times
//! - [`resolve`] — "now" → date of the next ride
//! - [`format`] — ordinal suffixes and calendar display fields
//! - [`event`] — the assembled [`RideEvent`] view model
//! - [`error`] — error types

pub mod error;
pub mod event;
pub mod format;
pub mod resolve;
pub mod season;

pub use error::{Result, RideError};
pub use event::{upcoming_ride, RideEvent};
pub use format::{day_with_ordinal, format_date, ordinal_suffix, FormattedDate};
pub use resolve::{end_of_day, last_ride_of_month, next_ride};
pub use season::{EventTimes, Season};
