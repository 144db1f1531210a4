//! Error types for ride-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RideError {
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),
}

pub type Result<T> = std::result::Result<T, RideError>;
