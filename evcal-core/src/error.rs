//! Error types for the evcal ecosystem.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in evcal operations.
#[derive(Error, Debug)]
pub enum EvcalError {
    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Invalid date '{0}', expected DD/MM/YYYY")]
    InvalidDate(String),

    #[error("Unknown event type: {0}")]
    UnknownCategory(String),
}

/// Result type alias for evcal operations.
pub type EvcalResult<T> = Result<T, EvcalError>;
