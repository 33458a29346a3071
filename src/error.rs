//! Error types for analytics computations.
//!
//! Every failure the engine can report is local and synchronous: a date key
//! that does not parse, a range whose endpoints are inverted, or a timeline
//! with zero length. None of these are retryable. Records that are merely
//! skippable (non-positive hours, dates outside the requested range) are not
//! errors and are dropped by the aggregation layer instead.

use chrono::NaiveDate;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for analytics operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyticsError {
    /// A date key could not be parsed as `YYYY-MM-DD`.
    #[error("Malformed date key: {value:?}")]
    MalformedDate { value: String },

    /// A range's start date lies after its end date.
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A timeline range has zero length, so positions are undefined.
    #[error("Degenerate range: start and end are both {date}")]
    DegenerateRange { date: NaiveDate },

    /// Settings could not be loaded or parsed.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AnalyticsError {
    /// Create a malformed date error from the offending input.
    pub fn malformed_date(value: impl Into<String>) -> Self {
        Self::MalformedDate {
            value: value.into(),
        }
    }

    /// Create an invalid range error.
    pub fn invalid_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Create a degenerate range error.
    pub fn degenerate_range(date: NaiveDate) -> Self {
        Self::DegenerateRange { date }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
