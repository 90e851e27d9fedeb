//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

use kasbook_shared::types::period::InvalidDateRange;
use kasbook_shared::AppError;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Unknown cash book grouping.
    #[error("Unknown grouping '{0}', expected daily or monthly")]
    UnknownGroupBy(String),
}

impl From<InvalidDateRange> for ReportError {
    fn from(err: InvalidDateRange) -> Self {
        Self::InvalidDateRange {
            start: err.start,
            end: err.end,
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_from_shared() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let err = ReportError::from(InvalidDateRange { start, end });
        assert!(matches!(err, ReportError::InvalidDateRange { .. }));
        assert!(matches!(AppError::from(err), AppError::Validation(_)));
    }
}
