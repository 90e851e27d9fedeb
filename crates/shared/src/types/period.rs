//! Inclusive whole-day date ranges for reports and budget periods.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A date range was requested with its end before its start.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid date range: start {start} is after end {end}")]
pub struct InvalidDateRange {
    /// Start date.
    pub start: NaiveDate,
    /// End date.
    pub end: NaiveDate,
}

/// An inclusive `[start, end]` range of whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRange> {
        if end < start {
            return Err(InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The calendar month containing `date`.
    #[must_use]
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = if date.month() == 12 {
            NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
        }
        .and_then(|d| d.pred_opt())
        .unwrap_or(date);
        Self { start, end }
    }

    /// Resolves optional bounds, defaulting missing ones to the calendar
    /// month containing `today`.
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, InvalidDateRange> {
        let month = Self::month_of(today);
        Self::new(start.unwrap_or(month.start), end.unwrap_or(month.end))
    }

    /// Returns true if `date` falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns true if `[other_start, other_end]` overlaps this range.
    #[must_use]
    pub fn overlaps(&self, other_start: NaiveDate, other_end: NaiveDate) -> bool {
        other_start <= self.end && other_end >= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = DateRange::new(d(2024, 2, 1), d(2024, 1, 1)).unwrap_err();
        assert_eq!(err.start, d(2024, 2, 1));
        assert_eq!(err.end, d(2024, 1, 1));
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let range = DateRange::new(d(2024, 1, 15), d(2024, 1, 15)).unwrap();
        assert!(range.contains(d(2024, 1, 15)));
        assert!(!range.contains(d(2024, 1, 16)));
    }

    #[test]
    fn test_month_of() {
        let range = DateRange::month_of(d(2024, 2, 14));
        assert_eq!(range.start, d(2024, 2, 1));
        assert_eq!(range.end, d(2024, 2, 29)); // leap year

        let range = DateRange::month_of(d(2023, 12, 31));
        assert_eq!(range.start, d(2023, 12, 1));
        assert_eq!(range.end, d(2023, 12, 31));
    }

    #[test]
    fn test_resolve_defaults_to_current_month() {
        let range = DateRange::resolve(None, None, d(2024, 1, 20)).unwrap();
        assert_eq!(range.start, d(2024, 1, 1));
        assert_eq!(range.end, d(2024, 1, 31));

        // Partial bounds keep the explicit side.
        let range = DateRange::resolve(Some(d(2024, 1, 10)), None, d(2024, 1, 20)).unwrap();
        assert_eq!(range.start, d(2024, 1, 10));
        assert_eq!(range.end, d(2024, 1, 31));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(d(2024, 1, 1), d(2024, 1, 31)).unwrap();
        assert!(range.contains(d(2024, 1, 1)));
        assert!(range.contains(d(2024, 1, 31)));
        assert!(!range.contains(d(2023, 12, 31)));
        assert!(!range.contains(d(2024, 2, 1)));
    }

    #[test]
    fn test_overlaps() {
        let range = DateRange::new(d(2024, 2, 1), d(2024, 2, 29)).unwrap();
        assert!(range.overlaps(d(2024, 1, 15), d(2024, 2, 1)));
        assert!(range.overlaps(d(2024, 2, 29), d(2024, 3, 10)));
        assert!(range.overlaps(d(2024, 1, 1), d(2024, 12, 31)));
        assert!(!range.overlaps(d(2024, 1, 1), d(2024, 1, 31)));
        assert!(!range.overlaps(d(2024, 3, 1), d(2024, 3, 31)));
    }
}
