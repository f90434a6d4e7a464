//! Stay date range model.
//!
//! This module contains the [`DateRange`] type used by availability checks
//! and pricing. A range covers the nights `start..end`: the check-out date is
//! exclusive.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A half-open range of calendar dates, `[start, end)`.
///
/// Each date in the range is one night of the stay. A guest checking out on
/// `end` frees the room for another guest checking in on the same day.
///
/// # Example
///
/// ```
/// use occupancy_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
/// );
///
/// assert_eq!(range.nights(), 5);
/// assert!(range.contains(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// The first night of the range (inclusive).
    pub start: NaiveDate,
    /// The check-out date (exclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range without validating it.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Creates a range, rejecting ranges whose end is not after their start.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateRange`] when `end <= start`.
    pub fn try_new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end <= start {
            return Err(EngineError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the number of nights in the range. Inverted ranges have none.
    pub fn nights(&self) -> u32 {
        (self.end - self.start).num_days().max(0) as u32
    }

    /// Checks whether `date` is one of the nights in the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Checks whether `date` falls within the range, counting the check-out
    /// date as part of it.
    pub fn contains_inclusive(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Half-open overlap test: a range ending on day N does not overlap a
    /// range starting on day N.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Returns the nights shared by both ranges, if any.
    pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(DateRange {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Iterates over every night in the range, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take(self.nights() as usize)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
