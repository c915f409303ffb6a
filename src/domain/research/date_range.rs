//! Publication year range for a research request.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Earliest publication year the form accepts.
pub const MIN_YEAR: u16 = 1900;

/// Latest publication year the form accepts (the current UTC year).
pub fn current_year() -> u16 {
    Utc::now().year() as u16
}

/// An inclusive `[start, end]` pair of publication years.
///
/// A `YearRange` built with [`YearRange::new`] is a *candidate*: the form
/// commits the two year inputs independently, so `start > end` is
/// representable and reported by the field validator. [`YearRange::committed`]
/// enforces both the ordering and the `[MIN_YEAR, max_year]` bounds and is
/// what a validated request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

impl YearRange {
    /// Creates a candidate range. No ordering or bounds check.
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// The widest selectable range: `MIN_YEAR` through `max_year`.
    ///
    /// This is the form's initial value.
    pub fn full(max_year: u16) -> Self {
        Self {
            start: MIN_YEAR,
            end: max_year,
        }
    }

    /// Creates a validated range: ordered and within `[MIN_YEAR, max_year]`.
    pub fn committed(start: u16, end: u16, max_year: u16) -> Result<Self, ValidationError> {
        if start < MIN_YEAR || start > max_year {
            return Err(ValidationError::out_of_range(
                "start_year",
                MIN_YEAR as i32,
                max_year as i32,
                start as i32,
            ));
        }
        if end < MIN_YEAR || end > max_year {
            return Err(ValidationError::out_of_range(
                "end_year",
                MIN_YEAR as i32,
                max_year as i32,
                end as i32,
            ));
        }
        if start > end {
            return Err(ValidationError::invalid_format(
                "date_range",
                format!("start year {} is after end year {}", start, end),
            ));
        }
        Ok(Self { start, end })
    }

    /// True when `start <= end`.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// The wire representation: a two-element `[start, end]` array.
    pub fn as_pair(&self) -> [u16; 2] {
        [self.start, self.end]
    }
}
