//! Date and datespan ranges

use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime};

use super::Range;
use crate::datespan::{Span, end_of_day, start_of_day};
use crate::foundation::{FilterMisuse, ParamError, ids};

fn check_order<T: PartialOrd + Display>(min: Option<&T>, max: Option<&T>) -> Result<(), FilterMisuse> {
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => Err(FilterMisuse::InvalidBounds {
            kind: "date",
            min: lo.to_string(),
            max: hi.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Earliest/latest instant of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    min: Option<NaiveDateTime>,
    max: Option<NaiveDateTime>,
}

impl DateRange {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub const fn min(min: NaiveDateTime) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    #[must_use]
    pub const fn max(max: NaiveDateTime) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Returns an error if `min > max`.
    pub fn new(
        min: Option<NaiveDateTime>,
        max: Option<NaiveDateTime>,
    ) -> Result<Self, FilterMisuse> {
        check_order(min.as_ref(), max.as_ref())?;
        Ok(Self { min, max })
    }

    pub fn between(min: NaiveDateTime, max: NaiveDateTime) -> Result<Self, FilterMisuse> {
        Self::new(Some(min), Some(max))
    }

    #[must_use]
    pub const fn min_border(&self) -> Option<NaiveDateTime> {
        self.min
    }

    #[must_use]
    pub const fn max_border(&self) -> Option<NaiveDateTime> {
        self.max
    }
}

fn too_early(min: Option<NaiveDateTime>) -> ParamError {
    ParamError::new(ids::DATE_TOO_EARLY).with_detail("earliestDate", min)
}

fn too_late(max: Option<NaiveDateTime>) -> ParamError {
    ParamError::new(ids::DATE_TOO_LATE).with_detail("latestDate", max)
}

impl Range<NaiveDateTime> for DateRange {
    fn below_min_border(&self, value: &NaiveDateTime) -> bool {
        self.min.is_some_and(|min| *value < min)
    }

    fn above_max_border(&self, value: &NaiveDateTime) -> bool {
        self.max.is_some_and(|max| *value > max)
    }

    fn min_param_error(&self) -> ParamError {
        too_early(self.min)
    }

    fn max_param_error(&self) -> ParamError {
        too_late(self.max)
    }
}

/// Earliest/latest day a span may cover.
///
/// The min border is the start of its day and the max border the last
/// second of its day, so a span ending on the max day is still inside.
///
/// ```
/// use chrono::NaiveDate;
/// use sieve_input::datespan::Week;
/// use sieve_input::range::{DatespanRange, Range};
///
/// let may = DatespanRange::between(
///     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
/// )
/// .unwrap();
/// let week: Week = "2024-W19".parse().unwrap();
/// assert!(may.contains(&week));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DatespanRange {
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
}

impl DatespanRange {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub const fn min(min: NaiveDate) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    #[must_use]
    pub const fn max(max: NaiveDate) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Returns an error if `min > max`.
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Result<Self, FilterMisuse> {
        check_order(min.as_ref(), max.as_ref())?;
        Ok(Self { min, max })
    }

    pub fn between(min: NaiveDate, max: NaiveDate) -> Result<Self, FilterMisuse> {
        Self::new(Some(min), Some(max))
    }

    /// Start of the min day.
    #[must_use]
    pub fn min_instant(&self) -> Option<NaiveDateTime> {
        self.min.map(start_of_day)
    }

    /// Last second of the max day.
    #[must_use]
    pub fn max_instant(&self) -> Option<NaiveDateTime> {
        self.max.map(end_of_day)
    }
}

impl<S: Span> Range<S> for DatespanRange {
    fn below_min_border(&self, value: &S) -> bool {
        self.min_instant()
            .is_some_and(|min| value.start_instant() < min)
    }

    fn above_max_border(&self, value: &S) -> bool {
        self.max_instant().is_some_and(|max| value.end_instant() > max)
    }

    fn min_param_error(&self) -> ParamError {
        too_early(self.min_instant())
    }

    fn max_param_error(&self) -> ParamError {
        too_late(self.max_instant())
    }
}
