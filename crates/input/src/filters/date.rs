//! Date and datespan filters

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::datespan::{Datespan, Day, Month, Span, Week, start_of_day};
use crate::foundation::{Filter, Filtered, Param, ParamError, ids};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Reads a point in time.
///
/// Accepts RFC 3339 (the offset is dropped), `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD` (midnight).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter;

impl DateFilter {
    /// Parses `input` with the accepted formats.
    #[must_use]
    pub fn parse(input: &str) -> Option<NaiveDateTime> {
        let input = input.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Some(dt.naive_local());
        }
        DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(input, "%Y-%m-%d")
                    .ok()
                    .map(start_of_day)
            })
    }
}

impl Filter for DateFilter {
    type Output = NaiveDateTime;

    fn apply(&self, param: &Param) -> Filtered<NaiveDateTime> {
        let Some(raw) = param.scalar() else {
            return if param.is_null() {
                Filtered::none()
            } else {
                Filtered::error(ParamError::new(ids::DATE_INVALID))
            };
        };
        if raw.trim().is_empty() {
            return Filtered::none();
        }
        Self::parse(&raw).map_or_else(
            || Filtered::error(ParamError::new(ids::DATE_INVALID)),
            Filtered::ok,
        )
    }
}

/// Reads any span type that parses from text.
pub struct SpanFilter<S> {
    _span: PhantomData<fn() -> S>,
}

/// Reads a [`Day`].
pub type DayFilter = SpanFilter<Day>;
/// Reads a [`Week`].
pub type WeekFilter = SpanFilter<Week>;
/// Reads a [`Month`].
pub type MonthFilter = SpanFilter<Month>;
/// Reads any [`Datespan`].
pub type DatespanFilter = SpanFilter<Datespan>;

impl<S> SpanFilter<S> {
    #[must_use]
    pub const fn new() -> Self {
        Self { _span: PhantomData }
    }
}

impl<S> Default for SpanFilter<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for SpanFilter<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SpanFilter<S> {}

impl<S> fmt::Debug for SpanFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanFilter")
            .field("span", &std::any::type_name::<S>())
            .finish()
    }
}

impl<S: Span + FromStr> Filter for SpanFilter<S> {
    type Output = S;

    fn apply(&self, param: &Param) -> Filtered<S> {
        let Some(raw) = param.scalar() else {
            return if param.is_null() {
                Filtered::none()
            } else {
                Filtered::error(ParamError::new(ids::DATE_INVALID))
            };
        };
        if raw.trim().is_empty() {
            return Filtered::none();
        }
        raw.parse::<S>().map_or_else(
            |_| Filtered::error(ParamError::new(ids::DATE_INVALID)),
            Filtered::ok,
        )
    }
}
