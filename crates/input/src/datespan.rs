//! Calendar spans: days, ISO weeks, months and custom spans.
//!
//! Every span covers whole days from [`Span::start`] to [`Span::end`],
//! both inclusive.
//!
//! | type | text form |
//! |---|---|
//! | [`Day`] | `2024-05-17`, `today`, `yesterday`, `tomorrow` |
//! | [`Week`] | `2024-W20` |
//! | [`Month`] | `2024-05`, `current`, `last` |
//! | [`CustomDatespan`] | `2024-05-01,2024-05-17` |

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime, Weekday};

/// A span of whole calendar days.
pub trait Span {
    /// First day of the span.
    fn start(&self) -> NaiveDate;

    /// Last day of the span.
    fn end(&self) -> NaiveDate;

    /// Start of the first day.
    fn start_instant(&self) -> NaiveDateTime {
        start_of_day(self.start())
    }

    /// Last second of the last day.
    fn end_instant(&self) -> NaiveDateTime {
        end_of_day(self.end())
    }

    /// Whether `date` lies within the span.
    fn contains_date(&self, date: NaiveDate) -> bool {
        self.start() <= date && date <= self.end()
    }
}

pub(crate) fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

pub(crate) fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| start_of_day(date))
}

/// Error for text that is not a valid span.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{input}` is not a valid {kind}")]
pub struct InvalidDatespan {
    kind: &'static str,
    input: String,
}

impl InvalidDatespan {
    fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ============================================================================
// DAY
// ============================================================================

/// A single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NaiveDate);

impl Day {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub fn today() -> Self {
        Self(today())
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// The following day, if representable.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl Span for Day {
    fn start(&self) -> NaiveDate {
        self.0
    }

    fn end(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for Day {
    type Err = InvalidDatespan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let date = match input {
            "today" => Some(today()),
            "yesterday" => today().pred_opt(),
            "tomorrow" => today().succ_opt(),
            _ => NaiveDate::parse_from_str(input, "%Y-%m-%d").ok(),
        };
        date.map(Self).ok_or_else(|| InvalidDatespan::new("day", s))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

// ============================================================================
// WEEK
// ============================================================================

/// An ISO 8601 week, Monday to Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week {
    start: NaiveDate,
    end: NaiveDate,
}

impl Week {
    /// The ISO week `week` of `year`.
    #[must_use]
    pub fn new(year: i32, week: u32) -> Option<Self> {
        let start = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)?;
        Self::starting(start)
    }

    /// The week containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Option<Self> {
        let iso = date.iso_week();
        Self::new(iso.year(), iso.week())
    }

    fn starting(start: NaiveDate) -> Option<Self> {
        let end = start.checked_add_days(Days::new(6))?;
        Some(Self { start, end })
    }

    /// ISO week number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.start.iso_week().week()
    }
}

impl Span for Week {
    fn start(&self) -> NaiveDate {
        self.start
    }

    fn end(&self) -> NaiveDate {
        self.end
    }
}

impl FromStr for Week {
    type Err = InvalidDatespan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDatespan::new("week", s);
        let (year, week) = s.trim().split_once("-W").ok_or_else(invalid)?;
        if week.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let week = week.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, week).ok_or_else(invalid)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iso = self.start.iso_week();
        write!(f, "{}-W{:02}", iso.year(), iso.week())
    }
}

// ============================================================================
// MONTH
// ============================================================================

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    start: NaiveDate,
    end: NaiveDate,
}

impl Month {
    /// `month` (1-12) of `year`.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let (next_year, next_month) = if month == 12 {
            (year.checked_add(1)?, 1)
        } else {
            (year, month + 1)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
        Some(Self { start, end })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    /// The month before this one.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        Self::containing(self.start.pred_opt()?)
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.start.month()
    }
}

impl Span for Month {
    fn start(&self) -> NaiveDate {
        self.start
    }

    fn end(&self) -> NaiveDate {
        self.end
    }
}

impl FromStr for Month {
    type Err = InvalidDatespan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDatespan::new("month", s);
        let input = s.trim();
        match input {
            "current" => Self::containing(today()).ok_or_else(invalid),
            "last" => Self::containing(today())
                .and_then(|m| m.previous())
                .ok_or_else(invalid),
            _ => {
                let (year, month) = input.split_once('-').ok_or_else(invalid)?;
                if year.len() != 4 || month.len() != 2 {
                    return Err(invalid());
                }
                let year = year.parse::<i32>().map_err(|_| invalid())?;
                let month = month.parse::<u32>().map_err(|_| invalid())?;
                Self::new(year, month).ok_or_else(invalid)
            }
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start.format("%Y-%m"))
    }
}

// ============================================================================
// CUSTOM DATESPAN
// ============================================================================

/// An arbitrary span between two days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomDatespan {
    start: NaiveDate,
    end: NaiveDate,
}

impl CustomDatespan {
    /// A span from `start` to `end`; `None` if `end` precedes `start`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }
}

impl Span for CustomDatespan {
    fn start(&self) -> NaiveDate {
        self.start
    }

    fn end(&self) -> NaiveDate {
        self.end
    }
}

impl FromStr for CustomDatespan {
    type Err = InvalidDatespan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDatespan::new("datespan", s);
        let (start, end) = s.split_once(',').ok_or_else(invalid)?;
        let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
        let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
        Self::new(start, end).ok_or_else(invalid)
    }
}

impl fmt::Display for CustomDatespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

// ============================================================================
// DATESPAN
// ============================================================================

/// Any of the span kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datespan {
    Day(Day),
    Week(Week),
    Month(Month),
    Custom(CustomDatespan),
}

impl Span for Datespan {
    fn start(&self) -> NaiveDate {
        match self {
            Self::Day(d) => d.start(),
            Self::Week(w) => w.start(),
            Self::Month(m) => m.start(),
            Self::Custom(c) => c.start(),
        }
    }

    fn end(&self) -> NaiveDate {
        match self {
            Self::Day(d) => d.end(),
            Self::Week(w) => w.end(),
            Self::Month(m) => m.end(),
            Self::Custom(c) => c.end(),
        }
    }
}

impl FromStr for Datespan {
    type Err = InvalidDatespan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.contains(',') {
            return input.parse().map(Self::Custom);
        }
        if input.contains("-W") {
            return input.parse().map(Self::Week);
        }
        if let Ok(day) = input.parse() {
            return Ok(Self::Day(day));
        }
        input
            .parse()
            .map(Self::Month)
            .map_err(|_| InvalidDatespan::new("datespan", s))
    }
}

impl fmt::Display for Datespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(d) => d.fmt(f),
            Self::Week(w) => w.fmt(f),
            Self::Month(m) => m.fmt(f),
            Self::Custom(c) => c.fmt(f),
        }
    }
}

impl From<Day> for Datespan {
    fn from(day: Day) -> Self {
        Self::Day(day)
    }
}

impl From<Week> for Datespan {
    fn from(week: Week) -> Self {
        Self::Week(week)
    }
}

impl From<Month> for Datespan {
    fn from(month: Month) -> Self {
        Self::Month(month)
    }
}

impl From<CustomDatespan> for Datespan {
    fn from(span: CustomDatespan) -> Self {
        Self::Custom(span)
    }
}
