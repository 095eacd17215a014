//! Calendar date parsing for candidate spans.
//!
//! A span's tokens are first reduced to a [`PartialDate`] (the fields
//! actually present), which the resolver may top up from a sibling range
//! half before completeness is enforced by
//! [`PartialDate::into_calendar_date`]. No stage invents a missing year.

use std::fmt;

use crate::annotation::AnnotatedToken;
use crate::errors::ResolveError;
use crate::lexicon;

/// Days per month in a non-leap year; index 0 is January.
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A concrete calendar date.
///
/// The year is optional: Hindi event text often gives only day and
/// month, and downstream serialization emits null rather than a guessed
/// year. Ordering compares year, then month, then day; within a range
/// both halves share their year (or both lack one), so the `None < Some`
/// ordering of the year field never crosses a known year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: Option<u16>,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    /// Construct with validation. The day must exist in the month:
    /// leap-aware when the year is known, conservative non-leap table
    /// otherwise (so Feb 29 without a year is rejected).
    pub fn new(year: Option<u16>, month: u8, day: u8) -> Result<Self, ResolveError> {
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(month, year) {
            return Err(ResolveError::InvalidCalendarDate { month, day });
        }
        Ok(Self { year, month, day })
    }

    /// ISO-8601 date-time at midnight, or `None` when the year is unknown.
    pub fn to_iso_datetime(&self) -> Option<String> {
        self.year
            .map(|y| format!("{:04}-{:02}-{:02}T00:00:00", y, self.month, self.day))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{:04}-{:02}-{:02}", year, self.month, self.day),
            None => write!(f, "????-{:02}-{:02}", self.month, self.day),
        }
    }
}

fn days_in_month(month: u8, year: Option<u16>) -> u8 {
    if month == 2 && year.map_or(false, is_leap_year) {
        29
    } else {
        DAYS_IN_MONTH[usize::from(month - 1)]
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Date fields actually found in a span, before completeness is enforced.
///
/// Range halves parse to partials first so that a bare day ("15 से 20
/// जनवरी 2024") can inherit month and year from its sibling half.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialDate {
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub day: Option<u8>,
}

impl PartialDate {
    /// Extract date fields from a span's tokens, in priority order: a
    /// 4-digit token becomes the year, the first month-name hit the
    /// month, the first remaining numeral <= 31 the day.
    pub fn from_tokens(tokens: &[AnnotatedToken]) -> Self {
        if let [token] = tokens {
            if let Some(compact) = Self::from_compact(&token.text) {
                return compact;
            }
        }

        let mut date = PartialDate::default();
        for token in tokens {
            if date.year.is_none() && lexicon::is_year_token(&token.text) {
                date.year = lexicon::digits_value(&token.text).map(|y| y as u16);
                continue;
            }
            if date.month.is_none() {
                if let Some(month) = lexicon::month_number(&token.text)
                    .or_else(|| lexicon::month_number(&token.lemma))
                {
                    date.month = Some(month);
                    continue;
                }
            }
            if date.day.is_none() {
                if let Some(value) = lexicon::numeral_value(&token.text)
                    .or_else(|| lexicon::numeral_value(&token.lemma))
                {
                    if (1..=31).contains(&value) {
                        date.day = Some(value as u8);
                    }
                }
            }
        }
        date
    }

    /// Single-token numeric form: "15/01/2024" or "15-01-2024",
    /// day-month-year with a 4-digit year.
    fn from_compact(text: &str) -> Option<PartialDate> {
        let parts: Vec<&str> = if text.contains('/') {
            text.split('/').collect()
        } else if text.contains('-') {
            text.split('-').collect()
        } else {
            return None;
        };
        let [day, month, year]: [&str; 3] = parts.try_into().ok()?;
        let day = lexicon::digits_value(day)?;
        let month = lexicon::digits_value(month)?;
        let year = lexicon::digits_value(year)?;
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) || !(1000..=9999).contains(&year) {
            return None;
        }
        Some(PartialDate {
            year: Some(year as u16),
            month: Some(month as u8),
            day: Some(day as u8),
        })
    }

    /// Fill a missing month and year from the sibling half of a range.
    /// The day is never inherited; each half must carry its own.
    pub fn inherit_from(mut self, other: &PartialDate) -> PartialDate {
        if self.month.is_none() {
            self.month = other.month;
        }
        if self.year.is_none() {
            self.year = other.year;
        }
        self
    }

    /// Enforce completeness: month and day must both be present. The
    /// year stays optional.
    pub fn into_calendar_date(self) -> Result<CalendarDate, ResolveError> {
        match (self.month, self.day) {
            (Some(month), Some(day)) => CalendarDate::new(self.year, month, day),
            (Some(_), None) => Err(ResolveError::IncompleteDate("month without day")),
            (None, Some(_)) => Err(ResolveError::IncompleteDate("day without month")),
            (None, None) => Err(ResolveError::IncompleteDate("no date fields")),
        }
    }
}
