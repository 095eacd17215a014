//! Error types for temporal resolution.
//!
//! Every variant here is recovered inside the resolver: a failing
//! sentence degrades to an empty descriptor instead of aborting the
//! batch. Lexicon lookups and the span scanner are infallible; absence
//! of a match is a normal "no candidate" outcome.

use thiserror::Error;

use crate::date::CalendarDate;

/// Failures that can occur while resolving a sentence's temporal spans.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A date span was missing one of its required parts.
    #[error("incomplete date: {0}")]
    IncompleteDate(&'static str),

    /// The day does not exist in the month.
    #[error("day {day} is out of range for month {month}")]
    InvalidCalendarDate { month: u8, day: u8 },

    /// The end of a range precedes its start.
    #[error("range end {end} precedes start {start}")]
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },

    /// A recurrence trigger word appeared without a resolvable anchor.
    #[error("recurrence trigger without a resolvable anchor")]
    UnresolvedRecurrence,
}
