//! Range and recurrence classification over scanned spans.
//!
//! Classification runs as an explicit pass with named terminal states
//! and a fixed precedence; the decision for a sentence is deterministic
//! regardless of how many candidate spans it carries. Parse failures are
//! recovered here: the sentence degrades to [`TemporalDescriptor::None`]
//! instead of surfacing an error to the batch.

use crate::annotation::{AnnotatedSentence, AnnotatedToken};
use crate::date::{CalendarDate, PartialDate};
use crate::errors::ResolveError;
use crate::lexicon::{self, MonthDay, TimeUnit, Weekday};
use crate::scan::SpanScanner;
use crate::span::{SpanKind, TemporalSpan};

/// A repeating schedule, optionally parameterized by an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceKind {
    Daily,
    Weekly { weekday: Option<Weekday> },
    Monthly { day: Option<MonthDay> },
    Yearly,
}

impl RecurrenceKind {
    /// The stable output label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            RecurrenceKind::Daily => "daily",
            RecurrenceKind::Weekly { .. } => "weekly",
            RecurrenceKind::Monthly { .. } => "monthly",
            RecurrenceKind::Yearly => "yearly",
        }
    }
}

/// The resolver's verdict for one sentence: at most one of a single
/// date, a range, or a recurrence is ever populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalDescriptor {
    Single(CalendarDate),
    Range {
        start: CalendarDate,
        end: CalendarDate,
    },
    Recurring(RecurrenceKind),
    /// No recognizable temporal pattern; also the degraded result after
    /// a recovered parse failure.
    None,
}

impl TemporalDescriptor {
    pub fn is_none(&self) -> bool {
        matches!(self, TemporalDescriptor::None)
    }
}

/// Terminal classification states for one sentence.
///
/// Precedence, checked in order over the scanned spans:
/// 1. any recurrence trigger wins; the trigger word is the stronger
///    signal in a sentence that mixes a recurrence phrase with an
///    explicit date;
/// 2. an explicit start/end pair, or exactly two date points with a
///    range separator strictly between them;
/// 3. exactly one date point;
/// 4. otherwise nothing (zero spans, or unresolvable multiplicity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification {
    SingleDate(TemporalSpan),
    Range {
        start: TemporalSpan,
        end: TemporalSpan,
    },
    Recurrence(TemporalSpan),
    None,
}

impl Classification {
    fn of(sentence: &AnnotatedSentence, spans: &[TemporalSpan]) -> Classification {
        if let Some(trigger) = spans
            .iter()
            .find(|span| span.kind == SpanKind::RecurrenceTrigger)
        {
            return Classification::Recurrence(*trigger);
        }
        match spans {
            [start, end]
                if start.kind == SpanKind::RangeStart && end.kind == SpanKind::RangeEnd =>
            {
                Classification::Range {
                    start: *start,
                    end: *end,
                }
            }
            [first, second]
                if first.kind == SpanKind::DatePoint
                    && second.kind == SpanKind::DatePoint
                    && separated_by_range_marker(sentence, first, second) =>
            {
                Classification::Range {
                    start: *first,
                    end: *second,
                }
            }
            [only] if only.kind == SpanKind::DatePoint => Classification::SingleDate(*only),
            _ => Classification::None,
        }
    }
}

/// True when a range separator token sits strictly between the two spans.
fn separated_by_range_marker(
    sentence: &AnnotatedSentence,
    left: &TemporalSpan,
    right: &TemporalSpan,
) -> bool {
    sentence
        .tokens
        .get(left.end_idx + 1..right.start_idx)
        .map_or(false, |between| {
            between.iter().any(|token| {
                lexicon::is_range_separator(&token.text)
                    || lexicon::is_range_separator(&token.lemma)
            })
        })
}

/// Classifies a sentence's candidate spans and produces its descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleResolver {
    scanner: SpanScanner,
}

impl ScheduleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve one sentence. Never fails: a recovered parse error
    /// degrades the sentence to [`TemporalDescriptor::None`].
    pub fn resolve(&self, sentence: &AnnotatedSentence) -> TemporalDescriptor {
        let spans: Vec<TemporalSpan> = self.scanner.scan(sentence).collect();
        self.resolve_spans(sentence, &spans)
            .unwrap_or(TemporalDescriptor::None)
    }

    /// Inner classification, with each failure kind still observable.
    /// `spans` must be the scan sequence of `sentence`, in scan order.
    pub fn resolve_spans(
        &self,
        sentence: &AnnotatedSentence,
        spans: &[TemporalSpan],
    ) -> Result<TemporalDescriptor, ResolveError> {
        match Classification::of(sentence, spans) {
            Classification::Recurrence(trigger) => {
                let kind = resolve_recurrence(trigger.tokens(sentence))?;
                Ok(TemporalDescriptor::Recurring(kind))
            }
            Classification::Range { start, end } => {
                let start_part = PartialDate::from_tokens(start.tokens(sentence));
                let end_part = PartialDate::from_tokens(end.tokens(sentence));
                // Hindi surface order puts the shared month and year
                // after the second number: "15 से 20 जनवरी 2024".
                let start = start_part.inherit_from(&end_part).into_calendar_date()?;
                let end = end_part.inherit_from(&start_part).into_calendar_date()?;
                if end < start {
                    return Err(ResolveError::InvalidRange { start, end });
                }
                Ok(TemporalDescriptor::Range { start, end })
            }
            Classification::SingleDate(span) => {
                let date = PartialDate::from_tokens(span.tokens(sentence)).into_calendar_date()?;
                Ok(TemporalDescriptor::Single(date))
            }
            Classification::None => Ok(TemporalDescriptor::None),
        }
    }
}

/// Determine the recurrence kind from a trigger span's absorbed tokens.
///
/// First match wins: a weekday anchor, then a month-unit word (with its
/// optional ordinal-day anchor), then a bare week-unit, then a year-unit,
/// then a bare day/date-unit word. A trigger with none of these is
/// unresolvable.
fn resolve_recurrence(tokens: &[AnnotatedToken]) -> Result<RecurrenceKind, ResolveError> {
    let mut weekday_anchor: Option<Weekday> = None;
    let mut ordinal_anchor: Option<MonthDay> = None;
    let mut units: Vec<TimeUnit> = Vec::new();

    for token in tokens {
        if weekday_anchor.is_none() {
            weekday_anchor =
                lexicon::weekday(&token.text).or_else(|| lexicon::weekday(&token.lemma));
        }
        if ordinal_anchor.is_none() {
            ordinal_anchor =
                lexicon::ordinal_day(&token.text).or_else(|| lexicon::ordinal_day(&token.lemma));
        }
        if let Some(unit) =
            lexicon::time_unit(&token.text).or_else(|| lexicon::time_unit(&token.lemma))
        {
            units.push(unit);
        }
    }

    if let Some(weekday) = weekday_anchor {
        return Ok(RecurrenceKind::Weekly {
            weekday: Some(weekday),
        });
    }
    if units.contains(&TimeUnit::Month) {
        return Ok(RecurrenceKind::Monthly {
            day: ordinal_anchor,
        });
    }
    if units.contains(&TimeUnit::Week) {
        return Ok(RecurrenceKind::Weekly { weekday: None });
    }
    if units.contains(&TimeUnit::Year) {
        return Ok(RecurrenceKind::Yearly);
    }
    if units.contains(&TimeUnit::Day) {
        return Ok(RecurrenceKind::Daily);
    }
    Err(ResolveError::UnresolvedRecurrence)
}
