//! Token window scanner: segments a sentence into candidate temporal
//! spans.
//!
//! The scanner walks tokens left to right exactly once. A token opens a
//! date candidate when its NER tag marks date/time, its POS is numeric,
//! or its surface/lemma hits the month or numeral lexicon; the candidate
//! then extends greedily over adjacent date-compatible tokens. A range
//! separator with date material on both sides splits a run into start
//! and end halves. A recurrence trigger word opens a trigger span and
//! absorbs the anchor vocabulary that follows it. Spans never overlap,
//! and a sentence without temporal vocabulary yields an empty sequence.

use crate::annotation::{AnnotatedSentence, AnnotatedToken};
use crate::lexicon;
use crate::span::{SpanKind, TemporalSpan};

/// Segments one sentence into candidate spans via [`SpanScanner::scan`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanScanner;

impl SpanScanner {
    pub fn new() -> Self {
        Self
    }

    /// Lazy, finite, single-pass iterator over the sentence's candidate
    /// spans.
    pub fn scan<'a>(&self, sentence: &'a AnnotatedSentence) -> Spans<'a> {
        Spans {
            tokens: &sentence.tokens,
            pos: 0,
            pending: None,
        }
    }
}

/// Iterator state for one scan pass.
pub struct Spans<'a> {
    tokens: &'a [AnnotatedToken],
    pos: usize,
    /// Holds the range-end half while its start half is being yielded.
    pending: Option<TemporalSpan>,
}

impl<'a> Iterator for Spans<'a> {
    type Item = TemporalSpan;

    fn next(&mut self) -> Option<TemporalSpan> {
        if let Some(span) = self.pending.take() {
            return Some(span);
        }
        while self.pos < self.tokens.len() {
            let idx = self.pos;
            let token = &self.tokens[idx];
            if match_token(token, lexicon::is_recurrence_trigger) {
                return Some(self.scan_recurrence(idx));
            }
            if date_compatible(token) {
                return Some(self.scan_date(idx));
            }
            self.pos += 1;
        }
        None
    }
}

impl<'a> Spans<'a> {
    /// Greedy date run starting at `start`. If the run meets a range
    /// separator with date material directly after it, the left part is
    /// yielded as a range start and the right part queued as its end.
    fn scan_date(&mut self, start: usize) -> TemporalSpan {
        let mut end = start;
        while let Some(next) = self.tokens.get(end + 1) {
            if date_compatible(next) {
                end += 1;
                continue;
            }
            let after_separator = self.tokens.get(end + 2);
            if match_token(next, lexicon::is_range_separator)
                && after_separator.map_or(false, date_compatible)
            {
                let right = self.scan_right_half(end + 2);
                self.pos = right.end_idx + 1;
                self.pending = Some(right);
                return TemporalSpan::new(start, end, SpanKind::RangeStart);
            }
            break;
        }
        self.pos = end + 1;
        TemporalSpan::new(start, end, SpanKind::DatePoint)
    }

    fn scan_right_half(&self, start: usize) -> TemporalSpan {
        let mut end = start;
        while self.tokens.get(end + 1).map_or(false, date_compatible) {
            end += 1;
        }
        TemporalSpan::new(start, end, SpanKind::RangeEnd)
    }

    /// A trigger span absorbs the anchor tokens following the trigger
    /// word: weekday names, time-unit words, ordinal day words, and the
    /// genitive linkers inside phrases like "महीने की पहली तारीख".
    fn scan_recurrence(&mut self, start: usize) -> TemporalSpan {
        let mut end = start;
        while let Some(next) = self.tokens.get(end + 1) {
            if absorbs_into_recurrence(next) {
                end += 1;
            } else {
                break;
            }
        }
        self.pos = end + 1;
        TemporalSpan::new(start, end, SpanKind::RecurrenceTrigger)
    }
}

/// Check a predicate against the surface form, falling back to the lemma.
fn match_token(token: &AnnotatedToken, predicate: fn(&str) -> bool) -> bool {
    predicate(&token.text) || predicate(&token.lemma)
}

/// A token that can open or extend a date candidate: date/time NER,
/// numeric POS, or a month/numeral lexicon hit.
fn date_compatible(token: &AnnotatedToken) -> bool {
    has_date_ner(token)
        || token.upos == "NUM"
        || lexicon::month_number(&token.text).is_some()
        || lexicon::month_number(&token.lemma).is_some()
        || lexicon::numeral_value(&token.text).is_some()
        || lexicon::numeral_value(&token.lemma).is_some()
}

/// Annotators emit plain ("DATE") or BIO-prefixed ("B-DATE") labels.
fn has_date_ner(token: &AnnotatedToken) -> bool {
    token.ner.ends_with("DATE") || token.ner.ends_with("TIME")
}

fn absorbs_into_recurrence(token: &AnnotatedToken) -> bool {
    let matches_anchor = |text: &str| {
        lexicon::weekday(text).is_some()
            || lexicon::time_unit(text).is_some()
            || lexicon::ordinal_day(text).is_some()
            || lexicon::is_genitive_linker(text)
    };
    matches_anchor(&token.text) || matches_anchor(&token.lemma)
}
