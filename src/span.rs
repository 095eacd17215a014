//! Candidate span types produced by the token window scanner.

use crate::annotation::{AnnotatedSentence, AnnotatedToken};

/// What a candidate span is hypothesized to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// A standalone calendar date.
    DatePoint,
    /// The left half of an explicit range ("15 से ...").
    RangeStart,
    /// The right half of an explicit range ("... 20 जनवरी 2024").
    RangeEnd,
    /// A recurrence phrase ("हर सोमवार").
    RecurrenceTrigger,
}

/// A contiguous token run hypothesized to encode one temporal fact.
///
/// Both indices are inclusive token positions (not character positions)
/// within the sentence. Spans are transient: they exist only while a
/// sentence is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemporalSpan {
    /// Inclusive start token index.
    pub start_idx: usize,
    /// Inclusive end token index.
    pub end_idx: usize,
    pub kind: SpanKind,
}

impl TemporalSpan {
    pub fn new(start_idx: usize, end_idx: usize, kind: SpanKind) -> Self {
        Self {
            start_idx,
            end_idx,
            kind,
        }
    }

    /// The annotated tokens this span covers.
    pub fn tokens<'a>(&self, sentence: &'a AnnotatedSentence) -> &'a [AnnotatedToken] {
        &sentence.tokens[self.start_idx..=self.end_idx]
    }
}
