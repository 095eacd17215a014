//! Final record assembly: descriptor plus sentence into serializable
//! output.

use serde::{Deserialize, Serialize};

use crate::annotation::{AnnotatedSentence, AnnotatedToken};
use crate::resolve::TemporalDescriptor;

/// The per-sentence output record.
///
/// Every key is always present when serialized; missing values are JSON
/// `null`, never an omitted key, so the schema stays stable across all
/// records of a batch. Immutable after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub text: String,
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub recurrence: Option<String>,
    pub tokens: Vec<AnnotatedToken>,
}

impl OutputRecord {
    /// Combine a sentence with its resolved descriptor.
    ///
    /// Calendar dates render as ISO-8601 date-times at midnight;
    /// year-omitted dates emit `null` rather than a guessed year.
    /// Tokens are carried over verbatim.
    pub fn assemble(sentence: &AnnotatedSentence, descriptor: &TemporalDescriptor) -> OutputRecord {
        let mut record = OutputRecord {
            text: sentence.text.clone(),
            date: None,
            start_date: None,
            end_date: None,
            recurrence: None,
            tokens: sentence.tokens.clone(),
        };
        match descriptor {
            TemporalDescriptor::Single(date) => {
                record.date = date.to_iso_datetime();
            }
            TemporalDescriptor::Range { start, end } => {
                record.start_date = start.to_iso_datetime();
                record.end_date = end.to_iso_datetime();
            }
            TemporalDescriptor::Recurring(kind) => {
                record.recurrence = Some(kind.label().to_string());
            }
            TemporalDescriptor::None => {}
        }
        record
    }
}
