//! Batch entry points tying the stages together.

use crate::annotation::AnnotatedSentence;
use crate::assemble::OutputRecord;
use crate::resolve::ScheduleResolver;

/// Sentence-at-a-time pipeline: scan, classify, assemble.
///
/// Resolution is pure and per-sentence over read-only lexicon tables, so
/// callers may also fan sentences out across threads and reassemble in
/// their own order; the batch methods here stay sequential and preserve
/// input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalPipeline {
    resolver: ScheduleResolver,
}

impl TemporalPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a single sentence into its output record.
    pub fn resolve(&self, sentence: &AnnotatedSentence) -> OutputRecord {
        let descriptor = self.resolver.resolve(sentence);
        OutputRecord::assemble(sentence, &descriptor)
    }

    /// Resolve a batch in input order, one record per sentence. A
    /// sentence with no recognizable temporal pattern still yields its
    /// record with all temporal fields null; it is never dropped.
    pub fn resolve_batch(&self, sentences: &[AnnotatedSentence]) -> Vec<OutputRecord> {
        sentences
            .iter()
            .map(|sentence| self.resolve(sentence))
            .collect()
    }
}

/// Sentinel key placing undated and recurring records after every dated
/// one.
const UNDATED_KEY: &str = "9999-12-31T00:00:00";

/// Stable chronological sort: a range sorts by its end date, then single
/// dates, then lone start dates; recurring and unresolved records keep
/// their input order at the tail.
pub fn sort_chronologically(records: &mut [OutputRecord]) {
    records.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));
}

fn sort_key(record: &OutputRecord) -> &str {
    record
        .end_date
        .as_deref()
        .or(record.date.as_deref())
        .or(record.start_date.as_deref())
        .unwrap_or(UNDATED_KEY)
}

/// Render a batch as a JSON array with the stable six-key record schema.
pub fn to_json(records: &[OutputRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
