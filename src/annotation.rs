//! Input contract types produced by the external annotation pipeline.
//!
//! The annotator guarantees tokens arrive in source order and every token
//! carries a non-empty surface form; POS and NER tags may be empty or
//! unknown but never malformed.

use serde::{Deserialize, Serialize};

/// One token with its linguistic annotations, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Zero-based position within the sentence.
    pub index: usize,
    /// Surface form as it appeared in the source text.
    pub text: String,
    /// Dictionary form assigned by the lemmatizer.
    pub lemma: String,
    /// Universal POS tag, e.g. "NUM", "NOUN". Possibly empty.
    #[serde(default)]
    pub upos: String,
    /// Named-entity tag, e.g. "DATE" or BIO-prefixed "B-DATE". Possibly empty.
    #[serde(default)]
    pub ner: String,
}

impl AnnotatedToken {
    /// Create a token with empty POS/NER tags.
    pub fn new(index: usize, text: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            lemma: lemma.into(),
            upos: String::new(),
            ner: String::new(),
        }
    }

    /// Set the universal POS tag.
    pub fn with_upos(mut self, upos: impl Into<String>) -> Self {
        self.upos = upos.into();
        self
    }

    /// Set the named-entity tag.
    pub fn with_ner(mut self, ner: impl Into<String>) -> Self {
        self.ner = ner.into();
        self
    }
}

/// One sentence with its ordered token annotations.
///
/// Created once per sentence boundary and never mutated; token order is
/// source order and defines adjacency for span detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    /// The raw sentence text.
    pub text: String,
    /// Tokens in source order.
    pub tokens: Vec<AnnotatedToken>,
}

impl AnnotatedSentence {
    pub fn new(text: impl Into<String>, tokens: Vec<AnnotatedToken>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }
}
