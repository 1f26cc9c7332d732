//! Core types for reelcut-align.

use serde::{Deserialize, Serialize};

/// One transcript word as recognized by upstream speech-to-text.
///
/// Timestamps are integer milliseconds with `end > start`. The surface
/// form keeps whatever casing and punctuation the recognizer emitted.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Word {
    /// Start time in milliseconds
    pub start: u64,
    /// End time in milliseconds
    pub end: u64,
    /// Raw surface form
    pub text: String,
    /// Recognizer confidence in `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// Speaker label from diarization, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Word {
    pub fn new(text: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            confidence: None,
            speaker: None,
        }
    }
}

/// One proposed highlight, not yet located in time.
///
/// Only `highlight_text` is interpreted; every other field, including
/// metadata this crate has never heard of, passes through untouched.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Short description of the moment
    pub label: String,
    /// Display title for the clip
    pub title: String,
    /// The quote to locate in the transcript
    pub highlight_text: String,
    /// Emotional tone tag
    pub mood: String,
    /// Why the generator picked this moment
    pub reason: String,
    /// Pass-through fields from the generator, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A candidate augmented with its located time range in seconds.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AlignedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Span start in seconds, 2-decimal precision
    pub from: f64,
    /// Span end in seconds, 2-decimal precision
    pub to: f64,
}

impl AlignedCandidate {
    /// True when alignment found no confident match (the `(0, 0)` sentinel).
    pub fn is_unmatched(&self) -> bool {
        self.from == 0.0 && self.to == 0.0
    }
}

/// Best-scoring window over the transcript's word sequence for one
/// candidate. Lives only between window search and span selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpanMatch {
    /// Index of the window's first word
    pub start_index: usize,
    /// Window length in words
    pub length: usize,
    /// Similarity between the window's canonical text and the candidate's
    pub similarity: f64,
}
