//! Alignment engine: orchestrates window search across all candidates.

use crate::error::{InputError, Result};
use crate::types::{AlignedCandidate, Candidate, Word};
use crate::window::{SearchConfig, find_best_window};

/// Align every candidate against the transcript, preserving order and
/// cardinality.
///
/// Fatal errors are reserved for malformed input: an empty transcript or
/// a candidate with a blank quote abort before any candidate is
/// processed. A candidate no window matches comes back with the `(0, 0)`
/// sentinel range and a warning, never an error, so one failed candidate
/// cannot block the rest of the batch.
pub fn align(
    candidates: &[Candidate],
    words: &[Word],
    config: &SearchConfig,
) -> Result<Vec<AlignedCandidate>> {
    if words.is_empty() {
        return Err(InputError::EmptyTranscript.into());
    }

    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.highlight_text.trim().is_empty() {
            return Err(InputError::MissingHighlight {
                index,
                title: candidate.title.clone(),
            }
            .into());
        }
    }

    if words.len() < config.min_window {
        tracing::warn!(
            words = words.len(),
            min_window = config.min_window,
            "transcript shorter than the minimum window; no candidate can match"
        );
    }

    Ok(candidates
        .iter()
        .map(|candidate| align_candidate(candidate, words, config))
        .collect())
}

/// Locate a single candidate, falling back to the sentinel range.
fn align_candidate(
    candidate: &Candidate,
    words: &[Word],
    config: &SearchConfig,
) -> AlignedCandidate {
    match find_best_window(&candidate.highlight_text, words, config) {
        Some(span) => {
            let from = ms_to_secs(words[span.start_index].start);
            let to = ms_to_secs(words[span.start_index + span.length - 1].end);

            tracing::debug!(
                title = %candidate.title,
                similarity = span.similarity,
                from,
                to,
                "aligned candidate"
            );

            AlignedCandidate {
                candidate: candidate.clone(),
                from,
                to,
            }
        }
        None => {
            tracing::warn!(title = %candidate.title, "no transcript span matched candidate");

            AlignedCandidate {
                candidate: candidate.clone(),
                from: 0.0,
                to: 0.0,
            }
        }
    }
}

/// Convert milliseconds to seconds at 2-decimal precision.
fn ms_to_secs(ms: u64) -> f64 {
    (ms as f64 / 10.0).round() / 100.0
}
