//! Brute-force search for the transcript span best matching a candidate.

use crate::normalize::normalize;
use crate::similarity::similarity;
use crate::types::{SpanMatch, Word};

/// Similarity a window must exceed to be accepted.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Window sizes searched around the candidate's token count.
pub const DEFAULT_WINDOW_TOLERANCE: usize = 2;

/// Smallest window considered, in words.
pub const DEFAULT_MIN_WINDOW: usize = 3;

/// Tunables for the window search.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    /// Acceptance floor; windows scoring at or below this are rejected
    pub threshold: f64,
    /// Window sizes span `token_count ± window_tolerance`
    pub window_tolerance: usize,
    /// Lower bound on window size, guarding against degenerate one- or
    /// two-word matches
    pub min_window: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            window_tolerance: DEFAULT_WINDOW_TOLERANCE,
            min_window: DEFAULT_MIN_WINDOW,
        }
    }
}

impl SearchConfig {
    /// Create a new search configuration.
    pub fn new(threshold: f64, window_tolerance: usize, min_window: usize) -> Self {
        Self {
            threshold,
            window_tolerance,
            min_window,
        }
    }
}

/// Find the contiguous word span whose canonical text best matches
/// `candidate_text`.
///
/// Window sizes within the configured tolerance of the candidate's token
/// count are each slid over the whole transcript. A window replaces the
/// current best only on a strictly higher score that also exceeds the
/// threshold, so among equally-scoring windows the first one encountered
/// wins (smallest size, then smallest start offset).
///
/// Returns `None` when no window clears the threshold, including when the
/// transcript is shorter than the smallest window.
pub fn find_best_window(
    candidate_text: &str,
    words: &[Word],
    config: &SearchConfig,
) -> Option<SpanMatch> {
    let target = normalize(candidate_text);
    let token_count = target.split_whitespace().count();
    if token_count == 0 {
        return None;
    }

    let canonical: Vec<String> = words.iter().map(|w| normalize(&w.text)).collect();

    let min_size = config
        .min_window
        .max(token_count.saturating_sub(config.window_tolerance));
    let max_size = token_count + config.window_tolerance;

    let mut best: Option<SpanMatch> = None;

    for size in min_size..=max_size {
        if size > canonical.len() {
            break;
        }

        for start in 0..=canonical.len() - size {
            let window = canonical[start..start + size].join(" ");
            let score = similarity(&window, &target);

            if score > config.threshold && best.is_none_or(|b| score > b.similarity) {
                best = Some(SpanMatch {
                    start_index: start,
                    length: size,
                    similarity: score,
                });
            }
        }
    }

    if let Some(span) = &best {
        tracing::trace!(
            start = span.start_index,
            length = span.length,
            similarity = span.similarity,
            "best window selected"
        );
    }

    best
}
