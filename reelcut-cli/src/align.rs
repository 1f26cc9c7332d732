//! `align` command: transcript plus candidates in, time ranges out.

use crate::files;
use eyre::Result;
use reelcut_align::align::align;
use reelcut_align::parse::{parse_candidates, parse_transcript};
use reelcut_align::window::SearchConfig;
use std::path::Path;
use std::time::Instant;

pub fn execute(
    transcript: &Path,
    candidates: &Path,
    output: Option<&Path>,
    config: SearchConfig,
) -> Result<()> {
    let words = parse_transcript(&files::read_input(transcript)?)?;
    let parsed = parse_candidates(&files::read_input(candidates)?)?;

    tracing::info!(
        words = words.len(),
        candidates = parsed.len(),
        "aligning candidates"
    );

    let s = Instant::now();

    let aligned = align(&parsed, &words, &config)?;

    let d = s.elapsed();
    let matched = aligned.iter().filter(|a| !a.is_unmatched()).count();

    tracing::info!(
        matched,
        unmatched = aligned.len() - matched,
        duration = %format_secs(d.as_secs_f32()),
        "alignment completed"
    );

    files::write_json(&aligned, output)
}

/// Format seconds as a string with two decimal places.
fn format_secs(secs: f32) -> String {
    format!("{:.2}s", secs)
}
