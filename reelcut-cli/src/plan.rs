//! `plan` command: aligned candidates in, render-ready clip specs out.

use crate::files;
use eyre::Result;
use reelcut_align::clip::{AspectRatio, plan_clips};
use reelcut_align::types::AlignedCandidate;
use std::path::Path;

pub fn execute(aligned: &Path, aspect: AspectRatio, output: Option<&Path>) -> Result<()> {
    let entries: Vec<AlignedCandidate> = serde_json::from_str(&files::read_input(aligned)?)?;

    let clips = plan_clips(&entries, aspect)?;

    tracing::info!(clips = clips.len(), %aspect, "planned clips");

    files::write_json(&clips, output)
}
