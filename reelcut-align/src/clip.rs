//! Clip planning: turning aligned candidates into render-ready specs.
//!
//! The actual cutting is done by an external media transformation service
//! that takes a source asset plus start/end offsets and output
//! dimensions; this module prepares exactly that input.

use crate::error::{ClipError, Result};
use crate::types::{AlignedCandidate, Candidate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target frame shape for rendered clips.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum AspectRatio {
    /// 1920x1080 landscape
    #[default]
    #[serde(rename = "16:9")]
    Wide,
    /// 1080x1920 vertical (shorts, reels)
    #[serde(rename = "9:16")]
    Tall,
    /// 1080x1080 square
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    /// Output dimensions in pixels, `(width, height)`.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            AspectRatio::Wide => (1920, 1080),
            AspectRatio::Tall => (1080, 1920),
            AspectRatio::Square => (1080, 1080),
        }
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "16:9" => Ok(AspectRatio::Wide),
            "9:16" => Ok(AspectRatio::Tall),
            "1:1" => Ok(AspectRatio::Square),
            other => Err(format!(
                "unknown aspect ratio: {other} (expected 16:9, 9:16, or 1:1)"
            )),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AspectRatio::Wide => "16:9",
            AspectRatio::Tall => "9:16",
            AspectRatio::Square => "1:1",
        })
    }
}

/// Offsets-plus-dimensions record consumed by the media transformation
/// service, with the candidate's descriptive fields carried along.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Clip {
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Clip start offset in seconds
    pub from: f64,
    /// Clip end offset in seconds
    pub to: f64,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

/// Build render specs from aligned candidates.
///
/// Sentinel (no-match) entries are skipped with a warning. A negative or
/// inverted time range is fatal, as is a batch where nothing usable
/// remains.
pub fn plan_clips(aligned: &[AlignedCandidate], aspect: AspectRatio) -> Result<Vec<Clip>> {
    let (width, height) = aspect.dimensions();
    let mut clips = Vec::new();

    for entry in aligned {
        if entry.is_unmatched() {
            tracing::warn!(title = %entry.candidate.title, "skipping candidate without a located span");
            continue;
        }

        if entry.from < 0.0 || entry.to <= entry.from {
            return Err(ClipError::InvalidRange {
                title: entry.candidate.title.clone(),
                from: entry.from,
                to: entry.to,
            }
            .into());
        }

        clips.push(Clip {
            candidate: entry.candidate.clone(),
            from: entry.from,
            to: entry.to,
            width,
            height,
        });
    }

    if clips.is_empty() {
        return Err(ClipError::NoUsableClips.into());
    }

    Ok(clips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn make_aligned(title: &str, from: f64, to: f64) -> AlignedCandidate {
        AlignedCandidate {
            candidate: Candidate {
                label: "a moment".into(),
                title: title.into(),
                highlight_text: "some quote".into(),
                mood: "calm".into(),
                reason: "test".into(),
                extra: serde_json::Map::new(),
            },
            from,
            to,
        }
    }

    #[test]
    fn maps_aspect_ratios_to_dimensions() {
        assert_eq!(AspectRatio::Wide.dimensions(), (1920, 1080));
        assert_eq!(AspectRatio::Tall.dimensions(), (1080, 1920));
        assert_eq!(AspectRatio::Square.dimensions(), (1080, 1080));
    }

    #[test]
    fn parses_ratio_strings() {
        assert_eq!("9:16".parse::<AspectRatio>().unwrap(), AspectRatio::Tall);
        assert_eq!(AspectRatio::Tall.to_string(), "9:16");
        assert!("4:3".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn plans_matched_candidates() {
        let aligned = vec![make_aligned("First", 1.5, 12.25)];

        let clips = plan_clips(&aligned, AspectRatio::Tall).unwrap();

        match &clips[..] {
            [clip] => {
                assert_eq!(clip.from, 1.5);
                assert_eq!(clip.to, 12.25);
                assert_eq!((clip.width, clip.height), (1080, 1920));
            }
            _ => panic!("expected 1 clip, got {}", clips.len()),
        }
    }

    #[test]
    fn skips_sentinel_entries() {
        let aligned = vec![
            make_aligned("Unmatched", 0.0, 0.0),
            make_aligned("Matched", 3.0, 9.5),
        ];

        let clips = plan_clips(&aligned, AspectRatio::Wide).unwrap();

        assert_eq!(clips.len(), 1);
        assert_eq!(clips[0].candidate.title, "Matched");
    }

    #[test]
    fn all_sentinels_is_an_error() {
        let aligned = vec![make_aligned("A", 0.0, 0.0), make_aligned("B", 0.0, 0.0)];

        assert!(matches!(
            plan_clips(&aligned, AspectRatio::Wide),
            Err(Error::Clip(ClipError::NoUsableClips))
        ));
    }

    #[test]
    fn inverted_range_is_an_error() {
        let aligned = vec![make_aligned("Backwards", 9.0, 3.0)];

        assert!(matches!(
            plan_clips(&aligned, AspectRatio::Wide),
            Err(Error::Clip(ClipError::InvalidRange { .. }))
        ));
    }
}
