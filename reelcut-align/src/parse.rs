//! Parsing of collaborator payloads.
//!
//! The generation service returns candidates as free text that usually,
//! but not always, wraps a JSON array in markdown code fences; the
//! transcription service returns either a bare word array or a transcript
//! document. Neither format is owned by this crate, so parsing is lenient
//! where the upstream is known to be sloppy.

use crate::error::{ParseError, Result};
use crate::types::{Candidate, Word};
use serde::Deserialize;

/// Transcript document envelope produced by the transcription service.
#[derive(Clone, Debug, Deserialize)]
pub struct TranscriptDoc {
    /// Full transcript text
    #[serde(default)]
    pub text: Option<String>,
    /// Upstream-provided summary
    #[serde(default)]
    pub summary: Option<String>,
    /// Word-level timestamps
    pub words: Vec<Word>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptInput {
    Words(Vec<Word>),
    Doc(TranscriptDoc),
}

/// Parse transcript JSON: either a bare word array or a document
/// envelope with a `words` field.
///
/// An empty word list is not an error here; the alignment engine reports
/// it fatally when asked to align against it.
pub fn parse_transcript(raw: &str) -> Result<Vec<Word>> {
    let input: TranscriptInput = serde_json::from_str(raw)?;

    Ok(match input {
        TranscriptInput::Words(words) => words,
        TranscriptInput::Doc(doc) => doc.words,
    })
}

/// Extract and parse the candidate array from raw generator output.
///
/// Strips markdown code fences and control characters, then parses the
/// slice from the first `[` to the last `]`. Prose around the array is
/// ignored.
pub fn parse_candidates(raw: &str) -> Result<Vec<Candidate>> {
    let cleaned: String = raw
        .replace("```json", "")
        .replace("```", "")
        .chars()
        .filter(|c| !c.is_control())
        .collect();
    let cleaned = cleaned.trim();

    let start = cleaned.find('[').ok_or(ParseError::MissingArray)?;
    let end = cleaned.rfind(']').ok_or(ParseError::MissingArray)?;
    if end < start {
        return Err(ParseError::MissingArray.into());
    }

    Ok(serde_json::from_str(&cleaned[start..=end])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const CANDIDATE_ARRAY: &str = r#"[
        {
            "label": "a big reveal",
            "title": "The Reveal",
            "highlightText": "and that is when it happened",
            "mood": "intense",
            "reason": "strong payoff"
        }
    ]"#;

    #[test]
    fn parses_bare_candidate_array() {
        let candidates = parse_candidates(CANDIDATE_ARRAY).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].highlight_text, "and that is when it happened");
    }

    #[test]
    fn strips_code_fences_and_prose() {
        let raw = format!("Here are the clips:\n```json\n{CANDIDATE_ARRAY}\n```\nEnjoy!");

        let candidates = parse_candidates(&raw).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "The Reveal");
    }

    #[test]
    fn keeps_unknown_fields() {
        let raw = r#"[{
            "label": "l", "title": "t", "highlightText": "h",
            "mood": "m", "reason": "r",
            "viralScore": 0.93
        }]"#;

        let candidates = parse_candidates(raw).unwrap();

        assert_eq!(
            candidates[0].extra.get("viralScore"),
            Some(&serde_json::json!(0.93))
        );
    }

    #[test]
    fn missing_array_is_an_error() {
        let result = parse_candidates("the model refused to answer");

        assert!(matches!(
            result,
            Err(Error::Parse(ParseError::MissingArray))
        ));
    }

    #[test]
    fn missing_highlight_field_is_a_parse_error() {
        let raw = r#"[{"label": "l", "title": "t", "mood": "m", "reason": "r"}]"#;

        assert!(matches!(
            parse_candidates(raw),
            Err(Error::Parse(ParseError::Json(_)))
        ));
    }

    #[test]
    fn parses_bare_word_array() {
        let raw = r#"[{"start": 0, "end": 1000, "text": "Hello"}]"#;

        let words = parse_transcript(raw).unwrap();

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "Hello");
    }

    #[test]
    fn parses_transcript_document() {
        let raw = r#"{
            "text": "Hello world",
            "summary": "a greeting",
            "words": [
                {"start": 0, "end": 1000, "text": "Hello", "confidence": 0.99},
                {"start": 1000, "end": 2000, "text": "world", "speaker": "A"}
            ]
        }"#;

        let words = parse_transcript(raw).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].speaker.as_deref(), Some("A"));
    }
}
