//! Error types for reelcut-align organized by pipeline stage.

use thiserror::Error;

/// Alignment pipeline error variants organized by stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation error
    #[error(transparent)]
    Input(#[from] InputError),

    /// Collaborator payload parsing error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Clip planning error
    #[error(transparent)]
    Clip(#[from] ClipError),
}

/// Fatal input errors; these abort an alignment call before any candidate
/// is processed. A candidate that merely fails to match is not an error.
#[derive(Debug, Error)]
pub enum InputError {
    /// Transcript carries no words
    #[error("transcript is empty")]
    EmptyTranscript,

    /// Candidate has no quote to align
    #[error("candidate {index} ({title:?}) has no highlight text")]
    MissingHighlight { index: usize, title: String },
}

/// Collaborator payload parsing errors.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Generator output contains no JSON array
    #[error("no JSON array found in generator output")]
    MissingArray,

    /// Malformed JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Clip planning errors.
#[derive(Debug, Error)]
pub enum ClipError {
    /// Time range is negative or inverted
    #[error("invalid time range for {title:?}: {from}s..{to}s")]
    InvalidRange { title: String, from: f64, to: f64 },

    /// Every candidate resolved to the no-match sentinel
    #[error("no candidate produced a usable time range")]
    NoUsableClips,
}

/// Result type alias for reelcut-align operations.
pub type Result<T> = std::result::Result<T, Error>;

// Nested From implementations for automatic error conversion chains

// serde_json::Error → ParseError → Error
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(ParseError::Json(e))
    }
}
