//! Error types.
//!
//! `RetrievalError` lives here rather than in `hifz-client` so the quiz-set
//! builder and any alternative `ScriptureSource` can report upstream
//! failures with the same type the HTTP client uses.

use thiserror::Error;

/// Failures talking to the scripture retrieval service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrievalError {
    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status} from scripture service: {message}")]
    Http { status: u16, message: String },

    /// The JSON envelope carried a code other than 200.
    #[error("scripture service returned code {code}: {status}")]
    Api { code: u16, status: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The payload could not be decoded or violated an invariant.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Caller mistakes: arguments outside the values the engine understands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("chapter {0} is out of range (expected 1-114)")]
    ChapterOutOfRange(u16),

    #[error("unknown quiz mode: {0}")]
    UnknownMode(String),
}

/// Errors returned by the quiz-set builder.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Input(#[from] InputError),
}

impl RetrievalError {
    /// The HTTP status or envelope code, if the service produced one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RetrievalError::Http { status, .. } => Some(*status),
            RetrievalError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
