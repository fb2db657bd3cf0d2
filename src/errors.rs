// File: ./src/errors.rs
// Error types surfaced by the parsing and codec layers
use thiserror::Error;

/// The input matched none of the recognized date/time encodings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date/time: {input:?}")]
pub struct DateTimeParseError {
    input: String,
}

impl DateTimeParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A JSON text could not be mapped onto a record.
///
/// Decoding is all-or-nothing: the first failing field aborts the call and
/// no partially-filled value is returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A field held a value of the wrong shape.
    #[error("expected {expected} at {path}")]
    UnexpectedType {
        path: String,
        expected: &'static str,
    },
    /// A timestamp-typed field failed the tolerant date/time parser.
    #[error("invalid date/time at {path}: {source}")]
    Timestamp {
        path: String,
        source: DateTimeParseError,
    },
}

// New-typed so the serializer's error type stays out of the public API.
/// Serializing an in-memory record failed. Does not happen for well-formed
/// values; the `Result` only surfaces serializer-level faults.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct EncodeError(#[from] serde_json::Error);

/// A request-parameter string is outside the documented vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what}: {value:?}")]
pub struct InvalidParameter {
    what: &'static str,
    value: String,
}

impl InvalidParameter {
    pub(crate) fn new(what: &'static str, value: impl Into<String>) -> Self {
        Self {
            what,
            value: value.into(),
        }
    }
}
