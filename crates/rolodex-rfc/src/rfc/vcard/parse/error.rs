//! vCard parse error types.

use std::fmt;

use crate::rfc::vcard::core::VCardError;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred during vCard parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Physical line number where the error occurred (1-based, 0 if none).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates a malformed line error, quoting the line.
    #[must_use]
    pub fn malformed(line: usize, reason: &str, content: &str) -> Self {
        Self::new(
            ParseErrorKind::MalformedLine,
            line,
            format!("{reason}: {content:?}"),
        )
    }

    /// Creates an invalid property error for a known property whose line
    /// failed validation.
    #[must_use]
    pub fn invalid_property(line: usize, name: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            ParseErrorKind::InvalidProperty,
            line,
            format!("invalid {name}: {reason}"),
        )
    }

    /// Creates an input size error.
    #[must_use]
    pub fn too_large(len: usize, limit: usize) -> Self {
        Self::new(
            ParseErrorKind::InputTooLarge,
            0,
            format!("input is {len} bytes, limit is {limit}"),
        )
    }

    /// Maps a card-level construction error raised at `line`.
    #[must_use]
    pub fn from_vcard(line: usize, err: &VCardError) -> Self {
        let kind = match err {
            VCardError::IllegalCharacter { .. } => ParseErrorKind::IllegalCharacter,
            VCardError::Cardinality { .. } => ParseErrorKind::Cardinality,
            _ => ParseErrorKind::InvalidProperty,
        };
        let line = match err {
            VCardError::IllegalCharacter { line, .. } => *line,
            _ => line,
        };
        Self::new(kind, line, err.to_string())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}: {}", self.kind, self.message)
        } else {
            write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Raw control character in the input.
    IllegalCharacter,
    /// First line is not `BEGIN:VCARD`.
    MissingBegin,
    /// Second line is not a VERSION line.
    MissingVersion,
    /// VERSION is present but not 4.0.
    UnsupportedVersion,
    /// Input ended before `END:VCARD`.
    MissingEnd,
    /// A line that is not a content line, or an unexpected structural line.
    MalformedLine,
    /// A known property whose parameters or value are invalid.
    InvalidProperty,
    /// Too many or too few entries of a property.
    Cardinality,
    /// Input exceeds the configured size limit.
    InputTooLarge,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalCharacter => write!(f, "illegal character"),
            Self::MissingBegin => write!(f, "missing BEGIN:VCARD"),
            Self::MissingVersion => write!(f, "missing VERSION"),
            Self::UnsupportedVersion => write!(f, "unsupported version"),
            Self::MissingEnd => write!(f, "missing END:VCARD"),
            Self::MalformedLine => write!(f, "malformed line"),
            Self::InvalidProperty => write!(f, "invalid property"),
            Self::Cardinality => write!(f, "cardinality violation"),
            Self::InputTooLarge => write!(f, "input too large"),
        }
    }
}
