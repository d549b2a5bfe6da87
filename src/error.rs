//! Error types for URL parsing and percent-decoding.

use std::fmt;

/// Errors that can occur when parsing a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
///
/// Every variant is a malformed-URL reason; the parser has no other error
/// category. Parsing either yields a fully populated [`crate::Url`] or one
/// of these, never a partially committed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The scheme is not followed by a literal `://`
    MissingSchemeSeparator,
    /// A bracketed IPv6 host literal has no closing `]`
    UnterminatedIpv6Host,
    /// A closing `]` is followed by something other than `:`, `/`, `?`,
    /// `#`, or end of input
    InvalidCharacterAfterIpv6Host {
        /// The offending character
        found: char,
        /// Position in the input
        position: usize,
    },
    /// The port section is empty or contains a non-digit character
    InvalidPort {
        /// The text found where digits were expected
        found: String,
    },
    /// The path component is not valid percent-escaped text
    InvalidPathEncoding(DecodeError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URL '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::MissingSchemeSeparator => {
                write!(f, "scheme must be followed by '://'")
            }
            ParseErrorKind::UnterminatedIpv6Host => {
                write!(f, "bracketed IPv6 host is missing the closing ']'")
            }
            ParseErrorKind::InvalidCharacterAfterIpv6Host { found, position } => {
                write!(
                    f,
                    "unexpected character '{found}' at position {position} after IPv6 host; expected ':', '/', '?', '#', or end of input"
                )
            }
            ParseErrorKind::InvalidPort { found } => {
                if found.is_empty() {
                    write!(f, "port is empty; expected one or more digits after ':'")
                } else {
                    write!(f, "invalid port '{found}'; only decimal digits allowed")
                }
            }
            ParseErrorKind::InvalidPathEncoding(e) => {
                write!(f, "invalid percent encoding in path: {e}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors for percent-decoding.
///
/// The decoder is a strict validator: input must consist solely of valid
/// `%XX` escapes, ASCII alphanumerics, and mark-set punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` escape is truncated, has non-hex digits, or its decoded bytes
    /// do not form valid UTF-8
    InvalidEscape {
        /// Position of the escape in the input
        position: usize,
    },
    /// A literal character outside the alphanumeric and mark sets
    InvalidCharacter {
        /// The offending character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEscape { position } => {
                write!(
                    f,
                    "invalid percent escape at position {position}; expected '%' followed by two hex digits"
                )
            }
            Self::InvalidCharacter { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position}; allowed: alphanumeric, marks, and '%' escapes"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}
