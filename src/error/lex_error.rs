use std::fmt;

use crate::interpreter::position::Span;

/// The ways tokenization can fail.
///
/// `BadCharacter` is the default because the lexer reports it for any input
/// that matches no token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[default]
    BadCharacter,
    /// A `!` that is not followed by `=`.
    MissingCharacter,
    /// A text literal without its closing quote.
    UnterminatedText,
    /// An integer literal that does not fit in 64 bits.
    LiteralTooLarge,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BadCharacter => "Bad Character",
            Self::MissingCharacter => "Missing Character",
            Self::UnterminatedText => "Unterminated Text",
            Self::LiteralTooLarge => "Literal Too Large",
        };
        write!(f, "{label}")
    }
}

/// A tokenization failure anchored at the offending source range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}\nCattywampus! {kind}: {details}", .span.start)]
pub struct LexError {
    /// What went wrong.
    pub kind:    LexErrorKind,
    /// Human readable details, usually the quoted offending text.
    pub details: String,
    /// Where it went wrong.
    pub span:    Span,
}

impl LexError {
    /// Builds the error for the text the lexer failed on.
    ///
    /// A lone `!` is reported as a missing `=`, every other unmatched input as
    /// the first character of the failing slice.
    #[must_use]
    pub fn from_slice(kind: LexErrorKind, slice: &str, span: Span) -> Self {
        let first = slice.chars().next().unwrap_or_default();
        let (kind, details) = match kind {
            LexErrorKind::BadCharacter if first == '!' => {
                (LexErrorKind::MissingCharacter, "'=' after '!'".to_string())
            },
            LexErrorKind::BadCharacter | LexErrorKind::MissingCharacter => (kind, format!("'{first}'")),
            LexErrorKind::UnterminatedText => (kind, "Expected closing '\"'".to_string()),
            LexErrorKind::LiteralTooLarge => (kind, format!("'{slice}' is too large")),
        };
        Self { kind, details, span }
    }
}
