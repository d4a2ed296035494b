use crate::interpreter::position::Span;

/// Represents the syntax error raised at the first unmet expectation.
///
/// The details always read as an "Expected ..." message naming the token or
/// construct the parser wanted at `span`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}\nCattywampus! Syntax Problem: {details}", .span.start)]
pub struct SyntaxError {
    /// What the parser expected.
    pub details: String,
    /// The span of the offending token.
    pub span:    Span,
}

impl SyntaxError {
    #[must_use]
    pub fn expected(details: impl Into<String>, span: &Span) -> Self {
        Self { details: details.into(),
               span:    span.clone(), }
    }
}
