/// Lexical errors.
///
/// Raised by the tokenizer for characters that cannot start a token, a lone
/// `!`, unterminated text literals and oversized integer literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the syntax error produced by the first unmet expectation of the
/// parser. Parsing never recovers, so a parse yields at most one error.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error raised during evaluation, its kind taxonomy and the
/// traceback reconstruction over the execution context chain.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::SyntaxError;
pub use runtime_error::{RuntimeError, RuntimeErrorKind};

/// Any failure of the tokenize, parse, evaluate pipeline.
///
/// Each phase stops at its first error, so running a program yields either a
/// value or exactly one of these.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token sequence is not a valid program.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
