/// Entry points of the parser.
///
/// Holds the program-level `parse` function, the expression entry point,
/// assignments and conditionals.
pub mod core;

/// Prefix operators, calls and atoms.
///
/// Handles unary `+`/`-`, postfix call syntax and every atom of the grammar,
/// including list literals, loops and function definitions.
pub mod unary;

/// Binary operator precedence levels.
///
/// Implements the left-associative logical, comparison, additive and
/// multiplicative levels.
pub mod binary;

/// Shared parsing helpers.
///
/// Token expectations, identifiers and comma separated lists.
pub mod utils;
