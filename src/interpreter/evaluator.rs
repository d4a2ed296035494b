/// Binary operator evaluation logic.
///
/// Handles arithmetic over numbers, text and lists, comparisons and the
/// logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix plus, arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluator, the dispatch over expression variants, literals,
/// identifiers and assignments.
pub mod core;

/// Evaluation of `RECKON` conditionals.
pub mod conditional;

/// Evaluation of `TROT` and `WHILES` loops.
///
/// Both loops collect the values of their body into a list.
pub mod loops;

/// Function definition and calls.
///
/// Creates closures, checks arity and invokes user-defined and native
/// functions in their own scope and execution context.
pub mod function;
