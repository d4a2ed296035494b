/// Source positions.
///
/// Defines `Position` and `Span`, attached to every token, syntax tree node
/// and value, and the `LineIndex` that computes them from byte offsets.
pub mod position;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// lexemes, each a token with its span: literals, identifiers, keywords,
/// operators and punctuation. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source locations.
/// - Resolves escapes in text literals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts lexemes into AST nodes by recursive descent, one function per
///   precedence level.
/// - Stops at the first unmet expectation with a `SyntaxError` naming what
///   was expected.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines `Value`, the closed set of runtime variants and their metadata.
/// - Implements truthiness and the printed form of values.
/// - Defines list sharing and the function types.
pub mod value;
/// Lexical scopes.
///
/// Chained frames of name bindings; closures keep the frame they were defined
/// in alive.
pub mod environment;
/// The dynamic call chain.
///
/// Execution contexts record who called whom and from where. They exist only
/// to render tracebacks and are independent of the lexical scopes.
pub mod context;
/// The evaluator module executes AST nodes and computes results.
///
/// # Responsibilities
/// - Evaluates every expression variant.
/// - Dispatches operators over the value variants.
/// - Creates scopes and execution contexts for calls.
/// - Reports runtime errors such as division by zero or undefined names.
pub mod evaluator;
/// Built-in functions and constants.
pub mod builtins;
/// A persistent interpreter session.
pub mod session;
