/// Operator dispatch and the shared invalid-operation error.
pub mod core;

/// `+`, `-`, `*` and `/` over numbers, text and lists.
pub mod arithmetic;

/// Relational and equality operators.
pub mod comparison;

/// `AN'`, `OR` and `AIN'T`.
pub mod logic;
