/// The runtime value representation.
///
/// Defines `Value`, its variant set `ValueKind`, truthiness and the display
/// form used by printing and the REPL.
pub mod core;
/// Shared list storage.
///
/// Defines the `List` handle. Lists are shared between the values that refer
/// to them; operators build fresh lists and only built-ins mutate in place.
pub mod list;
/// Callable values.
///
/// User-defined functions with their captured environment, and native
/// built-ins with their calling contract.
pub mod function;
