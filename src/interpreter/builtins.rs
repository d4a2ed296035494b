/// The built-in registry.
///
/// Declares the table of built-in functions and installs them, together with
/// the predefined constants, into a root environment.
pub mod core;
/// `HOLLER` and `SPEAKUP`.
///
/// Console output and input.
pub mod io;
/// `SHOVE`, `YANK` and `STACKON`.
///
/// List primitives. `SHOVE` and `YANK` are the only operations that change a
/// list in place.
pub mod list;
/// `FIREUP`.
///
/// Loads a script file and runs it in the caller's global scope.
pub mod script;
