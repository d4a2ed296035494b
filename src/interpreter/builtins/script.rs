use std::fs;

use tracing::info;

use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        builtins::core::ScriptRunner,
        evaluator::core::EvalResult,
        value::{core::Value, function::NativeCall},
    },
};

/// Loads the script named by `filename` and runs it with `run`.
///
/// The script shares the global scope of the caller, so it can read the
/// caller's global bindings and its own top-level assignments remain visible
/// afterwards. It runs inside the `FIREUP` frame, so errors inside it show the
/// call in their traceback. Returns `0` on success.
///
/// # Errors
/// - `InvalidArgumentType` if `filename` is not text.
/// - `ScriptLoadFailed` if the file cannot be read.
/// - `ScriptFailed` wrapping the rendered error of a failing script.
pub fn fireup(call: &NativeCall<'_>, run: ScriptRunner) -> EvalResult<Value> {
    let filename = call.arg("filename")?;
    let Some(path) = filename.as_text() else {
        return Err(call.error(RuntimeErrorKind::InvalidArgumentType,
                              "Expected single text argument"));
    };

    let source = fs::read_to_string(path).map_err(|e| {
                                              call.error(RuntimeErrorKind::ScriptLoadFailed,
                                                         format!("Failed to load script '{path}': {e}"))
                                          })?;

    info!(path, "running script");
    run(path, &source, call.globals, &call.context).map_err(|e| {
                                                       call.error(RuntimeErrorKind::ScriptFailed,
                                                                  format!("Script execution failed:\n{e}"))
                                                   })?;

    Ok(Value::from(0.0))
}
