use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, function::NativeCall},
    },
};

/// Prints a value to standard output and returns `0`.
///
/// The value is formatted using its `Display` implementation, so text is
/// printed without quotes.
pub fn holler(call: &NativeCall<'_>) -> EvalResult<Value> {
    println!("{}", call.arg("value")?);
    Ok(Value::from(0.0))
}

/// Reads one line from standard input.
///
/// The line is converted with [`coerce_input`]. End of input reads as empty
/// text.
///
/// # Errors
/// `InvalidOperation` if standard input cannot be read.
pub fn speakup(call: &NativeCall<'_>) -> EvalResult<Value> {
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)
                    .map_err(|e| {
                        call.error(RuntimeErrorKind::InvalidOperation,
                                   format!("Failed to read input: {e}"))
                    })?;

    Ok(coerce_input(line.trim_end_matches(['\n', '\r'])))
}

/// Converts a line of user input to a value.
///
/// Integers and then floating-point numbers become numbers; anything else is
/// kept as text.
///
/// ## Example
/// ```
/// use southscript::interpreter::{builtins::io::coerce_input, value::core::Value};
///
/// assert_eq!(coerce_input("42"), Value::from(42.0));
/// assert_eq!(coerce_input(" 2.5 "), Value::from(2.5));
/// assert_eq!(coerce_input("howdy"), Value::from("howdy"));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn coerce_input(text: &str) -> Value {
    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::from(n as f64);
    }
    if let Ok(x) = trimmed.parse::<f64>() {
        return Value::from(x);
    }
    Value::from(text)
}
