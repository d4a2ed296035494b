use tracing::debug;

use crate::{
    error::{Error, RuntimeError},
    execute,
    interpreter::{
        builtins::core::{install, install_named},
        context::Context,
        environment::Environment,
        value::core::Value,
    },
};

/// A long-lived interpreter.
///
/// Owns the global scope and the `<main>` execution context. Bindings made by
/// one program stay visible to the programs run after it, which is how the
/// REPL keeps state between lines.
///
/// ## Example
/// ```
/// use southscript::interpreter::{session::Interpreter, value::core::Value};
///
/// let interpreter = Interpreter::new();
/// interpreter.run("<stdin>", "THANG x = 20").unwrap();
///
/// let result = interpreter.run("<stdin>", "x + 1").unwrap();
/// assert_eq!(result, Some(Value::from(21.0)));
/// ```
pub struct Interpreter {
    globals: Environment,
    context: Context,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with every built-in installed.
    #[must_use]
    pub fn new() -> Self {
        let globals = Environment::new_root();
        install(&globals, execute);
        Self { globals,
               context: Context::root("<main>") }
    }

    /// Creates an interpreter with only the named built-ins installed.
    ///
    /// The constants `NULL`, `TRUE` and `FALSE` are always available.
    ///
    /// # Errors
    /// Returns `UnknownNativeFunction` for a name that is not a built-in.
    pub fn with_builtins(names: &[&str]) -> Result<Self, RuntimeError> {
        let globals = Environment::new_root();
        install_named(&globals, names, execute)?;
        Ok(Self { globals,
                  context: Context::root("<main>") })
    }

    /// Runs one program in the global scope.
    ///
    /// # Returns
    /// The program's value, `None` if it produced no value.
    pub fn run(&self, source_name: &str, source: &str) -> Result<Option<Value>, Error> {
        debug!(source = source_name, "running program");
        execute(source_name, source, &self.globals, &self.context)
    }

    #[must_use]
    pub const fn globals(&self) -> &Environment {
        &self.globals
    }

    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }
}
