use std::rc::Rc;

use tracing::debug;

use crate::{
    error::{Error, RuntimeError, RuntimeErrorKind},
    interpreter::{
        builtins::{io, list, script},
        context::Context,
        environment::Environment,
        evaluator::core::EvalResult,
        position::LineIndex,
        value::{
            core::Value,
            function::{NativeCall, NativeFn, NativeFunction},
        },
    },
};

/// Runs a program in a given global scope and execution context.
///
/// `FIREUP` receives the pipeline through this type when the built-ins are
/// installed, so the registry never depends on the crate's entry points.
pub type ScriptRunner = fn(&str, &str, &Environment, &Context) -> Result<Option<Value>, Error>;

/// A built-in implementation that only needs its call.
type PlainFn = fn(&NativeCall<'_>) -> EvalResult<Value>;
/// A built-in implementation that runs other programs.
type LoaderFn = fn(&NativeCall<'_>, ScriptRunner) -> EvalResult<Value>;

#[derive(Clone, Copy)]
enum Implementation {
    Plain(PlainFn),
    Loader(LoaderFn),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the parameter names, which fix the arity,
/// - the implementation.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                params: $params:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:   &'static str,
            params: &'static [&'static str],
            func:   Implementation,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, params: $params, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "HOLLER"  => { params: &["value"],                      func: Implementation::Plain(io::holler) },
    "SPEAKUP" => { params: &[],                             func: Implementation::Plain(io::speakup) },
    "SHOVE"   => { params: &["collection", "value"],        func: Implementation::Plain(list::shove) },
    "YANK"    => { params: &["collection", "index"],        func: Implementation::Plain(list::yank) },
    "STACKON" => { params: &["collectionA", "collectionB"], func: Implementation::Plain(list::stackon) },
    "FIREUP"  => { params: &["filename"],                   func: Implementation::Loader(script::fireup) },
}

/// Predefined numeric constants, installed with every set of built-ins.
pub const CONSTANTS: &[(&str, f64)] = &[("NULL", 0.0), ("TRUE", 1.0), ("FALSE", 0.0)];

impl BuiltinDef {
    fn to_value(&self, runner: ScriptRunner) -> Value {
        let func: NativeFn = match self.func {
            Implementation::Plain(func) => Rc::new(func),
            Implementation::Loader(func) => Rc::new(move |call: &NativeCall<'_>| func(call, runner)),
        };
        Value::from(NativeFunction { name: self.name,
                                     params: self.params,
                                     func })
    }
}

/// Installs the constants and every built-in function into `env`.
///
/// # Example
/// ```
/// use southscript::{
///     execute,
///     interpreter::{builtins::core::install, environment::Environment},
/// };
///
/// let globals = Environment::new_root();
/// install(&globals, execute);
///
/// assert!(globals.contains_local("HOLLER"));
/// assert!(globals.contains_local("TRUE"));
/// ```
pub fn install(env: &Environment, runner: ScriptRunner) {
    install_constants(env);
    for def in BUILTIN_TABLE {
        env.bind(def.name, def.to_value(runner));
    }
    debug!(count = BUILTIN_TABLE.len(), "installed built-in functions");
}

/// Installs the constants and the built-in functions listed in `names`.
///
/// Nothing but the constants is installed if any name is unknown.
///
/// # Errors
/// Returns `UnknownNativeFunction` naming the first unknown built-in.
pub fn install_named(env: &Environment,
                     names: &[&str],
                     runner: ScriptRunner)
                     -> Result<(), RuntimeError> {
    install_constants(env);

    let defs = names.iter()
                    .map(|name| {
                        BUILTIN_TABLE.iter()
                                     .find(|def| def.name == *name)
                                     .ok_or_else(|| unknown_builtin(name))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

    for def in defs {
        env.bind(def.name, def.to_value(runner));
    }
    debug!(?names, "installed built-in functions");
    Ok(())
}

fn install_constants(env: &Environment) {
    for (name, value) in CONSTANTS {
        env.bind(*name, Value::from(*value));
    }
}

fn unknown_builtin(name: &str) -> RuntimeError {
    let span = LineIndex::new("<built-ins>", "").span(0..0);
    RuntimeError::new(RuntimeErrorKind::UnknownNativeFunction,
                      format!("No such built-in function: '{name}'"),
                      span,
                      None)
}
