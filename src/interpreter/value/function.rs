use std::{fmt, rc::Rc};

use crate::{
    ast::FunctionDef,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        context::Context, environment::Environment, evaluator::core::EvalResult, position::Span,
        value::core::Value,
    },
};

/// A user-defined function together with the environment it closes over.
#[derive(Clone)]
pub struct Function {
    /// The parsed definition, shared with the AST it came from.
    pub def: Rc<FunctionDef>,
    /// The scope the definition was evaluated in.
    pub env: Environment,
}

impl Function {
    /// The name shown in tracebacks and arity errors.
    #[must_use]
    pub fn name(&self) -> &str {
        self.def.name.as_deref().unwrap_or("<anonymous>")
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name())
         .field("params", &self.def.params)
         .finish_non_exhaustive()
    }
}

/// Signature of a native implementation.
pub type NativeFn = Rc<dyn Fn(&NativeCall<'_>) -> EvalResult<Value>>;

/// A built-in function.
///
/// Natives follow the same contract as user functions: a fixed list of
/// parameter names, bound to the arguments in a fresh scope before the
/// implementation runs.
#[derive(Clone)]
pub struct NativeFunction {
    pub name:   &'static str,
    pub params: &'static [&'static str],
    pub func:   NativeFn,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
         .field("name", &self.name)
         .field("params", &self.params)
         .finish_non_exhaustive()
    }
}

/// Everything a native implementation sees of its invocation.
pub struct NativeCall<'a> {
    /// Scope holding the arguments under the parameter names.
    pub scope:   Environment,
    /// The frame of this call.
    pub context: Context,
    /// The call expression.
    pub span:    &'a Span,
    /// The root scope the native was installed into.
    pub globals: &'a Environment,
}

impl NativeCall<'_> {
    /// Reads the argument bound to the parameter `name`.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if no such parameter was bound.
    pub fn arg(&self, name: &str) -> EvalResult<Value> {
        self.scope.lookup(name).ok_or_else(|| {
                                   self.error(RuntimeErrorKind::UndefinedVariable,
                                              format!("'{name}' ain't defined"))
                               })
    }

    /// Builds an error attributed to the call site, inside this call's frame.
    #[must_use]
    pub fn error(&self, kind: RuntimeErrorKind, details: impl Into<String>) -> RuntimeError {
        RuntimeError::new(kind, details, self.span.clone(), Some(self.context.clone()))
    }
}
