use std::{cmp::Ordering, rc::Rc};

use tracing::trace;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeErrorKind,
    interpreter::{
        context::Context,
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        position::Span,
        value::{
            core::{Value, ValueKind},
            function::{Function, NativeCall, NativeFunction},
        },
    },
};

impl Evaluator {
    /// Creates a function value closing over `env`.
    ///
    /// A named function is also bound in `env` right away, which lets its body
    /// call it recursively by name.
    pub(crate) fn eval_function_def(def: &Rc<FunctionDef>,
                                    span: &Span,
                                    env: &Environment,
                                    ctx: &Context)
                                    -> Value {
        let function = Function { def: Rc::clone(def),
                                  env: env.clone() };
        let value = Self::stamp(Value::from(function), span, ctx);

        if let Some(name) = &def.name {
            env.bind(name.clone(), value.clone());
        }
        value
    }

    /// Evaluates a function call.
    ///
    /// The callee is evaluated first, then each argument from left to right,
    /// and finally the call is performed with [`Evaluator::invoke`].
    pub(crate) fn eval_call(&self,
                            callee: &Expr,
                            arguments: &[Expr],
                            span: &Span,
                            env: &Environment,
                            ctx: &Context)
                            -> EvalResult<Option<Value>> {
        let callee = self.eval_value(callee, env, ctx)?;
        let args = arguments.iter()
                            .map(|arg| self.eval_value(arg, env, ctx))
                            .collect::<EvalResult<Vec<_>>>()?;

        let result = self.invoke(&callee, args, span, ctx)?;
        Ok(result.map(|value| Self::stamp(value, span, ctx)))
    }

    /// Calls a function value with already evaluated arguments.
    ///
    /// # Parameters
    /// - `callee`: The value being called.
    /// - `args`: Argument values in order.
    /// - `span`: The call expression, recorded as the call site.
    /// - `ctx`: The caller's execution context.
    ///
    /// # Returns
    /// The value of the function body, `None` if the body produced no value.
    ///
    /// # Errors
    /// - `ArityMismatch` when the argument count differs from the parameter
    ///   count.
    /// - `InvalidOperation` when `callee` is not a function.
    /// - Any error raised by the function body.
    pub fn invoke(&self,
                  callee: &Value,
                  args: Vec<Value>,
                  span: &Span,
                  ctx: &Context)
                  -> EvalResult<Option<Value>> {
        match &callee.kind {
            ValueKind::Function(function) => self.call_function(function, args, span, ctx),
            ValueKind::Native(native) => self.call_native(native, args, span, ctx).map(Some),
            _ => Err(Self::error(RuntimeErrorKind::InvalidOperation,
                                 format!("Cannot call a {}", callee.type_name()),
                                 span,
                                 ctx)),
        }
    }

    /// Executes a user-defined function.
    ///
    /// The parameters are bound in a new scope enclosed by the function's
    /// captured environment, not by the caller's scope. The body runs in a new
    /// execution context whose parent is the caller's context.
    #[tracing::instrument(level = "trace", skip_all, fields(function = function.name()))]
    fn call_function(&self,
                     function: &Function,
                     args: Vec<Value>,
                     span: &Span,
                     ctx: &Context)
                     -> EvalResult<Option<Value>> {
        check_arity(function.name(), function.def.params.len(), args.len(), span, ctx)?;

        let frame = ctx.enter(function.name(), Some(span.start.clone()));
        let scope = Environment::new_child(&function.env);
        for (param, arg) in function.def.params.iter().zip(args) {
            scope.bind(param.clone(), arg.with_context(frame.clone()));
        }

        let result = self.eval(&function.def.body, &scope, &frame);
        trace!(ok = result.is_ok(), "returned");
        result
    }

    /// Executes a native function.
    ///
    /// Natives do not close over the caller's scope: their arguments are bound
    /// in a new scope enclosed by the global scope.
    #[tracing::instrument(level = "trace", skip_all, fields(function = native.name))]
    fn call_native(&self,
                   native: &NativeFunction,
                   args: Vec<Value>,
                   span: &Span,
                   ctx: &Context)
                   -> EvalResult<Value> {
        check_arity(native.name, native.params.len(), args.len(), span, ctx)?;

        let frame = ctx.enter(native.name, Some(span.start.clone()));
        let scope = Environment::new_child(self.globals());
        for (param, arg) in native.params.iter().zip(args) {
            scope.bind(*param, arg.with_context(frame.clone()));
        }

        (native.func)(&NativeCall { scope,
                                    context: frame,
                                    span,
                                    globals: self.globals() })
    }
}

/// Ensures a call passes exactly as many arguments as there are parameters.
fn check_arity(name: &str,
               expected: usize,
               given: usize,
               span: &Span,
               ctx: &Context)
               -> EvalResult<()> {
    let details = match given.cmp(&expected) {
        Ordering::Equal => return Ok(()),
        Ordering::Greater => format!("Too many arguments passed to '{name}'"),
        Ordering::Less => format!("Too few arguments passed to '{name}'"),
    };
    Err(Evaluator::error(RuntimeErrorKind::ArityMismatch, details, span, ctx))
}
