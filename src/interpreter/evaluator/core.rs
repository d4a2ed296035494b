use crate::{
    ast::Expr,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        context::Context,
        environment::Environment,
        position::Span,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks the syntax tree and computes values.
///
/// The evaluator itself is stateless apart from the global scope, into which
/// built-ins are installed and in which native functions run. All other state
/// lives in the [`Environment`] and [`Context`] passed to [`Evaluator::eval`].
///
/// ## Usage
///
/// An `Evaluator` is cheap to create; the interpreter session makes one per
/// program run and reuses the same global environment across runs.
pub struct Evaluator {
    globals: Environment,
}

impl Evaluator {
    /// Creates an evaluator whose natives run under `globals`.
    #[must_use]
    pub const fn new(globals: Environment) -> Self {
        Self { globals }
    }

    #[must_use]
    pub const fn globals(&self) -> &Environment {
        &self.globals
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, identifiers,
    /// assignments, unary and binary operations, conditionals, loops, function
    /// definitions and calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Scope in which names are resolved and bound.
    /// - `ctx`: The current execution context, recorded in errors.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for
    /// constructs that do not yield one, such as a `RECKON` where no case
    /// holds and there is no `ELSE`.
    ///
    /// # Example
    /// ```
    /// use southscript::{
    ///     interpreter::{
    ///         context::Context, environment::Environment, evaluator::core::Evaluator,
    ///         lexer::tokenize, parser::core::parse, value::core::Value,
    ///     },
    /// };
    ///
    /// let lexemes = tokenize("<stdin>", "[THANG x = 2, x * 21]").unwrap();
    /// let program = parse(&lexemes).unwrap();
    ///
    /// let globals = Environment::new_root();
    /// let evaluator = Evaluator::new(globals.clone());
    /// let result = evaluator.eval(&program, &globals, &Context::root("<main>")).unwrap();
    ///
    /// assert_eq!(result, Some(Value::from(vec![Value::from(2.0), Value::from(42.0)])));
    /// ```
    pub fn eval(&self, expr: &Expr, env: &Environment, ctx: &Context) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Number { value, span } => Ok(Some(Self::stamp(Value::from(*value), span, ctx))),
            Expr::Text { value, span } => {
                Ok(Some(Self::stamp(Value::from(value.as_str()), span, ctx)))
            },
            Expr::List { items, span } => {
                let items = items.iter()
                                 .map(|item| self.eval_value(item, env, ctx))
                                 .collect::<EvalResult<Vec<_>>>()?;
                Ok(Some(Self::stamp(Value::from(items), span, ctx)))
            },
            Expr::Identifier { name, span } => Self::eval_identifier(name, span, env, ctx).map(Some),
            Expr::Assignment { name, value, .. } => {
                let value = self.eval_value(value, env, ctx)?;
                env.bind(name.clone(), value.clone());
                Ok(Some(value))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             span, } => self.eval_binary_op(left, *op, right, span, env, ctx).map(Some),
            Expr::UnaryOp { op, operand, span } => {
                self.eval_unary_op(*op, operand, span, env, ctx).map(Some)
            },
            Expr::Conditional { cases, default, .. } => {
                self.eval_conditional(cases, default.as_deref(), env, ctx)
            },
            Expr::ForLoop { var,
                            start,
                            end,
                            step,
                            body,
                            span, } => {
                self.eval_for(var, start, end, step.as_deref(), body, span, env, ctx).map(Some)
            },
            Expr::WhileLoop { condition, body, span } => {
                self.eval_while(condition, body.as_deref(), span, env, ctx).map(Some)
            },
            Expr::FunctionDef { def, span } => {
                Ok(Some(Self::eval_function_def(def, span, env, ctx)))
            },
            Expr::Call { callee,
                         arguments,
                         span, } => self.eval_call(callee, arguments, span, env, ctx),
        }
    }

    /// Evaluates an expression whose value is required, such as an operand or
    /// an argument.
    ///
    /// # Errors
    /// Besides any error of the expression itself, fails with
    /// `InvalidOperation` when the expression produced no value.
    pub fn eval_value(&self, expr: &Expr, env: &Environment, ctx: &Context) -> EvalResult<Value> {
        self.eval(expr, env, ctx)?.ok_or_else(|| {
                                      Self::error(RuntimeErrorKind::InvalidOperation,
                                                  "expression produced no value",
                                                  expr.span(),
                                                  ctx)
                                  })
    }

    /// Reads a variable.
    ///
    /// The stored value is copied and re-attributed to the reference, so later
    /// rebinding of the name never changes a value that was already read.
    fn eval_identifier(name: &str,
                       span: &Span,
                       env: &Environment,
                       ctx: &Context)
                       -> EvalResult<Value> {
        let value = env.lookup(name).ok_or_else(|| {
                                        Self::error(RuntimeErrorKind::UndefinedVariable,
                                                    format!("'{name}' ain't defined"),
                                                    span,
                                                    ctx)
                                    })?;
        Ok(Self::stamp(value, span, ctx))
    }

    /// Attributes a value to the node that produced it.
    pub(crate) fn stamp(value: Value, span: &Span, ctx: &Context) -> Value {
        value.with_span(span.clone()).with_context(ctx.clone())
    }

    /// Builds an error attributed to `span` in the context `ctx`.
    pub(crate) fn error(kind: RuntimeErrorKind,
                        details: impl Into<String>,
                        span: &Span,
                        ctx: &Context)
                        -> RuntimeError {
        RuntimeError::new(kind, details, span.clone(), Some(ctx.clone()))
    }
}
