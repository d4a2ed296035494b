use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeErrorKind,
    interpreter::{
        context::Context,
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        position::Span,
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a `TROT` expression.
    ///
    /// The bounds and the step are evaluated once, in that order; the step
    /// defaults to `1`. A positive step counts up while the loop variable is
    /// at most `end`, a negative step counts down while it is at least `end`.
    /// The end bound is inclusive.
    ///
    /// The loop variable is bound in the current scope on every iteration, so
    /// it remains visible after the loop.
    ///
    /// # Returns
    /// A list of the values the body produced, in iteration order. Iterations
    /// whose body produced no value contribute nothing.
    ///
    /// # Errors
    /// - `StepIsZero` for a step of zero.
    /// - `InvalidOperation` if a bound or the step is not a number.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn eval_for(&self,
                           var: &str,
                           start: &Expr,
                           end: &Expr,
                           step: Option<&Expr>,
                           body: &Expr,
                           span: &Span,
                           env: &Environment,
                           ctx: &Context)
                           -> EvalResult<Value> {
        let start = self.eval_number(start, "start", env, ctx)?;
        let end = self.eval_number(end, "end", env, ctx)?;
        let step = match step {
            Some(step) => self.eval_number(step, "step", env, ctx)?,
            None => 1.0,
        };

        if step == 0.0 {
            return Err(Self::error(RuntimeErrorKind::StepIsZero,
                                   "Step value cannot be zero",
                                   span,
                                   ctx));
        }

        let mut items = Vec::new();
        let mut current = start;
        while (step > 0.0 && current <= end) || (step < 0.0 && current >= end) {
            env.bind(var, Value::from(current).with_context(ctx.clone()));
            if let Some(value) = self.eval(body, env, ctx)? {
                items.push(value);
            }
            current += step;
        }

        trace!(var, iterations = items.len(), "loop finished");
        Ok(Self::stamp(Value::from(items), span, ctx))
    }

    /// Evaluates a `WHILES` expression.
    ///
    /// The condition is evaluated before every iteration and the loop stops
    /// as soon as it is falsy. A loop without a body evaluates its condition
    /// once and stops.
    ///
    /// # Returns
    /// A list of the values the body produced, as for `TROT`.
    pub(crate) fn eval_while(&self,
                             condition: &Expr,
                             body: Option<&Expr>,
                             span: &Span,
                             env: &Environment,
                             ctx: &Context)
                             -> EvalResult<Value> {
        let mut items = Vec::new();

        while self.eval_value(condition, env, ctx)?.is_truthy() {
            let Some(body) = body else {
                break;
            };
            if let Some(value) = self.eval(body, env, ctx)? {
                items.push(value);
            }
        }

        Ok(Self::stamp(Value::from(items), span, ctx))
    }

    /// Evaluates a loop bound or step, which must be a number.
    fn eval_number(&self,
                   expr: &Expr,
                   role: &str,
                   env: &Environment,
                   ctx: &Context)
                   -> EvalResult<f64> {
        let value = self.eval_value(expr, env, ctx)?;
        value.as_number().ok_or_else(|| {
                             Self::error(RuntimeErrorKind::InvalidOperation,
                                         format!("Loop {role} must be a number, not {}",
                                                 value.type_name()),
                                         expr.span(),
                                         ctx)
                         })
    }
}
