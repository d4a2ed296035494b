use crate::{
    ast::{ConditionalCase, Expr},
    interpreter::{
        context::Context,
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a `RECKON` expression.
    ///
    /// Conditions are evaluated in order; the result of the first case whose
    /// condition is truthy is returned and later cases are not evaluated.
    /// Without a matching case the `ELSE` result is returned, and without an
    /// `ELSE` the conditional produces no value.
    pub(crate) fn eval_conditional(&self,
                                   cases: &[ConditionalCase],
                                   default: Option<&Expr>,
                                   env: &Environment,
                                   ctx: &Context)
                                   -> EvalResult<Option<Value>> {
        for case in cases {
            if self.eval_value(&case.condition, env, ctx)?.is_truthy() {
                return self.eval(&case.result, env, ctx);
            }
        }

        match default {
            Some(default) => self.eval(default, env, ctx),
            None => Ok(None),
        }
    }
}
