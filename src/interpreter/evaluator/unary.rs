use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{
        context::Context,
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        position::Span,
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates the operand of a unary expression and applies the operator.
    pub(crate) fn eval_unary_op(&self,
                                op: UnaryOperator,
                                operand: &Expr,
                                span: &Span,
                                env: &Environment,
                                ctx: &Context)
                                -> EvalResult<Value> {
        let operand = self.eval_value(operand, env, ctx)?;
        let result = Self::eval_unary(op, &operand, span, ctx)?;
        Ok(Self::stamp(result, span, ctx))
    }

    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the operand unchanged, whatever its type.
    /// - `Negate`: multiplies the operand by `-1`, so it follows the rules of
    ///   `*`; negating text repeats it a negative number of times and yields
    ///   empty text.
    /// - `Not`: logical negation of a number.
    ///
    /// # Example
    /// ```
    /// use southscript::{
    ///     ast::UnaryOperator,
    ///     interpreter::{
    ///         context::Context, evaluator::core::Evaluator, position::LineIndex,
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let span = LineIndex::new("<stdin>", "-5").span(0..2);
    /// let ctx = Context::root("<main>");
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::from(5.0), &span, &ctx);
    /// assert_eq!(v.unwrap(), Value::from(-5.0));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::from(0.0), &span, &ctx);
    /// assert_eq!(v.unwrap(), Value::from(1.0));
    /// ```
    pub fn eval_unary(op: UnaryOperator,
                      operand: &Value,
                      span: &Span,
                      ctx: &Context)
                      -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => Ok(operand.clone()),
            UnaryOperator::Negate => {
                Self::eval_arithmetic(BinaryOperator::Mul, operand, &Value::from(-1.0), span, ctx)
            },
            UnaryOperator::Not => Self::eval_not(operand, span, ctx),
        }
    }
}
