use crate::{
    ast::{BinaryOperator, Expr},
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        context::Context,
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        position::Span,
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates both operands of a binary expression and applies the
    /// operator.
    ///
    /// Operands are evaluated left to right and always both, including for
    /// `AN'` and `OR`. The result is attributed to the whole expression.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 span: &Span,
                                 env: &Environment,
                                 ctx: &Context)
                                 -> EvalResult<Value> {
        let left = self.eval_value(left, env, ctx)?;
        let right = self.eval_value(right, env, ctx)?;

        let result = Self::eval_binary(op, &left, &right, span, ctx)?;
        Ok(Self::stamp(result, span, ctx))
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators dispatch on both operand types, see
    /// [`Evaluator::eval_arithmetic`]. Relational and equality operators use
    /// [`Evaluator::eval_comparison`], logical operators
    /// [`Evaluator::eval_logic`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `span`: Span of the whole expression, used for errors.
    /// - `ctx`: Current execution context, used for errors.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use southscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{
    ///         context::Context, evaluator::core::Evaluator, position::LineIndex,
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let span = LineIndex::new("<stdin>", "\"ab\" * 3").span(0..8);
    /// let ctx = Context::root("<main>");
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Mul,
    ///                                     &Value::from("ab"),
    ///                                     &Value::from(3.0),
    ///                                     &span,
    ///                                     &ctx);
    /// assert_eq!(result.unwrap(), Value::from("ababab"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       span: &Span,
                       ctx: &Context)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right, span, ctx),
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right, span, ctx)
            },
            And | Or => Self::eval_logic(op, left, right, span, ctx),
        }
    }

    /// The error for an operator applied to operand types it does not
    /// support.
    pub(crate) fn invalid_operation(op: impl std::fmt::Display,
                                    left: &Value,
                                    right: &Value,
                                    span: &Span,
                                    ctx: &Context)
                                    -> RuntimeError {
        Self::error(RuntimeErrorKind::InvalidOperation,
                    format!("Cannot apply '{op}' to {} and {}",
                            left.type_name(),
                            right.type_name()),
                    span,
                    ctx)
    }
}
