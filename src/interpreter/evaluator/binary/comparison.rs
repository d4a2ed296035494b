use crate::{
    ast::BinaryOperator,
    interpreter::{
        context::Context,
        evaluator::core::{EvalResult, Evaluator},
        position::Span,
        value::core::{Value, ValueKind},
    },
};

impl Evaluator {
    /// Evaluates relational and equality operators.
    ///
    /// Only numbers can be compared. The result is the number `1` when the
    /// comparison holds and `0` otherwise.
    ///
    /// # Errors
    /// `InvalidOperation` unless both operands are numbers.
    pub(crate) fn eval_comparison(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  span: &Span,
                                  ctx: &Context)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let (ValueKind::Number(a), ValueKind::Number(b)) = (&left.kind, &right.kind) else {
            return Err(Self::invalid_operation(op, left, right, span, ctx));
        };

        let holds = match op {
            Equal => a == b,
            NotEqual => a != b,
            Less => a < b,
            Greater => a > b,
            LessEqual => a <= b,
            GreaterEqual => a >= b,
            _ => unreachable!("not a comparison operator: {op}"),
        };
        Ok(Value::from(holds))
    }
}
