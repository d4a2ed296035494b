use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::RuntimeErrorKind,
    interpreter::{
        context::Context,
        evaluator::core::{EvalResult, Evaluator},
        position::Span,
        value::core::{Value, ValueKind},
    },
};

impl Evaluator {
    /// Evaluates `AN'` and `OR` between two numbers.
    ///
    /// A number counts as true when it is nonzero. The result is `1` or `0`.
    /// Both operands have already been evaluated; there is no short-circuit.
    ///
    /// # Errors
    /// `InvalidOperation` unless both operands are numbers.
    pub(crate) fn eval_logic(op: BinaryOperator,
                             left: &Value,
                             right: &Value,
                             span: &Span,
                             ctx: &Context)
                             -> EvalResult<Value> {
        let (ValueKind::Number(a), ValueKind::Number(b)) = (&left.kind, &right.kind) else {
            return Err(Self::invalid_operation(op, left, right, span, ctx));
        };

        let (a, b) = (*a != 0.0, *b != 0.0);
        match op {
            BinaryOperator::And => Ok(Value::from(a && b)),
            BinaryOperator::Or => Ok(Value::from(a || b)),
            _ => unreachable!("not a logical operator: {op}"),
        }
    }

    /// Evaluates `AIN'T`: `1` for the number zero, `0` for any other number.
    ///
    /// # Errors
    /// `InvalidOperation` if the operand is not a number.
    pub(crate) fn eval_not(operand: &Value, span: &Span, ctx: &Context) -> EvalResult<Value> {
        match operand.kind {
            ValueKind::Number(n) => Ok(Value::from(n == 0.0)),
            _ => {
                Err(Self::error(RuntimeErrorKind::InvalidOperation,
                                format!("Cannot apply '{}' to {}",
                                        UnaryOperator::Not,
                                        operand.type_name()),
                                span,
                                ctx))
            },
        }
    }
}
