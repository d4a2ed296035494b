use crate::{
    ast::BinaryOperator,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        context::Context,
        evaluator::core::{EvalResult, Evaluator},
        position::Span,
        value::core::{Value, ValueKind, format_number},
    },
    util::num::repeat_count,
};

/// Longest text, in bytes, that repetition may produce.
pub const MAX_TEXT_LEN: usize = 1 << 30;

impl Evaluator {
    /// Evaluates `+`, `-`, `*` and `/`.
    ///
    /// Supported combinations:
    ///
    /// | Operator | Operands      | Result                                   |
    /// |----------|---------------|------------------------------------------|
    /// | `+`      | number number | sum                                      |
    /// | `+`      | text text     | concatenation                            |
    /// | `+`      | list any      | new list with the right operand appended |
    /// | `-`      | number number | difference                               |
    /// | `-`      | list number   | new list without the element at index    |
    /// | `*`      | number number | product                                  |
    /// | `*`      | text number   | text repeated                            |
    /// | `*`      | list list     | new list, left elements then right       |
    /// | `/`      | number number | quotient                                 |
    /// | `/`      | list number   | the element at index                     |
    ///
    /// Lists produced here never share storage with an operand, not even in
    /// nested lists.
    ///
    /// # Errors
    /// - `DivisionByZero` when dividing by exactly zero.
    /// - `IndexOutOfBounds` for a list index that is fractional or outside the
    ///   list.
    /// - `InvalidOperation` for any other combination.
    pub(crate) fn eval_arithmetic(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  span: &Span,
                                  ctx: &Context)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use ValueKind::{List as ListValue, Number, Text};

        match (op, &left.kind, &right.kind) {
            (Add, Number(a), Number(b)) => Ok(Value::from(a + b)),
            (Add, Text(a), Text(b)) => Ok(Value::from(format!("{a}{b}"))),
            (Add, ListValue(items), _) => {
                let items = items.deep_copy();
                items.push(right.deep_copy());
                Ok(Value::from(items))
            },

            (Sub, Number(a), Number(b)) => Ok(Value::from(a - b)),
            (Sub, ListValue(items), Number(index)) => {
                let items = items.deep_copy();
                items.remove(*index)
                     .ok_or_else(|| Self::index_error(*index, items.len(), right, span, ctx))?;
                Ok(Value::from(items))
            },

            (Mul, Number(a), Number(b)) => Ok(Value::from(a * b)),
            (Mul, Text(text), Number(count)) => Self::repeat_text(text, *count, span, ctx),
            (Mul, ListValue(a), ListValue(b)) => {
                let mut items = a.copied_items();
                items.extend(b.copied_items());
                Ok(Value::from(items))
            },

            (Div, Number(a), Number(b)) => {
                if *b == 0.0 {
                    return Err(Self::error(RuntimeErrorKind::DivisionByZero,
                                           "Division by zero",
                                           right.span.as_ref().unwrap_or(span),
                                           ctx));
                }
                Ok(Value::from(a / b))
            },
            (Div, ListValue(items), Number(index)) => {
                items.get(*index)
                     .ok_or_else(|| Self::index_error(*index, items.len(), right, span, ctx))
            },

            _ => Err(Self::invalid_operation(op, left, right, span, ctx)),
        }
    }

    /// Repeats `text` `count` times, see [`repeat_count`] for how the count is
    /// rounded.
    ///
    /// # Errors
    /// `InvalidOperation` if the result would be longer than
    /// [`MAX_TEXT_LEN`] bytes.
    fn repeat_text(text: &str, count: f64, span: &Span, ctx: &Context) -> EvalResult<Value> {
        if text.is_empty() {
            return Ok(Value::from(""));
        }

        let count = repeat_count(count);
        match text.len().checked_mul(count) {
            Some(len) if len <= MAX_TEXT_LEN => Ok(Value::from(text.repeat(count))),
            _ => Err(Self::error(RuntimeErrorKind::InvalidOperation,
                                 "Text repeated too many times",
                                 span,
                                 ctx)),
        }
    }

    fn index_error(index: f64,
                   len: usize,
                   operand: &Value,
                   span: &Span,
                   ctx: &Context)
                   -> RuntimeError {
        Self::error(RuntimeErrorKind::IndexOutOfBounds,
                    format!("Index {} out of bounds for a list of length {len}",
                            format_number(index)),
                    operand.span.as_ref().unwrap_or(span),
                    ctx)
    }
}
