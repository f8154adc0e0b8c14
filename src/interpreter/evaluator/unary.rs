use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a prefix operator to an evaluated operand.
///
/// `!` inverts truthiness and is defined for every value: `!null` and
/// `!False` are `True`, everything else (including `!0`) is `False`.
/// `-` negates integers only.
///
/// # Errors
/// Returns `unknown operator: -<TYPE>` when `-` is applied to a
/// non-integer.
///
/// # Example
/// ```
/// use quill::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_prefix, value::core::Value},
/// };
///
/// let negated = eval_prefix(UnaryOperator::Negate, &Value::Integer(5)).unwrap();
/// assert_eq!(negated, Value::Integer(-5));
///
/// let inverted = eval_prefix(UnaryOperator::Not, &Value::Integer(5)).unwrap();
/// assert_eq!(inverted, Value::Bool(false));
/// ```
pub fn eval_prefix(op: UnaryOperator, right: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::Bool(!right.is_truthy())),
        UnaryOperator::Negate => match right {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            other => Err(RuntimeError::UnknownPrefixOperator { operator: "-",
                                                               right:    other.type_name(), }),
        },
    }
}
