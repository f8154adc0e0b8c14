use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a binary operator to two evaluated operands.
///
/// Dispatch order matters and mirrors the language's rules:
/// 1. integer × integer gets the arithmetic/comparison table,
/// 2. string × string supports `+` only,
/// 3. `*` between an integer and a string repeats the string,
/// 4. `==` / `!=` on anything else compare by value identity (scalars by
///    payload, arrays/hashes/functions by handle),
/// 5. remaining mixed-type pairs are a type mismatch, remaining same-type
///    pairs an unknown operator.
///
/// # Errors
/// See the dispatch rules above; every unsupported combination produces a
/// descriptive `RuntimeError`.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_infix, value::core::Value},
/// };
///
/// let sum = eval_infix(BinaryOperator::Add, &Value::Integer(2), &Value::Integer(3)).unwrap();
/// assert_eq!(sum, Value::Integer(5));
///
/// let err = eval_infix(BinaryOperator::Add, &Value::Integer(2), &Value::Bool(true));
/// assert_eq!(err.unwrap_err().to_string(), "type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn eval_infix(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(op, l, r),
        _ => match op {
            BinaryOperator::Mul => eval_repetition(left, right),
            BinaryOperator::Eq => Ok(Value::Bool(left == right)),
            BinaryOperator::NotEq => Ok(Value::Bool(left != right)),
            _ if left.type_name() == right.type_name() => {
                Err(RuntimeError::UnknownInfixOperator { left:     left.type_name(),
                                                         operator: op.to_string(),
                                                         right:    right.type_name(), })
            },
            _ => Err(RuntimeError::TypeMismatch { left:     left.type_name(),
                                                  operator: op.to_string(),
                                                  right:    right.type_name(), }),
        },
    }
}

/// The integer operator table.
///
/// Arithmetic wraps in two's-complement 64 bits, matching machine integers;
/// `**` routes through floating point and truncates, so huge exponents
/// saturate rather than wrap. Division checks for zero.
///
/// # Errors
/// Returns `division by zero` for `/` with a zero divisor.
pub fn eval_integer_infix(op: BinaryOperator, left: i64, right: i64) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Integer(left.wrapping_add(right))),
        BinaryOperator::Sub => Ok(Value::Integer(left.wrapping_sub(right))),
        BinaryOperator::Mul => Ok(Value::Integer(left.wrapping_mul(right))),
        BinaryOperator::Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Integer(left.wrapping_div(right)))
            }
        },
        BinaryOperator::Pow => Ok(Value::Integer(exponentiate(left, right))),
        BinaryOperator::Lt => Ok(Value::Bool(left < right)),
        BinaryOperator::Gt => Ok(Value::Bool(left > right)),
        BinaryOperator::Eq => Ok(Value::Bool(left == right)),
        BinaryOperator::NotEq => Ok(Value::Bool(left != right)),
    }
}

/// `**` computed as floating-point `powf` truncated back to an integer.
///
/// Negative exponents therefore truncate toward zero (`2 ** -1` is `0`) and
/// out-of-range results saturate at the i64 bounds.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn exponentiate(base: i64, exponent: i64) -> i64 {
    (base as f64).powf(exponent as f64) as i64
}

/// The string × string operator table: concatenation only.
fn eval_string_infix(op: BinaryOperator, left: &str, right: &str) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::from(format!("{left}{right}"))),
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "STRING",
                                                      operator: op.to_string(),
                                                      right:    "STRING", }),
    }
}

/// String repetition: `3 * "ab"` and `"ab" * 3` are both `"ababab"`.
///
/// A zero or negative count produces the empty string.
fn eval_repetition(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(count), Value::Str(text)) | (Value::Str(text), Value::Integer(count)) => {
            let count = usize::try_from(*count).unwrap_or(0);
            Ok(Value::from(text.repeat(count)))
        },
        _ => Err(RuntimeError::OperandsNotSupported { operator: "*",
                                                      left:     left.type_name(),
                                                      right:    right.type_name(), }),
    }
}
