use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The `len` built-in: element count of an array or byte length of a
/// string.
///
/// # Errors
/// Returns ``argument to `len` not supported, got <TYPE>`` for any other
/// argument type.
///
/// # Example
/// ```
/// use quill::interpreter::{evaluator::function::len::len, value::core::Value};
///
/// let result = len(&[Value::from("hello world")]).unwrap();
/// assert_eq!(result, Value::Integer(11));
/// ```
pub fn len(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(text) => Ok(Value::Integer(i64::try_from(text.len()).unwrap_or(i64::MAX))),
        Value::Array(elements) => {
            Ok(Value::Integer(i64::try_from(elements.borrow().len()).unwrap_or(i64::MAX)))
        },
        other => Err(RuntimeError::ArgumentNotSupported { builtin: "len",
                                                          found:   other.type_name(), }),
    }
}
