use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The `push` built-in: a **new** array consisting of the first argument's
/// elements followed by the second argument.
///
/// The input array is left untouched; callers that want the longer array
/// must use the returned value. This copy-on-write behavior is the
/// deliberate counterpart to `remove`, which mutates.
///
/// # Errors
/// Returns an error when the first argument is not an array.
///
/// # Example
/// ```
/// use quill::interpreter::{evaluator::function::push::push, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(1)]);
/// let longer = push(&[array.clone(), Value::Integer(2)]).unwrap();
///
/// assert_eq!(longer.to_string(), "[1, 2]");
/// assert_eq!(array.to_string(), "[1]");
/// ```
pub fn push(args: &[Value]) -> EvalResult<Value> {
    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::ArgumentMustBeArray { builtin: "push",
                                                       found:   args[0].type_name(), });
    };

    let mut extended = elements.borrow().clone();
    extended.push(args[1].clone());

    Ok(Value::from(extended))
}
