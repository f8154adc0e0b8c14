use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The `remove` built-in: deletes the first element whose rendering equals
/// the second argument's rendering, **mutating the array in place**.
///
/// The match is on text rendering, so `remove(arr, 2)` removes the element
/// that prints as `2`. The deleted slot is filled by swapping the last
/// element in, which does not preserve order. The same (now shorter) array
/// is returned, and every binding holding it observes the change; this is
/// the mutating counterpart to `push`.
///
/// # Errors
/// Returns an error when the first argument is not an array or when no
/// element matches.
///
/// # Example
/// ```
/// use quill::interpreter::{evaluator::function::remove::remove, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
/// remove(&[array.clone(), Value::Integer(1)]).unwrap();
///
/// assert_eq!(array.to_string(), "[3, 2]");
/// ```
pub fn remove(args: &[Value]) -> EvalResult<Value> {
    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::ArgumentMustBeArray { builtin: "remove",
                                                       found:   args[0].type_name(), });
    };

    let target = args[1].to_string();
    let position = elements.borrow()
                           .iter()
                           .position(|element| element.to_string() == target);

    match position {
        Some(position) => {
            elements.borrow_mut().swap_remove(position);
            Ok(args[0].clone())
        },
        None => Err(RuntimeError::RemoveTargetMissing),
    }
}
