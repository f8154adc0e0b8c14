use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::Value,
            hash_key::{HashKey, HashPair},
        },
    },
};

/// Evaluates an index operation on already-evaluated operands.
///
/// Arrays take integer indices; hashes take any hashable value. Everything
/// else rejects the operator, including an array indexed by a non-integer.
///
/// # Errors
/// - `index operator not supported for <TYPE>` for unsupported pairings.
/// - `unusable as hash key: <TYPE>` for unhashable hash indices.
///
/// # Example
/// ```
/// use quill::interpreter::{evaluator::index::eval_index, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
///
/// assert_eq!(eval_index(&array, &Value::Integer(-1)), Ok(Value::Integer(2)));
/// assert_eq!(eval_index(&array, &Value::Integer(7)), Ok(Value::Null));
/// ```
pub fn eval_index(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            Ok(eval_array_index(&elements.borrow(), *position))
        },
        (Value::Hash(entries), _) => eval_hash_index(entries, index),
        _ => Err(RuntimeError::IndexNotSupported { found: left.type_name() }),
    }
}

/// Indexes into an array.
///
/// Negative positions count from the end (`-1` is the last element). Any
/// index outside the array, in either direction, yields `null` rather than
/// an error.
fn eval_array_index(elements: &[Value], position: i64) -> Value {
    let length = i64::try_from(elements.len()).unwrap_or(i64::MAX);
    let position = if position < 0 { length + position } else { position };

    usize::try_from(position).ok()
                             .and_then(|index| elements.get(index).cloned())
                             .unwrap_or(Value::Null)
}

/// Indexes into a hash. A missing key yields `null`.
fn eval_hash_index(entries: &HashMap<HashKey, HashPair>, index: &Value) -> EvalResult<Value> {
    let key = index.hash_key()?;

    Ok(entries.get(&key).map_or(Value::Null, |pair| pair.value.clone()))
}
