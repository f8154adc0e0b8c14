use std::hash::{DefaultHasher, Hash, Hasher};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The key a value hashes to inside a hash literal.
///
/// A key pairs the value's type tag with a 64-bit content hash, so `1`,
/// `True`, and `"1"` occupy distinct slots even if their hashes collide
/// numerically. Only integers, booleans, and strings can produce one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashKey {
    kind:  &'static str,
    value: u64,
}

/// A stored hash entry.
///
/// The original key value is kept alongside the stored value so hashes can
/// render themselves back as `{key: value, ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as the program wrote it.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

impl Value {
    /// Derives the hash key for this value.
    ///
    /// Integers hash to their two's-complement bit pattern, booleans to 0 or
    /// 1, and strings through the standard library hasher. Every other
    /// variant is unusable as a key.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnusableHashKey` for any value that is not an
    /// integer, boolean, or string.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// let a = Value::from("name").hash_key().unwrap();
    /// let b = Value::from("name").hash_key().unwrap();
    /// assert_eq!(a, b);
    ///
    /// assert!(Value::Null.hash_key().is_err());
    /// ```
    pub fn hash_key(&self) -> EvalResult<HashKey> {
        match self {
            Self::Integer(n) => Ok(HashKey { kind:  self.type_name(),
                                             value: n.cast_unsigned(), }),
            Self::Bool(b) => Ok(HashKey { kind:  self.type_name(),
                                          value: u64::from(*b), }),
            Self::Str(s) => {
                let mut hasher = DefaultHasher::new();
                s.hash(&mut hasher);
                Ok(HashKey { kind:  self.type_name(),
                             value: hasher.finish(), })
            },
            other => Err(RuntimeError::UnusableHashKey { found: other.type_name() }),
        }
    }
}
