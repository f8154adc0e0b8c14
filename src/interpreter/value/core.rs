use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::Block,
    interpreter::{
        evaluator::function::core::Builtin,
        value::{
            environment::Env,
            hash_key::{HashKey, HashPair},
        },
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types that can appear in expressions, bindings,
/// collections, and function returns. Scalars carry their payload directly;
/// arrays, hashes, and functions are shared handles, so the equality
/// operators compare them by identity exactly as bindings alias them.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean, printed `True` or `False`.
    Bool(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// The absent value: missed lookups, out-of-range indexing, an `if`
    /// with no branch taken.
    Null,
    /// The result of effectful constructs with nothing to report (`print`,
    /// `let`, compound assignment). The shell prints nothing for it.
    Void,
    /// An array of values. The handle is shared: `remove` mutates it in
    /// place and every binding observes the change, while `push` builds a
    /// fresh one.
    Array(Rc<RefCell<Vec<Value>>>),
    /// A hash map from hashable values to values.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A user-defined function carrying its captured environment.
    Function(Rc<FunctionValue>),
    /// A native built-in function.
    Builtin(Builtin),
    /// A wrapper produced by `return` statements. Blocks stop at it and pass
    /// it upward; function calls and the program root unwrap it. It never
    /// ends up inside a collection or a binding.
    Return(Box<Value>),
}

/// The payload of a function value: a closure over its definition site.
pub struct FunctionValue {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The environment captured when the literal was evaluated. Calls chain
    /// their frame onto this, not onto the caller's environment.
    pub env:        Env,
}

impl fmt::Debug for FunctionValue {
    // The captured environment may contain the function itself; showing it
    // would recurse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .finish_non_exhaustive()
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl Value {
    /// Returns the uppercase type name used in error messages.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Void => "VOID",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
        }
    }

    /// Coerces the value to a branch condition.
    ///
    /// Only `null` and `False` are falsy. Everything else is truthy,
    /// including `0` and the empty string.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }
}

impl PartialEq for Value {
    /// Scalars compare by payload; arrays, hashes, and functions compare by
    /// handle identity; values of different types never compare equal. This
    /// is the semantics of the language's `==` for everything the integer
    /// and string rules do not cover.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Null, Self::Null) | (Self::Void, Self::Void) => true,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            (Self::Return(a), Self::Return(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Void => Ok(()),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, value) in elements.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Hash(entries) => {
                write!(f, "{{")?;
                for (index, pair) in entries.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{ {} }}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}
