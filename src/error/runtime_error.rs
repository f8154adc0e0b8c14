#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors are ordinary values threaded through the evaluator's
/// `Result` channel; the first one produced aborts the evaluation that
/// contains it. Their `Display` renderings are the exact messages the
/// language shows to its users, so they carry no position information.
pub enum RuntimeError {
    /// An operator was applied to operands of two different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator as written (`+`, or `+=` for compound forms).
        operator: String,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// A prefix operator was applied to an unsupported operand.
    UnknownPrefixOperator {
        /// The operator as written.
        operator: &'static str,
        /// Type name of the operand.
        right:    &'static str,
    },
    /// A binary operator has no meaning for its (same-typed) operands.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator as written.
        operator: String,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// `*` was applied to a pair of types it cannot combine.
    OperandsNotSupported {
        /// The operator as written.
        operator: &'static str,
        /// Type name of the left operand.
        left:     &'static str,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// A name resolved neither in the environment chain nor the built-ins.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A call was made on a value that is not callable.
    NotAFunction {
        /// Type name of the callee.
        found: &'static str,
    },
    /// A function or built-in was called with the wrong argument count.
    WrongNumberOfArguments {
        /// How many arguments were supplied.
        got:  usize,
        /// How many the callee accepts.
        want: usize,
    },
    /// A built-in rejected an argument of this type.
    ArgumentNotSupported {
        /// Name of the built-in.
        builtin: &'static str,
        /// Type name of the offending argument.
        found:   &'static str,
    },
    /// A built-in requires an array as its first argument.
    ArgumentMustBeArray {
        /// Name of the built-in.
        builtin: &'static str,
        /// Type name of the offending argument.
        found:   &'static str,
    },
    /// The index operator was applied to a value that does not support it.
    IndexNotSupported {
        /// Type name of the indexed value.
        found: &'static str,
    },
    /// A value that cannot be hashed was used as a hash key.
    UnusableHashKey {
        /// Type name of the offending key.
        found: &'static str,
    },
    /// `remove` did not find a matching element.
    RemoveTargetMissing,
    /// Integer division or compound division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::OperandsNotSupported { operator, left, right } => {
                write!(f, "{operator} operator not supported between {left} and {right}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { found } => write!(f, "not a function {found}"),
            Self::WrongNumberOfArguments { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::ArgumentNotSupported { builtin, found } => {
                write!(f, "argument to `{builtin}` not supported, got {found}")
            },
            Self::ArgumentMustBeArray { builtin, found } => {
                write!(f, "argument to `{builtin}` must be ARRAY, got {found}")
            },
            Self::IndexNotSupported { found } => {
                write!(f, "index operator not supported for {found}")
            },
            Self::UnusableHashKey { found } => write!(f, "unusable as hash key: {found}"),
            Self::RemoveTargetMissing => {
                write!(f, "element to remove not found in array")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
