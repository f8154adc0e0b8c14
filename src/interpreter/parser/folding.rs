use std::collections::HashMap;

use crate::ast::{BinaryOperator, Expr};

/// Integer constants known while a single parse is in flight.
///
/// `let` statements that bind an integer literal (including literals created
/// by earlier folds) register here, so later arithmetic on those names can be
/// folded too. The cache never outlives one `parse` call.
///
/// Eviction keeps the cache honest in the presence of mutation:
/// - a `let` that rebinds a name to anything non-constant evicts it,
/// - a compound assignment evicts its target,
/// - a `while` loop clears everything before its condition is parsed, since
///   the loop body mutates bindings the condition reads on every iteration.
pub struct ConstantCache {
    bindings: HashMap<String, i64>,
}

#[allow(clippy::new_without_default)]
impl ConstantCache {
    /// Creates an empty cache for one parse invocation.
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Records the effect of `let <name> = <value>;` on the cache.
    ///
    /// An integer literal value registers the name; anything else evicts it,
    /// because the binding is no longer statically known.
    pub fn bind(&mut self, name: &str, value: &Expr) {
        if let Expr::IntegerLiteral { value } = value {
            self.bindings.insert(name.to_string(), *value);
        } else {
            self.bindings.remove(name);
        }
    }

    /// Forgets a single name.
    pub fn evict(&mut self, name: &str) {
        self.bindings.remove(name);
    }

    /// Forgets every cached binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// The constant an operand contributes to a fold, if it has one.
    ///
    /// Integer literals are their own constant; identifiers contribute their
    /// cached binding. Anything else blocks folding.
    fn constant_of(&self, expr: &Expr) -> Option<i64> {
        match expr {
            Expr::IntegerLiteral { value } => Some(*value),
            Expr::Identifier { name } => self.bindings.get(name).copied(),
            _ => None,
        }
    }
}

/// Replaces a just-parsed infix application with its result when both
/// operands are compile-time constants.
///
/// Arithmetic folds to an integer literal with wrapping 64-bit semantics,
/// comparisons fold to a boolean literal. Division by zero and `**` never
/// fold; the node is kept so the evaluator handles it.
///
/// # Example
/// ```
/// use quill::{
///     ast::{Expr, Statement},
///     interpreter::parser::core::parse,
/// };
///
/// let (program, errors) = parse("let a = 2; let b = a * 8;");
/// assert!(errors.is_empty());
/// assert_eq!(program.statements[1],
///            Statement::Let { name:  "b".to_string(),
///                             value: Expr::IntegerLiteral { value: 16 }, });
/// ```
#[must_use]
pub fn fold_infix(cache: &ConstantCache, left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    let folded = match (cache.constant_of(&left), cache.constant_of(&right)) {
        (Some(l), Some(r)) => fold(l, op, r),
        _ => None,
    };

    folded.unwrap_or_else(|| Expr::Infix { left: Box::new(left),
                                           op,
                                           right: Box::new(right), })
}

fn fold(left: i64, op: BinaryOperator, right: i64) -> Option<Expr> {
    match op {
        BinaryOperator::Add => Some(Expr::IntegerLiteral { value: left.wrapping_add(right) }),
        BinaryOperator::Sub => Some(Expr::IntegerLiteral { value: left.wrapping_sub(right) }),
        BinaryOperator::Mul => Some(Expr::IntegerLiteral { value: left.wrapping_mul(right) }),
        BinaryOperator::Div => {
            (right != 0).then(|| Expr::IntegerLiteral { value: left.wrapping_div(right) })
        },
        BinaryOperator::Lt => Some(Expr::BooleanLiteral { value: left < right }),
        BinaryOperator::Gt => Some(Expr::BooleanLiteral { value: left > right }),
        BinaryOperator::Eq => Some(Expr::BooleanLiteral { value: left == right }),
        BinaryOperator::NotEq => Some(Expr::BooleanLiteral { value: left != right }),
        BinaryOperator::Pow => None,
    }
}
