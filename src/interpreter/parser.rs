/// Core parsing logic: the precedence ladder, the Pratt expression loop,
/// and the `parse` driver with error accumulation.
pub mod core;

/// Expression parsing.
///
/// The prefix rules (literals, grouping, `if`, `while`, `fn`, collection
/// literals) and the infix continuations (binary operators, calls,
/// indexing).
pub mod expression;

/// Parse-time constant folding.
///
/// Folds infix arithmetic over integer literals and `let`-bound integer
/// constants while the tree is being built.
pub mod folding;

/// Statement parsing.
///
/// Top-level dispatch between `let`, `return`, compound assignment, and
/// expression statements, plus block parsing.
pub mod statement;

/// Utility functions for the parser.
///
/// Token expectation, identifier parsing, comma-separated lists, and
/// optional semicolons.
pub mod utils;
