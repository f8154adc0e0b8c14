/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, applies operators, manages the environment
/// chain, calls functions and built-ins, and produces runtime values. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates statements and expressions against an environment.
/// - Implements truthiness, operator semantics, closures, and indexing.
/// - Threads runtime errors outward so the first failure aborts evaluation.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element: literals,
/// identifiers, keywords, operators, and delimiters.
///
/// # Responsibilities
/// - Converts the input character stream into `(token, line)` pairs.
/// - Resolves multi-character operators by longest match and keywords
///   against the identifier rule.
/// - Carries unrecognized input forward as explicit illegal tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A Pratt parser: prefix rules start expressions, a precedence ladder
/// decides how far infix rules extend them. Statement parsing sits on top
/// and accumulates errors instead of stopping at the first one. Infix
/// expressions over compile-time constants are folded as they are built.
///
/// # Responsibilities
/// - Converts tokens into `Program`, `Statement`, and `Expr` nodes.
/// - Records human-readable errors with line context and resynchronizes.
/// - Performs constant folding with `let`-bound integer propagation.
pub mod parser;
/// The shell module provides the interactive prompt.
///
/// A line-oriented read-eval-print loop over any `BufRead`/`Write` pair,
/// with an environment that persists across lines.
pub mod repl;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum with all its variants, the environment chain
/// that scopes bindings, and the hash-key derivation used by hash values.
///
/// # Responsibilities
/// - Defines `Value` plus its rendering, equality, and truthiness rules.
/// - Provides the `Environment` scope chain shared with closures.
/// - Derives stable hash keys from hashable values.
pub mod value;
