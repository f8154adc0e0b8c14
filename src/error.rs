/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// AST. Parse errors carry the source line they were detected on; the parser
/// collects their renderings into a list rather than stopping at the first
/// one.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, unknown operators, missing identifiers, bad indexing, and so
/// on. Runtime errors render exactly the messages the language reports to
/// its users, with no position information attached.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
