#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The next token was not the one the grammar requires.
    UnexpectedToken {
        /// Rendering of the expected token.
        expected: String,
        /// Rendering of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with the token found.
    NoPrefixRule {
        /// Rendering of the offending token.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The lexer produced a character sequence outside the language.
    IllegalToken {
        /// The offending slice of source text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric literal does not fit in a 64-bit integer.
    IntegerOutOfRange {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f,
                       "Error on line {line}: expected next token to be {expected}, got {found} instead.")
            },
            Self::NoPrefixRule { found, line } => {
                write!(f, "Error on line {line}: no expression can start with {found}.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: unexpected end of input.")
            },
            Self::IllegalToken { literal, line } => {
                write!(f, "Error on line {line}: illegal token '{literal}'.")
            },
            Self::IntegerOutOfRange { literal, line } => {
                write!(f, "Error on line {line}: could not parse '{literal}' as integer.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
