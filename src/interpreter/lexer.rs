use logos::Logos;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language. Multi-character
/// operators (`==`, `!=`, `+=`, `-=`, `*=`, `/=`, `**`) win over their
/// single-character prefixes by longest match.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`.
    ///
    /// The payload is the raw text between the quotes; there are no escape
    /// sequences. A string missing its closing quote runs to the end of the
    /// input and is accepted as written.
    #[regex(r#""[^"]*"?"#, parse_string)]
    Str(String),
    /// `True`
    #[token("True")]
    True,
    /// `False`
    #[token("False")]
    False,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `while`
    #[token("while")]
    While,
    /// Identifier tokens; variable or function names such as `x` or `adder`.
    /// Digits are not identifier characters.
    #[regex(r"[a-zA-Z_][a-zA-Z_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Newlines are skipped like any whitespace but advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
    /// All other Unicode whitespace.
    #[regex(r"[\p{White_Space}&&[^\n]]+", logos::skip)]
    Whitespace,

    /// A character outside the language, carried forward so the parser can
    /// report it in context. Also produced by [`lex`] for slices the lexer
    /// rejects, such as integer literals that overflow.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for parse error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits overflow a 64-bit integer, which surfaces
/// as an [`Token::Illegal`] token.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Extracts the contents of a string literal from the current token slice.
///
/// Strips the surrounding quotes (the closing one may be absent at end of
/// input) and counts any embedded newlines so line numbers stay accurate.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();

    let body = &slice[1..];
    body.strip_suffix('"').unwrap_or(body).to_string()
}

/// Tokenizes a complete source string.
///
/// Produces `(token, line)` pairs in source order. Unrecognized input never
/// aborts lexing: the offending slice becomes a [`Token::Illegal`] token and
/// scanning continues, so the parser can accumulate an error for it.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("let five = 5;");
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Let,
///                 Token::Identifier("five".to_string()),
///                 Token::Equals,
///                 Token::Integer(5),
///                 Token::Semicolon]);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(()) => tokens.push((Token::Illegal(lexer.slice().to_string()), lexer.extras.line)),
        }
    }

    tokens
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Integer(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Identifier(_) => "IDENT",
            Self::Illegal(_) => "ILLEGAL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Fn => "FUNCTION",
            Self::Let => "LET",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::While => "WHILE",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::DoubleStar => "**",
            Self::Equals => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Newline | Self::Whitespace => " ",
        };
        write!(f, "{text}")
    }
}
