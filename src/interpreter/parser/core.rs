use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, lex},
        parser::{expression, folding::ConstantCache, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding power of an expression position, lowest to highest.
///
/// The parser enters a sub-expression with the binding power of the operator
/// to its left and keeps extending it while the next operator binds
/// tighter. Call and index are the tightest "operators": `f(x)[0]` parses
/// the call before the index purely through this ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// The entry level for full expressions.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and binary `-`
    Sum,
    /// `*` and `/`
    Product,
    /// `**`
    Exponent,
    /// Unary `!` and `-`
    Prefix,
    /// The `(` of a call
    Call,
    /// The `[` of an index
    Index,
}

/// The binding power the given token exerts as an infix operator.
///
/// Tokens with no infix role bind at `Lowest`, which ends the extension loop
/// in [`parse_expression`].
pub(in crate::interpreter::parser) fn precedence_of(token: &Token) -> Precedence {
    match token {
        Token::EqualEqual | Token::BangEqual => Precedence::Equals,
        Token::Less | Token::Greater => Precedence::LessGreater,
        Token::Plus | Token::Minus => Precedence::Sum,
        Token::Star | Token::Slash => Precedence::Product,
        Token::DoubleStar => Precedence::Exponent,
        Token::LParen => Precedence::Call,
        Token::LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

/// Parses a complete source string into a program plus a list of errors.
///
/// The parser never aborts: every statement that fails records a rendered
/// error and parsing resynchronizes at the next semicolon (or the end of
/// input) before continuing. Callers must check the error list before
/// evaluating the program; a program accompanied by errors has no defined
/// meaning.
///
/// # Example
/// ```
/// use quill::interpreter::parser::core::parse;
///
/// let (program, errors) = parse("let a = 5; a;");
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 2);
///
/// let (_, errors) = parse("let = 5;");
/// assert_eq!(errors.len(), 1);
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let tokens = lex(source);
    let mut tokens = tokens.iter().peekable();
    let mut cache = ConstantCache::new();

    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while tokens.peek().is_some() {
        match parse_statement(&mut tokens, &mut cache) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                errors.push(error.to_string());
                synchronize(&mut tokens);
            },
        }
    }

    (Program { statements }, errors)
}

/// Parses one expression at the given binding power.
///
/// Pratt's algorithm: parse the prefix form at the current token, then keep
/// handing the accumulated left side to infix continuations (binary
/// operators, calls, indexing) for as long as the next token binds tighter
/// than `precedence`.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               precedence: Precedence,
                               cache: &mut ConstantCache)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = expression::parse_prefix(tokens, cache)?;

    while let Some((token, _)) = tokens.peek().copied() {
        if precedence >= precedence_of(token) {
            break;
        }

        left = match token {
            Token::LParen => expression::parse_call(tokens, left, cache)?,
            Token::LBracket => expression::parse_index(tokens, left, cache)?,
            _ => expression::parse_infix(tokens, left, cache)?,
        };
    }

    Ok(left)
}

/// Skips ahead to the token after the next semicolon.
///
/// Used after a statement fails so one syntax error does not cascade into a
/// spurious error for every remaining token.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    for (token, _) in tokens {
        if *token == Token::Semicolon {
            break;
        }
    }
}
