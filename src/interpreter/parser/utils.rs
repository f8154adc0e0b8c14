use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items terminated by a closing token.
///
/// This utility is shared by array literals, call argument lists, and
/// function parameter lists. After each item it expects either a comma, to
/// continue the list, or the closing token, to end it. An immediately
/// encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or the closing
///   token.
/// - `parse_item`: Function used to parse one element.
/// - `closing`: The token that terminates the list (`)` or `]`).
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, if something other than
/// a comma or the closing token follows an item, or if input ends first.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    mut parse_item: impl FnMut(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((token, _)) = tokens.peek()
       && *token == *closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((token, _)) if token == closing => break,
            Some((token, line)) => {
                return Err(ParseError::UnexpectedToken { expected: closing.to_string(),
                                                         found:    token.to_string(),
                                                         line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { expected: "IDENT".to_string(),
                                              found:    token.to_string(),
                                              line:     *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Errors
/// Returns a `ParseError` naming the expected and found tokens otherwise.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, _)) if token == expected => Ok(()),
        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                              found:    token.to_string(),
                                              line:     *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes a trailing semicolon when one is present.
///
/// Semicolons terminate statements but are never required.
pub(in crate::interpreter::parser) fn consume_semicolon<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}
