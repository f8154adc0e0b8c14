use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Block, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression},
            folding::ConstantCache,
            utils::{consume_semicolon, expect_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `let` binding,
/// - a `return` statement,
/// - a compound assignment (`x += ...` and friends),
/// - an expression used as a statement.
///
/// The compound-assignment form is recognized with one token of lookahead on
/// a cloned iterator: an identifier directly followed by a compound operator.
/// Everything else that starts with an identifier is an ordinary expression.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              cache: &mut ConstantCache)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek().copied() {
        Some((Token::Let, _)) => parse_let_statement(tokens, cache),
        Some((Token::Return, _)) => parse_return_statement(tokens, cache),
        Some((Token::Identifier(_), _)) if peek_compound_operator(tokens).is_some() => {
            parse_compound_assignment(tokens, cache)
        },
        _ => parse_expression_statement(tokens, cache),
    }
}

/// Parses a `let` statement: `let <name> = <expr> ;?`.
///
/// An integer-literal initializer (possibly produced by folding) registers
/// the binding in the constant cache; anything else evicts it.
fn parse_let_statement<'a, I>(tokens: &mut Peekable<I>,
                              cache: &mut ConstantCache)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Equals)?;

    let value = parse_expression(tokens, Precedence::Lowest, cache)?;
    cache.bind(&name, &value);

    consume_semicolon(tokens);

    Ok(Statement::Let { name, value })
}

/// Parses a `return` statement: `return <expr> ;?`.
fn parse_return_statement<'a, I>(tokens: &mut Peekable<I>,
                                 cache: &mut ConstantCache)
                                 -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let value = parse_expression(tokens, Precedence::Lowest, cache)?;
    consume_semicolon(tokens);

    Ok(Statement::Return { value })
}

/// Parses a compound assignment: `<name> (+=|-=|*=|/=) <expr> ;?`.
///
/// The target is evicted from the constant cache; its value is no longer
/// statically known after the update.
fn parse_compound_assignment<'a, I>(tokens: &mut Peekable<I>,
                                    cache: &mut ConstantCache)
                                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;

    let op = match tokens.next() {
        Some((Token::PlusAssign, _)) => BinaryOperator::Add,
        Some((Token::MinusAssign, _)) => BinaryOperator::Sub,
        Some((Token::MulAssign, _)) => BinaryOperator::Mul,
        Some((Token::DivAssign, _)) => BinaryOperator::Div,
        Some((token, line)) => {
            return Err(ParseError::UnexpectedToken { expected: "a compound assignment operator"
                                                         .to_string(),
                                                     found:    token.to_string(),
                                                     line:     *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let value = parse_expression(tokens, Precedence::Lowest, cache)?;
    cache.evict(&name);

    consume_semicolon(tokens);

    Ok(Statement::CompoundAssignment { name, op, value })
}

/// Parses a bare expression statement: `<expr> ;?`.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>,
                                     cache: &mut ConstantCache)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, Precedence::Lowest, cache)?;
    consume_semicolon(tokens);

    Ok(Statement::Expression { expr })
}

/// Parses a brace-delimited block of statements.
///
/// Blocks are the bodies of `if`, `while`, and `fn` forms. They reuse the
/// full statement grammar, so `let` and `return` work inside them.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          cache: &mut ConstantCache)
                          -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LBrace)?;

    let mut statements = Vec::new();
    loop {
        match tokens.peek().copied() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens, cache)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(Block { statements })
}

/// Looks one token past a leading identifier for a compound-assignment
/// operator, without consuming anything.
fn peek_compound_operator<'a, I>(tokens: &Peekable<I>) -> Option<BinaryOperator>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();

    match lookahead.peek() {
        Some((Token::PlusAssign, _)) => Some(BinaryOperator::Add),
        Some((Token::MinusAssign, _)) => Some(BinaryOperator::Sub),
        Some((Token::MulAssign, _)) => Some(BinaryOperator::Mul),
        Some((Token::DivAssign, _)) => Some(BinaryOperator::Div),
        _ => None,
    }
}
