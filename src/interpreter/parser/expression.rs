use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression},
            folding::{ConstantCache, fold_infix},
            statement::parse_block,
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses the expression form that begins at the current token.
///
/// This is the prefix half of the expression grammar: literals, identifiers,
/// the unary operators, grouping, `if`, `while`, `fn`, and the collection
/// literals. Infix continuations are handled by the caller's precedence
/// loop.
pub(in crate::interpreter::parser) fn parse_prefix<'a, I>(tokens: &mut Peekable<I>,
                                                          cache: &mut ConstantCache)
                                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };

    match token {
        Token::Identifier(name) => {
            tokens.next();
            Ok(Expr::Identifier { name: name.clone() })
        },
        Token::Integer(value) => {
            tokens.next();
            Ok(Expr::IntegerLiteral { value: *value })
        },
        Token::Str(value) => {
            tokens.next();
            Ok(Expr::StringLiteral { value: value.clone() })
        },
        Token::True | Token::False => {
            let value = matches!(token, Token::True);
            tokens.next();
            Ok(Expr::BooleanLiteral { value })
        },
        Token::Bang => {
            tokens.next();
            let right = parse_expression(tokens, Precedence::Prefix, cache)?;
            Ok(Expr::Prefix { op:    UnaryOperator::Not,
                              right: Box::new(right), })
        },
        Token::Minus => {
            tokens.next();
            let right = parse_expression(tokens, Precedence::Prefix, cache)?;
            Ok(Expr::Prefix { op:    UnaryOperator::Negate,
                              right: Box::new(right), })
        },
        Token::LParen => {
            tokens.next();
            let expr = parse_expression(tokens, Precedence::Lowest, cache)?;
            expect_token(tokens, &Token::RParen)?;
            Ok(expr)
        },
        Token::If => parse_if_expression(tokens, cache),
        Token::While => parse_while_expression(tokens, cache),
        Token::Fn => parse_function_literal(tokens, cache),
        Token::LBracket => {
            tokens.next();
            let elements =
                parse_comma_separated(tokens,
                                      |tokens| parse_expression(tokens, Precedence::Lowest, cache),
                                      &Token::RBracket)?;
            Ok(Expr::ArrayLiteral { elements })
        },
        Token::LBrace => parse_hash_literal(tokens, cache),
        Token::Illegal(literal) => {
            if literal.starts_with(|c: char| c.is_ascii_digit()) {
                Err(ParseError::IntegerOutOfRange { literal: literal.clone(),
                                                    line:    *line, })
            } else {
                Err(ParseError::IllegalToken { literal: literal.clone(),
                                               line:    *line, })
            }
        },
        other => Err(ParseError::NoPrefixRule { found: other.to_string(),
                                                line:  *line, }),
    }
}

/// Parses one infix continuation: a binary operator and its right operand.
///
/// The operator's own binding power is passed down, which makes every binary
/// operator left-associative. Once both sides exist the node is offered to
/// the constant folder.
pub(in crate::interpreter::parser) fn parse_infix<'a, I>(tokens: &mut Peekable<I>,
                                                         left: Expr,
                                                         cache: &mut ConstantCache)
                                                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };

    let op = match token {
        Token::Plus => BinaryOperator::Add,
        Token::Minus => BinaryOperator::Sub,
        Token::Star => BinaryOperator::Mul,
        Token::Slash => BinaryOperator::Div,
        Token::DoubleStar => BinaryOperator::Pow,
        Token::Less => BinaryOperator::Lt,
        Token::Greater => BinaryOperator::Gt,
        Token::EqualEqual => BinaryOperator::Eq,
        Token::BangEqual => BinaryOperator::NotEq,
        other => {
            return Err(ParseError::UnexpectedToken { expected: "an infix operator".to_string(),
                                                     found:    other.to_string(),
                                                     line:     *line, });
        },
    };

    let right = parse_expression(tokens, operator_precedence(op), cache)?;

    Ok(fold_infix(cache, left, op, right))
}

/// The binding power a binary operator parses its right operand with.
const fn operator_precedence(op: BinaryOperator) -> Precedence {
    match op {
        BinaryOperator::Eq | BinaryOperator::NotEq => Precedence::Equals,
        BinaryOperator::Lt | BinaryOperator::Gt => Precedence::LessGreater,
        BinaryOperator::Add | BinaryOperator::Sub => Precedence::Sum,
        BinaryOperator::Mul | BinaryOperator::Div => Precedence::Product,
        BinaryOperator::Pow => Precedence::Exponent,
    }
}

/// Parses a call continuation: `<left>(arg, arg, ...)`.
pub(in crate::interpreter::parser) fn parse_call<'a, I>(tokens: &mut Peekable<I>,
                                                        function: Expr,
                                                        cache: &mut ConstantCache)
                                                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let arguments =
        parse_comma_separated(tokens,
                              |tokens| parse_expression(tokens, Precedence::Lowest, cache),
                              &Token::RParen)?;

    Ok(Expr::Call { function:  Box::new(function),
                    arguments, })
}

/// Parses an index continuation: `<left>[<index>]`.
pub(in crate::interpreter::parser) fn parse_index<'a, I>(tokens: &mut Peekable<I>,
                                                         left: Expr,
                                                         cache: &mut ConstantCache)
                                                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let index = parse_expression(tokens, Precedence::Lowest, cache)?;
    expect_token(tokens, &Token::RBracket)?;

    Ok(Expr::Index { left:  Box::new(left),
                     index: Box::new(index), })
}

/// Parses `if ( <cond> ) { <consequence> } [else { <alternative> }]`.
///
/// The parentheses and braces are required; there is no brace-less form.
fn parse_if_expression<'a, I>(tokens: &mut Peekable<I>,
                              cache: &mut ConstantCache)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    expect_token(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens, Precedence::Lowest, cache)?;
    expect_token(tokens, &Token::RParen)?;

    let consequence = parse_block(tokens, cache)?;

    let alternative = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(parse_block(tokens, cache)?)
    } else {
        None
    };

    Ok(Expr::If { condition: Box::new(condition),
                  consequence,
                  alternative })
}

/// Parses `while ( <cond> ) { <body> }`.
fn parse_while_expression<'a, I>(tokens: &mut Peekable<I>,
                                 cache: &mut ConstantCache)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    // The body mutates bindings the condition re-reads every iteration, so
    // nothing cached before the loop can be trusted inside it.
    cache.clear();

    expect_token(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens, Precedence::Lowest, cache)?;
    expect_token(tokens, &Token::RParen)?;

    let body = parse_block(tokens, cache)?;

    Ok(Expr::While { condition: Box::new(condition),
                     body })
}

/// Parses `fn ( <params> ) { <body> }`.
fn parse_function_literal<'a, I>(tokens: &mut Peekable<I>,
                                 cache: &mut ConstantCache)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    expect_token(tokens, &Token::LParen)?;
    let parameters = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let body = parse_block(tokens, cache)?;

    Ok(Expr::FunctionLiteral { parameters, body })
}

/// Parses a hash literal: `{ <key> : <value> (, <key> : <value>)* }`.
///
/// Keys are arbitrary expressions; whether they can actually serve as hash
/// keys is decided at evaluation time. Duplicate keys are accepted and the
/// last one wins when the literal is evaluated.
fn parse_hash_literal<'a, I>(tokens: &mut Peekable<I>,
                             cache: &mut ConstantCache)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let mut pairs = Vec::new();
    loop {
        if let Some((Token::RBrace, _)) = tokens.peek() {
            tokens.next();
            break;
        }

        let key = parse_expression(tokens, Precedence::Lowest, cache)?;
        expect_token(tokens, &Token::Colon)?;
        let value = parse_expression(tokens, Precedence::Lowest, cache)?;
        pairs.push((key, value));

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RBrace, _)) => break,
            Some((token, line)) => {
                return Err(ParseError::UnexpectedToken { expected: Token::RBrace.to_string(),
                                                         found:    token.to_string(),
                                                         line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(Expr::HashLiteral { pairs })
}
