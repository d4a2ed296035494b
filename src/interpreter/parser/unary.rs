use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::{ParseResult, parse_conditional, parse_expression},
            utils::{current, expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Message used when an atom was expected but something else was found.
const EXPECTED_ATOM: &str = "Expected number, text, name, '+', '-', '(', '[', 'RECKON', 'TROT', \
                             'WHILES', 'FIXIN'' or 'AIN'T'";

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (leaves the operand unchanged)
/// - `-`  (numeric negation)
///
/// Unary operators are right-associative, so `- -x` is parsed as `-(-x)`.
/// Without a prefix operator the function delegates to [`parse_call`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | call
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let lexeme = current(tokens);
    let op = match lexeme.token {
        Token::Plus => UnaryOperator::Plus,
        Token::Minus => UnaryOperator::Negate,
        _ => return parse_call(tokens),
    };

    tokens.next();
    let operand = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       span: lexeme.span.to(operand.span()),
                       operand: Box::new(operand) })
}

/// Parses an atom followed by any number of argument lists.
///
/// Calls chain, so `make_adder(1)(2)` calls the result of `make_adder(1)`.
///
/// Grammar: `call := atom ("(" (expression ("," expression)* ","?)? ")")*`
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let mut expr = parse_primary(tokens)?;

    while current(tokens).token == Token::LParen {
        tokens.next();
        let (arguments, closing) =
            parse_comma_separated(tokens, parse_expression, &Token::RParen, "')'")?;
        expr = Expr::Call { span: expr.span().to(&closing),
                            callee: Box::new(expr),
                            arguments };
    }

    Ok(expr)
}

/// Parses a primary expression.
///
/// Primary expressions are the atomic building blocks of the grammar:
/// - numeric and text literals
/// - identifiers
/// - parenthesized expressions
/// - list literals `[a, b, ...]`
/// - `RECKON`, `TROT`, `WHILES` and `FIXIN'` constructs
///
/// # Errors
/// Returns a `SyntaxError` listing the accepted tokens when the next token
/// cannot start an atom.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let lexeme = current(tokens);
    let span = lexeme.span.clone();

    match &lexeme.token {
        Token::Integer(n) => {
            tokens.next();
            Ok(Expr::Number { value: *n as f64,
                              span })
        },
        Token::Float(value) => {
            tokens.next();
            Ok(Expr::Number { value: *value,
                              span })
        },
        Token::Text(value) => {
            tokens.next();
            Ok(Expr::Text { value: value.clone(),
                            span })
        },
        Token::Identifier(name) => {
            tokens.next();
            Ok(Expr::Identifier { name: name.clone(),
                                  span })
        },
        Token::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(expr)
        },
        Token::LBracket => {
            tokens.next();
            let (items, closing) =
                parse_comma_separated(tokens, parse_expression, &Token::RBracket, "']'")?;
            Ok(Expr::List { items,
                            span: span.to(&closing) })
        },
        Token::Reckon => parse_conditional(tokens),
        Token::Trot => parse_for(tokens),
        Token::Whiles => parse_while(tokens),
        Token::Fixin => parse_function_def(tokens),
        _ => Err(SyntaxError::expected(EXPECTED_ATOM, &span)),
    }
}

/// Parses a counted loop.
///
/// Grammar:
/// ```text
///     for := "TROT" name "=" expression "T'" expression
///            ("BY_A_PEICE" expression)? "THEN" expression
/// ```
///
/// # Errors
/// Reports the first missing piece, e.g. `Expected 'T''` for
/// `TROT i = 1 THEN i`.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let keyword = current(tokens);
    tokens.next();

    let (var, _) = parse_identifier(tokens)?;
    expect(tokens, &Token::Equals, "'='")?;
    let start = parse_expression(tokens)?;

    expect(tokens, &Token::To, "'T''")?;
    let end = parse_expression(tokens)?;

    let step = if current(tokens).token == Token::ByAPeice {
        tokens.next();
        Some(Box::new(parse_expression(tokens)?))
    } else {
        None
    };

    expect(tokens, &Token::Then, "'THEN'")?;
    let body = parse_expression(tokens)?;

    Ok(Expr::ForLoop { span: keyword.span.to(body.span()),
                       var,
                       start: Box::new(start),
                       end: Box::new(end),
                       step,
                       body: Box::new(body) })
}

/// Parses a conditional loop.
///
/// The body is read greedily: expressions, optionally separated by commas,
/// until the end of input, a closing bracket or one of `WHILES`, `RECKON` and
/// `TROT`. Several body expressions are wrapped in a list literal so the loop
/// body stays a single node; an empty body is allowed.
///
/// Grammar: `while := "WHILES" expression "THEN" (expression ","?)*`
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let keyword = current(tokens);
    tokens.next();

    let condition = parse_expression(tokens)?;
    let then = expect(tokens, &Token::Then, "'THEN'")?;

    let mut body = Vec::new();
    while !matches!(current(tokens).token,
                    Token::EndOfInput
                    | Token::Whiles
                    | Token::Reckon
                    | Token::Trot
                    | Token::RParen
                    | Token::RBracket)
    {
        body.push(parse_expression(tokens)?);
        if current(tokens).token == Token::Comma {
            tokens.next();
        }
    }

    let body = match body.len() {
        0 => None,
        1 => body.pop().map(Box::new),
        _ => {
            let span = body[0].span().to(body[body.len() - 1].span());
            Some(Box::new(Expr::List { items: body,
                                       span }))
        },
    };

    let end = body.as_ref().map_or(&then.span, |body| body.span());
    Ok(Expr::WhileLoop { span: keyword.span.to(end),
                         condition: Box::new(condition),
                         body })
}

/// Parses a function definition.
///
/// The name is optional; anonymous functions are plain values.
///
/// Grammar: `function := "FIXIN'" name? "(" (name ("," name)* ","?)? ")" "->"
/// expression`
fn parse_function_def<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let keyword = current(tokens);
    tokens.next();

    let name = match &current(tokens).token {
        Token::Identifier(name) => {
            tokens.next();
            Some(name.clone())
        },
        _ => None,
    };

    let opening = if name.is_some() { "'('" } else { "name or '('" };
    expect(tokens, &Token::LParen, opening)?;
    let (params, _) = parse_comma_separated(tokens,
                                            |tokens| parse_identifier(tokens).map(|(name, _)| name),
                                            &Token::RParen,
                                            "')'")?;

    expect(tokens, &Token::Arrow, "'->'")?;
    let body = parse_expression(tokens)?;

    Ok(Expr::FunctionDef { span: keyword.span.to(body.span()),
                           def:  Rc::new(FunctionDef { name,
                                                       params,
                                                       body }), })
}
