use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{ConditionalCase, Expr},
    error::SyntaxError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            binary::parse_logical,
            utils::{current, expect, parse_identifier},
        },
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a whole program.
///
/// A program is exactly one expression followed by the end of input. The
/// lexemes must come from [`tokenize`](crate::interpreter::lexer::tokenize),
/// which guarantees the trailing [`Token::EndOfInput`].
///
/// # Errors
/// Returns the first [`SyntaxError`] encountered, or an error at the first
/// token left over after the program expression.
///
/// # Panics
/// Panics if `lexemes` does not end with [`Token::EndOfInput`].
///
/// ## Example
/// ```
/// use southscript::{ast::Expr, interpreter::{lexer::tokenize, parser::core::parse}};
///
/// let lexemes = tokenize("<stdin>", "THANG x = 1 + 2").unwrap();
/// let program = parse(&lexemes).unwrap();
///
/// assert!(matches!(program, Expr::Assignment { .. }));
/// ```
pub fn parse(lexemes: &[Lexeme]) -> ParseResult<Expr> {
    let mut tokens = lexemes.iter().peekable();
    let program = parse_expression(&mut tokens)?;

    let lexeme = current(&mut tokens);
    if lexeme.token != Token::EndOfInput {
        return Err(SyntaxError::expected("Expected an operator or the end of input", &lexeme.span));
    }

    debug!(nodes = lexemes.len(), "parsed program");
    Ok(program)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. A leading `THANG` starts
/// an assignment; everything else begins at the lowest-precedence level,
/// logical `AN'`/`OR`, and recursively descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := "THANG" name "=" expression | logical`
///
/// # Parameters
/// - `tokens`: Token iterator providing lexemes.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    if current(tokens).token == Token::Thang {
        return parse_assignment(tokens);
    }
    parse_logical(tokens)
}

/// Parses `THANG name = expression`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let keyword = current(tokens);
    tokens.next();

    let (name, _) = parse_identifier(tokens)?;
    expect(tokens, &Token::Equals, "'='")?;
    let value = parse_expression(tokens)?;

    Ok(Expr::Assignment { span: keyword.span.to(value.span()),
                          name,
                          value: Box::new(value) })
}

/// Parses a `RECKON` expression with optional `MIGHTCOULD` and `ELSE`
/// clauses.
///
/// Syntax:
/// ```text
///     RECKON <condition> THEN <result>
///     MIGHTCOULD <condition> THEN <result>
///     ELSE <result>
/// ```
/// Any number of `MIGHTCOULD` clauses may follow the first case.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `RECKON` keyword.
///
/// # Returns
/// An `Expr::Conditional` node representing the full conditional expression.
///
/// # Errors
/// - `Expected 'THEN'` if a condition is not followed by `THEN`.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let keyword = current(tokens);
    tokens.next();

    let mut cases = vec![parse_case(tokens)?];
    while current(tokens).token == Token::MightCould {
        tokens.next();
        cases.push(parse_case(tokens)?);
    }

    let default = if current(tokens).token == Token::Else {
        tokens.next();
        Some(Box::new(parse_expression(tokens)?))
    } else {
        None
    };

    let end = match (&default, cases.last()) {
        (Some(default), _) => default.span(),
        (None, Some(case)) => case.result.span(),
        (None, None) => unreachable!("a conditional has at least one case"),
    };

    Ok(Expr::Conditional { span: keyword.span.to(end),
                           cases,
                           default })
}

fn parse_case<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ConditionalCase>
    where I: Iterator<Item = &'a Lexeme>
{
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Then, "'THEN'")?;
    let result = parse_expression(tokens)?;

    Ok(ConditionalCase { condition, result })
}
