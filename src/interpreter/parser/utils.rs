use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::ParseResult,
        position::Span,
    },
};

/// Returns the lexeme at the front of the stream without consuming it.
///
/// # Panics
/// Panics if the stream is exhausted, which cannot happen for a sequence
/// produced by the tokenizer because the parser never consumes the
/// end-of-input sentinel.
pub(in crate::interpreter::parser) fn current<'a, I>(tokens: &mut Peekable<I>) -> &'a Lexeme
    where I: Iterator<Item = &'a Lexeme>
{
    match tokens.peek() {
        Some(&lexeme) => lexeme,
        None => unreachable!("token stream must end with Token::EndOfInput"),
    }
}

/// Consumes the next lexeme if it is `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
/// - `description`: How the expected token is named in the error message,
///   e.g. `'THEN'`.
///
/// # Errors
/// Returns an `Expected ...` syntax error at the current lexeme otherwise.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &str)
                                                    -> ParseResult<&'a Lexeme>
    where I: Iterator<Item = &'a Lexeme>
{
    let lexeme = current(tokens);
    if lexeme.token == *expected {
        tokens.next();
        Ok(lexeme)
    } else {
        Err(SyntaxError::expected(format!("Expected {description}"), &lexeme.span))
    }
}

/// Parses a plain identifier and returns its name and span.
///
/// # Errors
/// Returns `Expected name` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Span)>
    where I: Iterator<Item = &'a Lexeme>
{
    let lexeme = current(tokens);
    match &lexeme.token {
        Token::Identifier(name) => {
            tokens.next();
            Ok((name.clone(), lexeme.span.clone()))
        },
        _ => Err(SyntaxError::expected("Expected name", &lexeme.span)),
    }
}

/// Parses a comma-separated list of items up to and including a closing token.
///
/// This utility is shared by list literals, argument lists and parameter
/// lists. An immediately encountered closing token produces an empty list and
/// a comma directly before the closing token is accepted.
///
/// Grammar (simplified): `list := (item ("," item)* ","?)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `parse_item`: Function used to parse each element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
/// - `closing_description`: How the closing token is named in errors.
///
/// # Returns
/// The parsed items and the span of the closing token.
///
/// # Errors
/// Returns a `SyntaxError` if an item fails to parse or if an item is followed
/// by anything but a comma or the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    closing_description: &str)
    -> ParseResult<(Vec<T>, Span)>
    where I: Iterator<Item = &'a Lexeme>
{
    let mut items = Vec::new();
    loop {
        let lexeme = current(tokens);
        if lexeme.token == *closing {
            tokens.next();
            return Ok((items, lexeme.span.clone()));
        }

        items.push(parse_item(tokens)?);

        let lexeme = current(tokens);
        match &lexeme.token {
            Token::Comma => {
                tokens.next();
            },
            tok if tok == closing => {
                tokens.next();
                return Ok((items, lexeme.span.clone()));
            },
            _ => {
                return Err(SyntaxError::expected(format!("Expected ',' or {closing_description}"),
                                                 &lexeme.span));
            },
        }
    }
}
