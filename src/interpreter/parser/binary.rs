use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{core::ParseResult, unary::parse_unary, utils::current},
    },
};

/// Parses the logical operators `AN'` and `OR`.
///
/// Both share the lowest binary precedence and associate to the left.
///
/// Grammar: `logical := comparison (("AN'" | "OR") comparison)*`
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// A logical expression tree.
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    parse_left_associative(tokens,
                           parse_comparison,
                           &[BinaryOperator::And, BinaryOperator::Or])
}

/// Parses relational and equality operators, or a prefix `AIN'T`.
///
/// `AIN'T` negates a whole comparison, so `AIN'T a == b` is `AIN'T (a == b)`.
///
/// Grammar:
/// ```text
/// comparison := "AIN'T" comparison
///             | additive (("==" | "!=" | "<" | ">" | "<=" | ">=") additive)*
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// A comparison expression tree.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let keyword = current(tokens);
    if keyword.token == Token::Aint {
        tokens.next();
        let operand = parse_comparison(tokens)?;
        return Ok(Expr::UnaryOp { op:      UnaryOperator::Not,
                                  span:    keyword.span.to(operand.span()),
                                  operand: Box::new(operand), });
    }

    parse_left_associative(tokens,
                           parse_additive,
                           &[BinaryOperator::Equal,
                             BinaryOperator::NotEqual,
                             BinaryOperator::Less,
                             BinaryOperator::Greater,
                             BinaryOperator::LessEqual,
                             BinaryOperator::GreaterEqual])
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    parse_left_associative(tokens,
                           parse_multiplicative,
                           &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    parse_left_associative(tokens, parse_unary, &[BinaryOperator::Mul, BinaryOperator::Div])
}

/// Folds `operand (op operand)*` into a left-leaning `Expr::BinaryOp` tree.
///
/// Each node spans from the start of its left operand to the end of its right
/// operand.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 parse_operand: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                                 operators: &[BinaryOperator])
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let mut left = parse_operand(tokens)?;
    loop {
        if let Some(op) = token_to_binary_operator(&current(tokens).token)
           && operators.contains(&op)
        {
            tokens.next();
            let right = parse_operand(tokens)?;
            left = Expr::BinaryOp { span: left.span().to(right.span()),
                                    left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator, if any.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// - `Some(BinaryOperator)` if the token is a binary operator.
/// - `None` otherwise.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    Some(match token {
             Token::Plus => BinaryOperator::Add,
             Token::Minus => BinaryOperator::Sub,
             Token::Star => BinaryOperator::Mul,
             Token::Slash => BinaryOperator::Div,
             Token::EqualEqual => BinaryOperator::Equal,
             Token::BangEqual => BinaryOperator::NotEqual,
             Token::Less => BinaryOperator::Less,
             Token::Greater => BinaryOperator::Greater,
             Token::LessEqual => BinaryOperator::LessEqual,
             Token::GreaterEqual => BinaryOperator::GreaterEqual,
             Token::An => BinaryOperator::And,
             Token::Or => BinaryOperator::Or,
             _ => return None,
         })
}
