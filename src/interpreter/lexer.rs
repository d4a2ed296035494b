use logos::{Lexer, Logos};
use tracing::debug;

use crate::{
    error::{LexError, lex_error::LexErrorKind},
    interpreter::position::{LineIndex, Span},
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Numeric literal tokens with a decimal point, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Double quoted text literal with its escapes already resolved.
    #[token("\"", lex_text)]
    Text(String),
    /// Identifier tokens; variable or function names such as `x` or `fact`.
    ///
    /// A leading `T'` is never part of an identifier, it is always the `T'`
    /// keyword.
    #[regex(r"[A-SU-Za-z][A-Za-z0-9_']*", |lex| lex.slice().to_string())]
    #[regex(r"T([A-Za-z0-9_][A-Za-z0-9_']*)?", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `THANG`
    #[token("THANG")]
    Thang,
    /// `RECKON`
    #[token("RECKON")]
    Reckon,
    /// `MIGHTCOULD`
    #[token("MIGHTCOULD")]
    MightCould,
    /// `THEN`
    #[token("THEN")]
    Then,
    /// `ELSE`
    #[token("ELSE")]
    Else,
    /// `TROT`
    #[token("TROT")]
    Trot,
    /// `T'`
    #[token("T'")]
    To,
    /// `BY_A_PEICE`
    #[token("BY_A_PEICE")]
    ByAPeice,
    /// `WHILES`
    #[token("WHILES")]
    Whiles,
    /// `FIXIN'`
    #[token("FIXIN'")]
    Fixin,
    /// `AIN'T`
    #[token("AIN'T")]
    Aint,
    /// `AN'`
    #[token("AN'")]
    An,
    /// `OR`
    #[token("OR")]
    Or,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `->`
    #[token("->")]
    Arrow,
    /// `# Comments` run through the end of the line.
    #[regex(r"#[^\n]*\n?", logos::skip)]
    Comment,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// Sentinel appended after the last real token.
    EndOfInput,
}

/// A token together with the source range it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub span:  Span,
}

/// Converts source text into a sequence of lexemes.
///
/// The returned sequence always ends with [`Token::EndOfInput`]. The first
/// lexical error aborts tokenization and no partial sequence is returned.
///
/// # Errors
/// Returns a [`LexError`] for characters outside the language, a `!` that is
/// not followed by `=`, a text literal without its closing quote, or an integer
/// literal that does not fit in 64 bits.
///
/// ## Example
/// ```
/// use southscript::interpreter::lexer::{Token, tokenize};
///
/// let lexemes = tokenize("<stdin>", "THANG x = 2").unwrap();
/// let tokens: Vec<_> = lexemes.into_iter().map(|l| l.token).collect();
///
/// assert_eq!(tokens,
///            vec![Token::Thang,
///                 Token::Identifier("x".into()),
///                 Token::Equals,
///                 Token::Integer(2),
///                 Token::EndOfInput]);
/// ```
pub fn tokenize(source_name: &str, text: &str) -> Result<Vec<Lexeme>, LexError> {
    let index = LineIndex::new(source_name, text);
    let mut lexer = Token::lexer(text);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        let span = index.span(lexer.span());
        match result {
            Ok(token) => lexemes.push(Lexeme { token, span }),
            Err(kind) => return Err(LexError::from_slice(kind, lexer.slice(), span)),
        }
    }

    lexemes.push(Lexeme { token: Token::EndOfInput,
                          span:  index.span(text.len()..text.len()), });

    debug!(source = source_name, tokens = lexemes.len(), "tokenized");
    Ok(lexemes)
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::LiteralTooLarge)
}

/// Reads the body of a text literal after its opening quote.
///
/// `\n` and `\t` become a newline and a tab, a backslash before any other
/// character yields that character. Reaching the end of input before the
/// closing quote consumes the rest of the source and reports
/// [`LexErrorKind::UnterminatedText`].
fn lex_text(lex: &mut Lexer<Token>) -> Result<String, LexErrorKind> {
    let remainder = lex.remainder();
    let mut text = String::new();
    let mut chars = remainder.char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(offset + 1);
                return Ok(text);
            },
            '\\' => match chars.next() {
                Some((_, 'n')) => text.push('\n'),
                Some((_, 't')) => text.push('\t'),
                Some((_, other)) => text.push(other),
                None => break,
            },
            _ => text.push(c),
        }
    }

    lex.bump(remainder.len());
    Err(LexErrorKind::UnterminatedText)
}
