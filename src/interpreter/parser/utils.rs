use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, which must be exactly `expected`.
///
/// Only useful for payload-free kinds (`;`, `=`, `[`, ...); identifiers and
/// numbers have their own helpers below.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, index)` pairs.
/// - `expected`: The token the grammar requires here.
///
/// # Errors
/// Returns a `ParseError` if the next token differs from `expected` or the
/// stream is exhausted.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, pos)) if token == expected => Ok(*pos),
        Some((token, pos)) => {
            Err(ParseError::UnexpectedToken { expected: format!("{expected:?}"),
                                              found:    format!("{token:?}"),
                                              pos:      *pos, })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Consumes the next token, which must be an identifier, and returns its
/// name together with its sequence index.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// stream is exhausted.
pub(in crate::interpreter::parser) fn expect_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                               -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), pos)) => Ok((name.clone(), *pos)),
        Some((token, pos)) => {
            Err(ParseError::UnexpectedToken { expected: "Identifier".to_string(),
                                              found:    format!("{token:?}"),
                                              pos:      *pos, })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Consumes the next token, which must be a number literal, and returns its
/// value together with its sequence index.
///
/// # Errors
/// Returns a `ParseError` if the next token is not a number or the stream
/// is exhausted.
pub(in crate::interpreter::parser) fn expect_number<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<(i64, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), pos)) => Ok((*value, *pos)),
        Some((token, pos)) => {
            Err(ParseError::UnexpectedToken { expected: "Number".to_string(),
                                              found:    format!("{token:?}"),
                                              pos:      *pos, })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
