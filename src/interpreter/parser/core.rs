use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::expression::{parse_array_init, parse_identifier_lookahead, parse_number_lookahead},
        parser::statement::parse_statement,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token stream into a [`Program`].
///
/// Statements are parsed until the stream is exhausted. Comment tokens
/// produce no statement and are skipped.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, index)` pairs.
///
/// # Returns
/// The program root node.
///
/// # Errors
/// Propagates the first `ParseError` encountered; there is no recovery.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut body = Vec::new();
    while tokens.peek().is_some() {
        if let Some(statement) = parse_statement(tokens)? {
            body.push(statement);
        }
    }
    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. Dispatch is on the
/// current token kind:
/// - a number starts the number-lookahead path (literal or bitwise-or
///   chain),
/// - an identifier starts the identifier-lookahead path (reference, member
///   access, assignment or update),
/// - `[` starts an array allocation.
///
/// Grammar:
/// ```text
///     expression := number_lookahead
///                 | identifier_lookahead
///                 | array_init
/// ```
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, index)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns `ParseError::ExpectedExpression` if the current token cannot
/// begin an expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(_), _)) => parse_number_lookahead(tokens),
        Some((Token::Identifier(_), _)) => parse_identifier_lookahead(tokens),
        Some((Token::OpenBracket, _)) => parse_array_init(tokens),
        Some((token, pos)) => {
            Err(ParseError::ExpectedExpression { token: format!("{token:?}"),
                                                 pos:   *pos, })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
