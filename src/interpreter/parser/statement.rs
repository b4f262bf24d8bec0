use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            expression::parse_bit_or_chain,
            utils::{expect_identifier, expect_token},
        },
    },
};

/// Parses a single statement.
///
/// Dispatch is on the current token kind:
/// - `u8` starts a variable declaration,
/// - an identifier starts an expression statement,
/// - `print` and `sprint` start the two print statements,
/// - a comment produces no statement and is skipped.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, index)` pairs.
///
/// # Returns
/// `Some(Statement)`, or `None` for tokens that produce no statement.
///
/// # Errors
/// Returns `ParseError::UnrecognizedStatement` for any other leading token.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, pos) = match tokens.peek() {
        Some((token, pos)) => (token, *pos),
        None => return Ok(None),
    };

    match token {
        Token::U8 => parse_variable_declaration(tokens).map(Some),
        Token::Identifier(_) => parse_expression_statement(tokens).map(Some),
        Token::Print => parse_print_statement(tokens).map(Some),
        Token::Sprint => parse_sprint_statement(tokens).map(Some),
        Token::Comment => {
            tokens.next();
            Ok(None)
        },
        other => {
            Err(ParseError::UnrecognizedStatement { token: format!("{other:?}"),
                                                    pos })
        },
    }
}

/// Parses a variable declaration.
///
/// A bare bitwise-or chain as the initializer is promoted to an array
/// expression: a chain is always array-typed when used as a value.
///
/// Grammar:
/// ```text
///     var_decl := "u8" IDENTIFIER ";"
///               | "u8" IDENTIFIER "=" expression ";"
/// ```
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let pos = expect_token(tokens, &Token::U8)?;
    let (name, _) = expect_identifier(tokens)?;

    // Declaration without initializer.
    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
        return Ok(Statement::VariableDeclaration { name,
                                                   init: None,
                                                   pos });
    }

    expect_token(tokens, &Token::Assignment)?;
    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon)?;

    let init = match expr {
        Expr::BitOr { chain, pos: chain_pos, } => {
            Expr::U8 { elements: chain,
                       pos:      chain_pos, }
        },
        other => other,
    };

    Ok(Statement::VariableDeclaration { name,
                                        init: Some(init),
                                        pos })
}

/// Parses an expression statement.
///
/// Grammar: `expr_stmt := expression ";"`
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon)?;
    let pos = expr.position();
    Ok(Statement::Expression { expr, pos })
}

/// Parses a print statement.
///
/// Grammar: `print_stmt := "print" expression ";"`
fn parse_print_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let pos = expect_token(tokens, &Token::Print)?;
    let argument = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon)?;
    Ok(Statement::Print { argument: Some(argument),
                          pos })
}

/// Parses a sprint statement. The argument is always a bitwise-or chain of
/// code points, never a general expression.
///
/// Grammar: `sprint_stmt := "sprint" bit_or_chain ";"`
fn parse_sprint_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let pos = expect_token(tokens, &Token::Sprint)?;
    let values = parse_bit_or_chain(tokens)?;
    expect_token(tokens, &Token::Semicolon)?;
    Ok(Statement::Sprint { values, pos })
}
