use std::iter::Peekable;

use crate::{
    ast::{AssignTarget, BitOrChain, Expr, Property, UpdateOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            utils::{expect_identifier, expect_number, expect_token},
        },
    },
};

use crate::util::num::i64_to_usize_checked;

/// Peeks at the token after the current one without consuming anything.
fn second_token<'a, I>(tokens: &Peekable<I>) -> Option<&'a Token>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    lookahead.next().map(|(token, _)| token)
}

/// Parses an expression that starts with a number.
///
/// If the token after the number is `|`, the whole bitwise-or chain is
/// parsed; otherwise the number stands alone as a literal.
///
/// Grammar:
/// ```text
///     number_lookahead := NUMBER
///                       | bit_or_chain
/// ```
pub(in crate::interpreter::parser) fn parse_number_lookahead<'a, I>(tokens: &mut Peekable<I>)
                                                                    -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(Token::BitwiseOr) = second_token(tokens) {
        let pos = tokens.peek().map_or(0, |(_, pos)| *pos);
        let chain = parse_bit_or_chain(tokens)?;
        return Ok(Expr::BitOr { chain, pos });
    }

    let (value, pos) = expect_number(tokens)?;
    Ok(Expr::Literal { value, pos })
}

/// Parses an expression that starts with an identifier.
///
/// This is the ambiguity-resolution core of the parser. Dispatch is on the
/// token after the identifier:
/// - `[` tentatively parses a member expression; if the token right after
///   it is `=`, the cursor is rewound to the identifier and the input is
///   reparsed as an assignment instead. Member reads and indexed
///   assignments share a prefix and cannot be told apart any other way.
/// - `=` parses an assignment,
/// - `++` or `--` parses an update,
/// - anything else leaves a bare variable reference.
///
/// The rewind is a one-shot restore of a saved cursor, confined to this
/// single ambiguity.
pub(in crate::interpreter::parser) fn parse_identifier_lookahead<'a, I>(tokens: &mut Peekable<I>)
                                                                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match second_token(tokens) {
        Some(Token::OpenBracket) => {
            let saved = tokens.clone();
            let member = parse_member(tokens)?;
            if let Some((Token::Assignment, _)) = tokens.peek() {
                *tokens = saved;
                return parse_assignment(tokens);
            }
            Ok(member)
        },
        Some(Token::Assignment) => parse_assignment(tokens),
        Some(Token::Increment | Token::Decrement) => parse_update(tokens),
        _ => {
            let (name, pos) = expect_identifier(tokens)?;
            Ok(Expr::Identifier { name, pos })
        },
    }
}

/// Parses a bitwise-or chain of number literals.
///
/// The chain is right-recursive; the absence of a `|` after a number
/// terminates it. That is a normal end of the chain, not an error.
///
/// Grammar:
/// ```text
///     bit_or_chain := NUMBER
///                   | NUMBER "|" bit_or_chain
/// ```
pub(in crate::interpreter::parser) fn parse_bit_or_chain<'a, I>(tokens: &mut Peekable<I>)
                                                                -> ParseResult<BitOrChain>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (head, _) = expect_number(tokens)?;

    let tail = match tokens.peek() {
        Some((Token::BitwiseOr, _)) => {
            tokens.next();
            Some(Box::new(parse_bit_or_chain(tokens)?))
        },
        _ => None,
    };

    Ok(BitOrChain { head, tail })
}

/// Parses a member expression.
///
/// Grammar: `member := IDENTIFIER "[" property "]"`
fn parse_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (object, property, pos) = parse_member_parts(tokens)?;
    Ok(Expr::Member { object,
                      property,
                      pos })
}

/// Parses the raw parts of a member expression, shared between the member
/// read path and the indexed-assignment target.
fn parse_member_parts<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Property, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (object, pos) = expect_identifier(tokens)?;
    expect_token(tokens, &Token::OpenBracket)?;
    let property = parse_property(tokens)?;
    expect_token(tokens, &Token::CloseBracket)?;
    Ok((object, property, pos))
}

/// Parses the bracketed part of a member expression: a single index, or a
/// bitwise-or chain selecting several.
fn parse_property<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Property>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(Token::BitwiseOr) = second_token(tokens) {
        return Ok(Property::List(parse_bit_or_chain(tokens)?));
    }

    let (value, _) = expect_number(tokens)?;
    Ok(Property::Single(value))
}

/// Parses an assignment expression.
///
/// The left-hand side is a bare identifier or, when followed by `[`, a
/// member expression (reparsed from the identifier after a cursor restore).
/// A bitwise-or chain on the right-hand side is promoted to an array
/// expression.
///
/// Grammar:
/// ```text
///     assignment := IDENTIFIER "=" right
///                 | IDENTIFIER "[" property "]" "=" right
///     right      := identifier_lookahead
///                 | number_lookahead
/// ```
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let saved = tokens.clone();
    let (name, pos) = expect_identifier(tokens)?;

    let target = if let Some((Token::OpenBracket, _)) = tokens.peek() {
        *tokens = saved;
        let (object, property, _) = parse_member_parts(tokens)?;
        AssignTarget::Member { object, property }
    } else {
        AssignTarget::Variable { name }
    };

    expect_token(tokens, &Token::Assignment)?;

    let value = match tokens.peek() {
        Some((Token::Identifier(_), _)) => parse_identifier_lookahead(tokens)?,
        _ => parse_number_lookahead(tokens)?,
    };

    let value = match value {
        Expr::BitOr { chain, pos: chain_pos, } => {
            Expr::U8 { elements: chain,
                       pos:      chain_pos, }
        },
        other => other,
    };

    Ok(Expr::Assignment { target,
                          value: Box::new(value),
                          pos })
}

/// Parses an array allocation expression.
///
/// Grammar: `array_init := "[" NUMBER "]"`
pub(in crate::interpreter::parser) fn parse_array_init<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let pos = expect_token(tokens, &Token::OpenBracket)?;
    let (value, value_pos) = expect_number(tokens)?;
    expect_token(tokens, &Token::CloseBracket)?;

    let length = i64_to_usize_checked(value, ParseError::LengthTooLarge { pos: value_pos })?;
    Ok(Expr::ArrayInit { length, pos })
}

/// Parses an update expression.
///
/// Grammar: `update := IDENTIFIER ("++" | "--")`
fn parse_update<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, pos) = expect_identifier(tokens)?;

    let operator = match tokens.next() {
        Some((Token::Increment, _)) => UpdateOperator::Increment,
        Some((Token::Decrement, _)) => UpdateOperator::Decrement,
        Some((token, pos)) => {
            return Err(ParseError::UnexpectedToken { expected: "Increment or Decrement".to_string(),
                                                     found:    format!("{token:?}"),
                                                     pos:      *pos, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    Ok(Expr::Update { operator,
                      name,
                      pos })
}
