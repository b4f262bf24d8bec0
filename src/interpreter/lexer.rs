use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in he source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Disambiguation between `=` and `==`, `|` and `||`, and `+` and `++` is
/// longest-match: a maximal run of `=` longer than one character is a single
/// `Equality` token, and likewise for `Or`.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `68`. No floats, no sign.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// `u8`, the sole type keyword.
    #[token("u8")]
    U8,
    /// `print`
    #[token("print")]
    Print,
    /// `sprint`
    #[token("sprint")]
    Sprint,
    /// Identifier tokens; variable names such as `forceCon` or `$a_1`.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.` Comments are emitted into the token stream; discarding
    /// them is the parser's job.
    #[regex(r"//[^\n\r]*")]
    Comment,
    /// A lone `/`. Never part of the grammar; [`tokenize`] rejects it as a
    /// malformed comment.
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Assignment,
    /// `==`, or any longer run of `=`.
    #[regex(r"==+")]
    Equality,
    /// `|`
    #[token("|")]
    BitwiseOr,
    /// `||`, or any longer run of `|`.
    #[regex(r"\|\|+")]
    Or,
    /// `++`
    #[token("++")]
    Increment,
    /// `--`
    #[token("--")]
    Decrement,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `[`
    #[token("[")]
    OpenBracket,
    /// `]`
    #[token("]")]
    CloseBracket,
    /// `{`
    #[token("{")]
    OpenBrace,
    /// `}`
    #[token("}")]
    CloseBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Spaces, tabs and newlines between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` if the digit run does not fit in an `i64`, which makes
/// logos treat the slice as unrecognized input.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Converts he source text into an ordered sequence of tokens.
///
/// Each emitted token is paired with its strictly increasing sequence index,
/// starting at 0; parse errors report these indexes. Characters the lexer
/// does not recognize (a stray `+`, say) are silently skipped rather than
/// rejected. The end of the stream stands in for an explicit EOF token.
///
/// # Errors
/// Returns `LexError::MalformedComment` if a `/` is found that does not
/// begin a `//` comment.
///
/// # Example
/// ```
/// use helang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("u8 x = 10;").unwrap();
/// assert_eq!(tokens[0], (Token::U8, 0));
/// assert_eq!(tokens[2], (Token::Assignment, 2));
/// assert_eq!(tokens[3], (Token::Number(10), 3));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Slash) => {
                return Err(LexError::MalformedComment { offset: lexer.span().start, });
            },
            Ok(token) => {
                let index = tokens.len();
                tokens.push((token, index));
            },
            // Unrecognized characters are skipped, not rejected.
            Err(()) => {},
        }
    }

    Ok(tokens)
}
