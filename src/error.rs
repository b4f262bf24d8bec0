/// Lexing errors.
///
/// Defines the errors that can occur while turning raw source text into
/// tokens. The he lexer is deliberately permissive (unrecognized characters
/// are skipped), so the only lexical failure is a malformed comment.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the AST from the
/// token stream. Parse errors carry the sequence index of the offending
/// token along with the expected and found token kinds.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined variables, invalid or out-of-bounds indexes, and type
/// mismatches on assignment.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
