/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements
/// against a mutable variable context, and performs the two print forms'
/// output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes with a single exhaustive dispatch.
/// - Manages the flat variable environment.
/// - Reports runtime errors such as undefined variables or invalid indexes.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces an ordered sequence of
/// tokens, each paired with its sequence index. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles number literals, identifiers, keywords and operators, using
///   longest-match to tell `=`/`==`, `|`/`||` and `+`/`++` apart.
/// - Rejects malformed comments; skips anything else it cannot recognize.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is recursive-descent with one-token lookahead and a single,
/// deliberate backtrack: an indexed assignment and a member read share a
/// prefix, so the member path saves its cursor and restores it when a `=`
/// turns up after the closing bracket.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with token positions.
/// - Discards comment tokens.
pub mod parser;
/// The value module defines the runtime data type for evaluation.
///
/// Everything in he is a [`U8`](value::U8): a scalar number or an array of
/// numbers with 1-based indexing and the index-0 bulk-update sentinel.
pub mod value;
