/// Core parsing logic.
///
/// Contains the program entry point, the expression dispatch and the shared
/// `ParseResult` alias.
pub mod core;

/// Statement parsing.
///
/// Implements the statement-level grammar: variable declarations,
/// expression statements, `print` and `sprint`.
pub mod statement;

/// Expression parsing.
///
/// Implements the lookahead paths, the bitwise-or chain, member access,
/// assignment (including the one-shot backtrack that disambiguates indexed
/// assignment from member reads), array allocation and updates.
pub mod expression;

/// Utility functions for the parser.
///
/// Provides the `expect_*` helpers that consume one token of a required
/// kind or produce a descriptive error.
pub mod utils;
