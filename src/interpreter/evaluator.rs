/// Core evaluation logic.
///
/// Contains the [`Context`](core::Context) environment and the exhaustive
/// dispatch over AST nodes.
pub mod core;

/// Utility functions for the evaluator.
///
/// Provides the code-point decoding used by `sprint`.
pub mod utils;
