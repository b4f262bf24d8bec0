/// Numeric conversion helpers.
///
/// This module provides safe functions for converting the interpreter's
/// `i64` numbers into the narrower types that indexing and code-point
/// decoding require. All functions return a `Result` carrying a
/// caller-supplied error, so no conversion can silently truncate.
pub mod num;
