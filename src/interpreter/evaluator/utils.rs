use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_u32_checked,
};

/// Decodes a sequence of numbers as Unicode code points and joins them into
/// one string with no separator. This is the semantics of `sprint`.
///
/// # Parameters
/// - `values`: The code point values, in order.
/// - `pos`: Token position for error reporting.
///
/// # Errors
/// Returns `RuntimeError::InvalidCodePoint` if a value is negative, too
/// large, or a surrogate.
///
/// # Example
/// ```
/// use helang::interpreter::evaluator::utils::decode_code_points;
///
/// assert_eq!(decode_code_points(&[104, 101], 0).unwrap(), "he");
/// assert!(decode_code_points(&[-1], 0).is_err());
/// ```
pub fn decode_code_points(values: &[i64], pos: usize) -> EvalResult<String> {
    let mut text = String::with_capacity(values.len());
    for &value in values {
        let code = i64_to_u32_checked(value, RuntimeError::InvalidCodePoint { value, pos })?;
        let decoded = char::from_u32(code).ok_or(RuntimeError::InvalidCodePoint { value, pos })?;
        text.push(decoded);
    }
    Ok(text)
}
