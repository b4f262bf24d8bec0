/// Safely converts an `i64` to a `usize` if and only if it can be
/// represented exactly.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds the maximum
/// representable `usize`.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use helang::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(42, "negative!"), Ok(42));
/// assert!(i64_to_usize_checked(-1, "negative!").is_err());
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}

/// Safely converts an `i64` to a `u32` if and only if it can be represented
/// exactly.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds `u32::MAX`.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use helang::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(104, "out of range!"), Ok(104));
/// assert!(i64_to_u32_checked(i64::MAX, "out of range!").is_err());
/// ```
pub fn i64_to_u32_checked<E>(value: i64, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}
