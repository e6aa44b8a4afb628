/// Narrows an `i64` to `i32` if and only if it is exactly representable.
///
/// Arithmetic is carried out in `i64` so that the full range of any 32-bit
/// sum, difference or product is held without wrapping; this is the range
/// check that brings the result back down.
///
/// ## Errors
/// Returns `Err(error)` if the value is outside the `i32` range.
///
/// ## Parameters
/// - `value`: The integer to narrow.
/// - `error`: The error to return if the value does not fit.
///
/// ## Example
/// ```
/// use bitcalc::util::num::i64_to_i32_checked;
///
/// // Works for in-range values
/// let result = i64_to_i32_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42);
///
/// // Fails just past either end of the range
/// let big = i64::from(i32::MAX) + 1;
/// assert!(i64_to_i32_checked(big, "too big!").is_err());
/// let small = i64::from(i32::MIN) - 1;
/// assert!(i64_to_i32_checked(small, "too small!").is_err());
/// ```
pub fn i64_to_i32_checked<E>(value: i64, error: E) -> Result<i32, E> {
    i32::try_from(value).map_err(|_| error)
}
/// Reinterprets an `i32` as `u32` if and only if it is non-negative.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative.
///
/// ## Parameters
/// - `value`: The signed value to reinterpret.
/// - `error`: The error to return if the value is negative.
///
/// ## Example
/// ```
/// use bitcalc::util::num::i32_to_u32_checked;
///
/// assert_eq!(i32_to_u32_checked(45, "negative!").unwrap(), 45);
/// assert!(i32_to_u32_checked(-1, "negative!").is_err());
/// ```
pub fn i32_to_u32_checked<E>(value: i32, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}
