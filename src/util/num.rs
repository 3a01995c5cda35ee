/// Converts a script-level index into a position, rejecting negatives.
///
/// ## Returns
/// - `Some(usize)`: The position for a non-negative `value`.
/// - `None`: If `value` is negative or does not fit into `usize`.
///
/// ## Example
/// ```
/// use stargust::util::num::i64_to_index;
///
/// assert_eq!(i64_to_index(3), Some(3));
/// assert_eq!(i64_to_index(-1), None);
/// ```
#[must_use]
pub fn i64_to_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Converts a length into a script integer, saturating at `i64::MAX`.
///
/// ## Example
/// ```
/// use stargust::util::num::usize_to_i64_saturating;
///
/// assert_eq!(usize_to_i64_saturating(42), 42);
/// assert_eq!(usize_to_i64_saturating(usize::MAX), i64::MAX);
/// ```
#[must_use]
pub fn usize_to_i64_saturating(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
