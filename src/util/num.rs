/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if the value is finite, integral and exactly
/// representable.
///
/// ## Example
/// ```
/// use southscript::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(-3.0), Some(-3));
/// assert_eq!(f64_to_i64_checked(1.5), None);
/// assert_eq!(f64_to_i64_checked(1e300), None);
/// assert_eq!(f64_to_i64_checked(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Resolves a list index against a list of `len` elements.
///
/// The index must be integral. Negative indices count from the end, so `-1`
/// is the last element.
///
/// ## Returns
/// - `Some(position)`: a valid position in `0..len`.
/// - `None`: the index is fractional, non-finite or out of range.
///
/// ## Example
/// ```
/// use southscript::util::num::resolve_index;
///
/// assert_eq!(resolve_index(0.0, 3), Some(0));
/// assert_eq!(resolve_index(-1.0, 3), Some(2));
/// assert_eq!(resolve_index(3.0, 3), None);
/// assert_eq!(resolve_index(-4.0, 3), None);
/// assert_eq!(resolve_index(0.5, 3), None);
/// ```
#[must_use]
pub fn resolve_index(index: f64, len: usize) -> Option<usize> {
    let index = f64_to_i64_checked(index)?;
    let len = i64::try_from(len).ok()?;
    let position = if index < 0 { len + index } else { index };

    if (0..len).contains(&position) {
        usize::try_from(position).ok()
    } else {
        None
    }
}

/// Converts a repetition count for text repetition.
///
/// The count is truncated toward zero; negative, `NaN` and infinite counts
/// repeat nothing.
///
/// ## Example
/// ```
/// use southscript::util::num::repeat_count;
///
/// assert_eq!(repeat_count(3.0), 3);
/// assert_eq!(repeat_count(2.9), 2);
/// assert_eq!(repeat_count(-1.0), 0);
/// assert_eq!(repeat_count(f64::INFINITY), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_precision_loss)]
pub fn repeat_count(count: f64) -> usize {
    if !count.is_finite() || count <= 0.0 {
        return 0;
    }
    count.trunc().min(MAX_SAFE_U64_INT as f64) as usize
}
