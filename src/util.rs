/// Numeric conversion helpers.
///
/// The language has a single floating-point number type. These helpers decide
/// when such a number may be used where an integer is required (list indices
/// and repetition counts) without silent rounding.
pub mod num;
