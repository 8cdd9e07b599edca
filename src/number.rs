/// A numeric value rewritten into the canonical decimal-or-exponent shape
/// the renderer expects.
///
/// Produced fresh for every render call by
/// [`prenormalize`][crate::prenormalize::prenormalize]; carries no
/// connection back to the [`Numeric`][crate::Numeric] value it was derived
/// from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ParsedNumber {
    pub negative: bool,
    pub is_infinity: bool,
    pub is_nan: bool,

    /// Digits left of the decimal point. Empty when the integer part is
    /// zero (an integer part of exactly `"0"` is normalized to `""`).
    pub integer_part: String,

    /// Digits right of the decimal point. May be empty.
    pub fractional_part: String,

    /// Signed exponent digits, e.g. `"+07"` or `"-04"`. Empty when there is
    /// no exponent.
    pub exponent: String,
}
