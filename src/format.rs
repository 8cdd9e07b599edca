use crate::element::{FormatElement, OutputType};

/// The normalized description of how to render a number, produced by
/// [`parse_for_test`][crate::parse_for_test] (and consumed internally by
/// [`validate_format`][crate::validate_format] and
/// [`numerical_to_string_with_format`][crate::numerical_to_string_with_format]).
///
/// Immutable once constructed; cheap to clone and safe to share read-only
/// across threads (there is no interior mutability anywhere in this type).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedFormat {
    pub output_type: OutputType,

    /// Render-time significant elements, in source order: digit placeholders
    /// (`0`, `9`, `X`), decimal points (`.`, `D`, `V`), group separators
    /// (`,`, `G`), and the exponent marker (`EEEE`). Sign, currency, `FM`,
    /// and `B` never appear here; they're tracked as separate fields.
    pub(crate) elements: Vec<FormatElement>,

    /// Index into `elements` of the element that terminates the integer
    /// part. Equal to `elements.len()` when there is no decimal point at
    /// all (there is no sentinel value; this is always a valid "one past
    /// the last integer-part element" index).
    pub(crate) decimal_point_index: usize,

    /// Index into `elements` of the first `0` digit placeholder, if any.
    pub(crate) index_of_first_zero: Option<usize>,

    pub(crate) num_integer_digit: usize,
    pub(crate) scale: usize,

    pub(crate) sign: Option<FormatElement>,
    pub(crate) sign_at_front: bool,

    pub(crate) currency: Option<FormatElement>,
    pub(crate) roman_numeral: Option<FormatElement>,
    pub(crate) tm: Option<FormatElement>,

    pub(crate) has_fm: bool,
    pub(crate) has_b: bool,
    pub(crate) has_exponent: bool,
}

impl ParsedFormat {
    /// Count of digit placeholders before the decimal point.
    pub fn num_integer_digit(&self) -> usize {
        self.num_integer_digit
    }

    /// Count of digit placeholders after the decimal point.
    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn has_exponent(&self) -> bool {
        self.has_exponent
    }
}
