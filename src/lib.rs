//! Render numbers to strings using an Oracle `TO_CHAR`-style runtime format
//! string.
//!
//! A format string such as `"$9,999.99"` or `"9.99EEEE"` is parsed once into
//! a [`ParsedFormat`], validated against the combination rules a number
//! format mask is subject to, and then used to render any number of values
//! of any [`Numeric`] type without re-parsing.
//!
//! ```
//! # use oracle_numeric_format::{numerical_to_string_with_format, Config};
//! let out = numerical_to_string_with_format(1234.5f64, "$9,999.99", &Config::default()).unwrap();
//! assert_eq!(out, "$1,234.50");
//! ```
//!
//! The pipeline is four stages, each its own module: a [`tokenizer`] that
//! scans the format string into [`FormatElement`]s, a [`parser`] state
//! machine that validates element combinations and produces a
//! [`ParsedFormat`], a [`prenormalize`] step that asks the input value for
//! one canonical printf-style rendering and reshapes it into a
//! [`ParsedNumber`], and a [`render`] step that assembles the two into the
//! final string.

mod config;
mod element;
mod error;
mod format;
mod number;
mod numeric;
mod parser;
mod prenormalize;
mod render;
mod tokenizer;

pub use config::Config;
pub use element::OutputType;
pub use error::Error;
pub use format::ParsedFormat;
pub use number::ParsedNumber;
pub use numeric::Numeric;

/// Check that `format_string` is a valid number format mask, without
/// rendering anything.
///
/// Equivalent to discarding the `Ok` value of [`parse_for_test`], but named
/// for the caller who only wants to validate a format string up front (e.g.
/// when it comes from user input) and render with it many times later.
pub fn validate_format(format_string: &str, config: &Config) -> Result<(), Error> {
    parser::parse(format_string, config).map(|_| ())
}

/// Parse `format_string` and render `value` with it in one step.
///
/// Parsing a format string is not free; callers rendering the same format
/// repeatedly should parse once with [`parse_for_test`] and reuse the
/// resulting [`ParsedFormat`] instead of calling this function in a loop.
pub fn numerical_to_string_with_format<N: Numeric>(
    value: N,
    format_string: &str,
    config: &Config,
) -> Result<String, Error> {
    let format = parser::parse(format_string, config)?;
    let number = prenormalize::prenormalize(&value, &format)?;
    render::render(&format, &number)
}

/// Parse a format string into its normalized, reusable [`ParsedFormat`].
///
/// This is the seam most tests exercise directly: it lets a test assert on
/// the shape the parser produced (`num_integer_digit`, `scale`,
/// `has_exponent`, ...) without also exercising rendering.
pub fn parse_for_test(format_string: &str, config: &Config) -> Result<ParsedFormat, Error> {
    parser::parse(format_string, config)
}
