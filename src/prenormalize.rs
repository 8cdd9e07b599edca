use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;
use crate::format::ParsedFormat;
use crate::number::ParsedNumber;
use crate::numeric::Numeric;

lazy_static! {
    /// Grammar the prenormalizer's printf-style rendering is assumed to
    /// produce: an optional sign, at least one integer digit, a mandatory
    /// decimal point, zero or more fractional digits, and an optional
    /// signed exponent.
    static ref CANONICAL_RE: Regex =
        Regex::new(r"^(?P<sign>-)?(?P<int>[0-9]+)\.(?P<frac>[0-9]*)(e(?P<exp_sign>[+-])(?P<exp_digits>[0-9]+))?$")
            .unwrap();
}

/// Convert an arbitrary [`Numeric`] value into the canonical
/// decimal-or-exponent shape the renderer expects, driven by the parsed
/// format's scale and exponent flag.
pub(crate) fn prenormalize<N: Numeric>(value: &N, format: &ParsedFormat) -> Result<ParsedNumber, Error> {
    if value.is_infinite() {
        return Ok(ParsedNumber {
            is_infinity: true,
            negative: value.is_negative(),
            ..ParsedNumber::default()
        });
    }
    if value.is_nan() {
        return Ok(ParsedNumber {
            is_nan: true,
            ..ParsedNumber::default()
        });
    }

    let canonical = value.render_canonical(format.scale, format.has_exponent);
    let captures = CANONICAL_RE.captures(&canonical).ok_or_else(|| {
        Error::InternalAssertion(format!(
            "prenormalizer produced a string outside the expected grammar: {:?}",
            canonical
        ))
    })?;

    let negative = captures.name("sign").is_some();
    let mut integer_part = captures["int"].to_string();
    if integer_part == "0" {
        integer_part = String::new();
    }
    let fractional_part = captures.name("frac").map(|m| m.as_str().to_string()).unwrap_or_default();
    let exponent = match (captures.name("exp_sign"), captures.name("exp_digits")) {
        (Some(sign), Some(digits)) => format!("{}{}", sign.as_str(), digits.as_str()),
        _ => String::new(),
    };

    Ok(ParsedNumber {
        negative,
        is_infinity: false,
        is_nan: false,
        integer_part,
        fractional_part,
        exponent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::parser::parse;

    fn fmt(s: &str) -> ParsedFormat {
        parse(s, &Config::default()).expect("must parse")
    }

    #[test]
    fn zero_integer_part_normalizes_to_empty() {
        let number = prenormalize(&0u32, &fmt("9.99")).unwrap();
        assert_eq!(number.integer_part, "");
        assert_eq!(number.fractional_part, "00");
    }

    #[test]
    fn negative_sign_detected() {
        let number = prenormalize(&-3i32, &fmt("9")).unwrap();
        assert!(number.negative);
        assert_eq!(number.integer_part, "3");
    }

    #[test]
    fn exponent_digits_carry_explicit_sign() {
        let number = prenormalize(&1234u32, &fmt("9.99EEEE")).unwrap();
        assert_eq!(number.exponent, "+03");
    }

    #[test]
    fn infinity_and_nan_flagged() {
        let inf = prenormalize(&f64::INFINITY, &fmt("9")).unwrap();
        assert!(inf.is_infinity);

        let nan = prenormalize(&f64::NAN, &fmt("9")).unwrap();
        assert!(nan.is_nan);
    }
}
