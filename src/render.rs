use crate::element::{Case, FormatElement, OutputType};
use crate::error::Error;
use crate::format::ParsedFormat;
use crate::number::ParsedNumber;

/// Assemble the final output string from a parsed format and a
/// prenormalized number.
///
/// Only [`OutputType::Decimal`] is implemented; the other output types, and
/// the `B`/`FM` modifiers, and infinite/NaN inputs, all surface
/// [`Error::Unimplemented`].
pub(crate) fn render(format: &ParsedFormat, number: &ParsedNumber) -> Result<String, Error> {
    if number.is_infinity {
        return Err(Error::Unimplemented("rendering of infinite values"));
    }
    if number.is_nan {
        return Err(Error::Unimplemented("rendering of NaN"));
    }
    if format.has_b {
        return Err(Error::Unimplemented("the 'B' format element"));
    }
    if format.has_fm {
        return Err(Error::Unimplemented("the 'FM' format element"));
    }
    match format.output_type {
        OutputType::Decimal => render_decimal(format, number),
        OutputType::Hexadecimal => Err(Error::Unimplemented("hexadecimal output")),
        OutputType::RomanNumeral => Err(Error::Unimplemented("Roman numeral output")),
        OutputType::TextMinimal => Err(Error::Unimplemented("text-minimal output")),
    }
}

fn render_decimal(format: &ParsedFormat, number: &ParsedNumber) -> Result<String, Error> {
    let overflow = number.integer_part.len() > format.num_integer_digit;

    let (fractional_text, exponent_text) = render_fractional(format, number, overflow);
    let (integer_text, left_padding_size) = render_integer(format, number, overflow);

    let suppress_integer = !(!number.integer_part.is_empty()
        || format.has_exponent
        || format
            .index_of_first_zero
            .map(|idx| idx < format.decimal_point_index)
            .unwrap_or(false)
        || number.fractional_part.is_empty());

    let (integer_text, left_padding_size) = if format.num_integer_digit > 0 && suppress_integer {
        (String::new(), format.decimal_point_index)
    } else {
        (integer_text, left_padding_size)
    };

    let currency_text = currency_output(format.currency);
    // The implicit blank/`-` a bare `9`/`0` mask reserves for the sign is a
    // padding artifact, not a mask character the format string spelled out.
    // It's dropped once something else already marks the number's leading
    // edge: every placeholder column giving way to `#` on overflow, or a
    // currency symbol sitting directly against the first digit.
    let suppress_implicit_sign = overflow || format.currency.is_some();
    let (sign_prefix, sign_suffix) =
        sign_output(format.sign, format.sign_at_front, number.negative, suppress_implicit_sign);

    let mut out = String::with_capacity(
        left_padding_size + sign_prefix.len() + currency_text.len() + integer_text.len()
            + fractional_text.len()
            + exponent_text.len()
            + sign_suffix.len(),
    );
    for _ in 0..left_padding_size {
        out.push(' ');
    }
    out.push_str(sign_prefix);
    out.push_str(currency_text);
    out.push_str(&integer_text);
    out.push_str(&fractional_text);
    out.push_str(&exponent_text);
    out.push_str(sign_suffix);
    Ok(out)
}

/// Forward pass over `elements[decimal_point_index..]`: decimal point,
/// fractional digits, and the exponent marker.
fn render_fractional(format: &ParsedFormat, number: &ParsedNumber, overflow: bool) -> (String, String) {
    let mut text = String::new();
    let mut exponent_text = String::new();
    let frac_bytes = number.fractional_part.as_bytes();
    let mut frac_idx = 0usize;

    for element in &format.elements[format.decimal_point_index..] {
        match element {
            FormatElement::DecimalPointDot | FormatElement::DecimalPointD => {
                text.push('.');
            }
            FormatElement::ElementV => {}
            FormatElement::Digit0 | FormatElement::Digit9 => {
                if overflow {
                    text.push('#');
                } else if frac_idx < frac_bytes.len() {
                    text.push(frac_bytes[frac_idx] as char);
                }
                frac_idx += 1;
            }
            FormatElement::ExponentEEEE(case) => {
                if overflow {
                    exponent_text.push_str("####");
                } else {
                    exponent_text.push(match case {
                        Case::Upper => 'E',
                        Case::Lower => 'e',
                    });
                    exponent_text.push_str(&number.exponent);
                }
            }
            _ => unreachable!("only digits, decimal points, and EEEE follow decimal_point_index"),
        }
    }

    (text, exponent_text)
}

/// Backward pass over `elements[..decimal_point_index]`: integer digits and
/// group separators, with early stop producing left padding.
fn render_integer(format: &ParsedFormat, number: &ParsedNumber, overflow: bool) -> (String, usize) {
    let integer_part = if number.integer_part.is_empty() {
        "0".to_string()
    } else {
        number.integer_part.clone()
    };
    let integer_bytes = integer_part.as_bytes();
    let mut integer_idx = integer_bytes.len() as isize - 1;

    let mut reversed = String::new();
    let mut format_index = format.decimal_point_index as isize - 1;

    while format_index >= 0 {
        if integer_idx < 0 {
            let stop = match format.index_of_first_zero {
                None => true,
                Some(first_zero) => (format_index as usize) < first_zero,
            };
            if stop {
                break;
            }
        }

        match format.elements[format_index as usize] {
            FormatElement::Digit0 | FormatElement::Digit9 => {
                if overflow {
                    reversed.push('#');
                } else if integer_idx >= 0 {
                    reversed.push(integer_bytes[integer_idx as usize] as char);
                } else {
                    reversed.push('0');
                }
                integer_idx -= 1;
            }
            FormatElement::GroupSeparatorComma | FormatElement::GroupSeparatorG => {
                reversed.push(',');
            }
            _ => unreachable!("only digits and group separators precede decimal_point_index"),
        }

        format_index -= 1;
    }

    let left_padding_size = (format_index + 1) as usize;
    (reversed.chars().rev().collect(), left_padding_size)
}

fn currency_output(currency: Option<FormatElement>) -> &'static str {
    match currency {
        Some(FormatElement::CurrencyDollar) | Some(FormatElement::CurrencyL) => "$",
        Some(FormatElement::CurrencyC(Case::Lower)) => "usd",
        Some(FormatElement::CurrencyC(Case::Upper)) => "USD",
        _ => "",
    }
}

fn sign_output(
    sign: Option<FormatElement>,
    sign_at_front: bool,
    negative: bool,
    suppress_implicit: bool,
) -> (&'static str, &'static str) {
    match sign {
        Some(FormatElement::SignS) if sign_at_front => (if negative { "-" } else { "+" }, ""),
        Some(FormatElement::SignS) => ("", if negative { "-" } else { "+" }),
        Some(FormatElement::SignMi) => ("", if negative { "-" } else { " " }),
        Some(FormatElement::SignPr) => (if negative { "<" } else { " " }, if negative { ">" } else { " " }),
        _ if negative => ("-", ""),
        _ if suppress_implicit => ("", ""),
        _ => (" ", ""),
    }
}
