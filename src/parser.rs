use crate::config::Config;
use crate::element::{FormatElement, OutputType};
use crate::error::Error;
use crate::format::ParsedFormat;
use crate::tokenizer::next_token;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    Start,
    IntegerPart,
    FractionalPart,
    AfterExponent,
    Hexadecimal,
    AfterBackSign,
    RomanNumeral,
    TextMinimal,
}

/// Mutable scratch space accumulated while walking the token stream.
///
/// Kept separate from [`ParsedFormat`] because several fields (`digit_count`,
/// `has_9`, `has_group_separator`, the decimal point element actually used)
/// only matter during validation and have no render-time meaning once
/// parsing succeeds.
struct Accum {
    elements: Vec<FormatElement>,
    decimal_point_index: Option<usize>,
    decimal_point_element: Option<FormatElement>,
    digit_count: usize,
    has_9: bool,
    has_x: bool,
    has_group_separator: bool,
    has_exponent: bool,
    has_fm: bool,
    has_b: bool,
    sign: Option<FormatElement>,
    sign_at_front: bool,
    currency: Option<FormatElement>,
    roman_numeral: Option<FormatElement>,
    tm: Option<FormatElement>,
}

impl Accum {
    fn new() -> Self {
        Accum {
            elements: Vec::new(),
            decimal_point_index: None,
            decimal_point_element: None,
            digit_count: 0,
            has_9: false,
            has_x: false,
            has_group_separator: false,
            has_exponent: false,
            has_fm: false,
            has_b: false,
            sign: None,
            sign_at_front: false,
            currency: None,
            roman_numeral: None,
            tm: None,
        }
    }

    fn push(&mut self, element: FormatElement) {
        self.elements.push(element);
    }

    fn set_sign(&mut self, element: FormatElement) -> Result<(), Error> {
        if self.sign.is_some() {
            return Err(Error::invalid_combination(
                "There can be at most one of 'S','MI','PR'",
            ));
        }
        self.sign = Some(element);
        Ok(())
    }
}

/// Run the tokenizer and the parser/validator state machine over `format_string`.
pub(crate) fn parse(format_string: &str, config: &Config) -> Result<ParsedFormat, Error> {
    if format_string.chars().count() > config.format_max_output_width {
        return Err(Error::FormatTooLong {
            limit: config.format_max_output_width,
        });
    }

    let mut state = State::Start;
    let mut acc = Accum::new();
    let mut rest = format_string;

    while !rest.is_empty() {
        let (element, len) =
            next_token(rest).ok_or_else(|| Error::invalid_syntax(rest.chars().next().unwrap()))?;
        rest = &rest[len..];

        // Global pre-processing: flag-like tokens never drive the state
        // machine and are never appended to `elements`.
        match element {
            FormatElement::CompactMode => {
                if acc.has_fm {
                    return Err(Error::invalid_combination("'FM' cannot be repeated"));
                }
                acc.has_fm = true;
                continue;
            }
            FormatElement::CurrencyDollar | FormatElement::CurrencyC(_) | FormatElement::CurrencyL => {
                if acc.currency.is_some() {
                    return Err(Error::invalid_combination(
                        "There can be at most one of '$', 'C' or 'L'",
                    ));
                }
                acc.currency = Some(element);
                continue;
            }
            FormatElement::ElementB => {
                if acc.has_b {
                    return Err(Error::invalid_combination("There can be at most one 'B'"));
                }
                acc.has_b = true;
                continue;
            }
            _ => {}
        }

        if element.is_digit() {
            acc.digit_count += 1;
        }

        state = step(state, element, &mut acc)?;
    }

    finish(acc)
}

fn step(state: State, element: FormatElement, acc: &mut Accum) -> Result<State, Error> {
    use FormatElement::*;

    match state {
        State::Start => match element {
            SignS => {
                acc.set_sign(element)?;
                acc.sign_at_front = true;
                Ok(State::IntegerPart)
            }
            SignMi | SignPr => Err(Error::invalid_combination(
                "'MI'/'PR' can only appear after all digits and 'EEEE'",
            )),
            Digit9 => {
                acc.has_9 = true;
                acc.push(element);
                Ok(State::IntegerPart)
            }
            Digit0 => {
                acc.push(element);
                Ok(State::IntegerPart)
            }
            DigitX(_) => {
                acc.has_x = true;
                acc.push(element);
                Ok(State::Hexadecimal)
            }
            RomanNumeral(_) => {
                acc.roman_numeral = Some(element);
                Ok(State::RomanNumeral)
            }
            DecimalPointDot | DecimalPointD | ElementV => {
                acc.push(element);
                acc.decimal_point_index = Some(acc.elements.len() - 1);
                acc.decimal_point_element = Some(element);
                Ok(State::FractionalPart)
            }
            Tm(_) | Tme(_) | Tm9(_) => {
                acc.tm = Some(element);
                Ok(State::TextMinimal)
            }
            other => Err(Error::invalid_combination(format!(
                "Unexpected '{}'",
                other.canonical_name()
            ))),
        },

        State::IntegerPart => match element {
            SignS | SignMi | SignPr => {
                acc.set_sign(element)?;
                acc.sign_at_front = false;
                Ok(State::AfterBackSign)
            }
            ExponentEEEE(_) => {
                if acc.has_group_separator {
                    return Err(Error::invalid_combination(
                        "',' or 'G' cannot appear together with 'EEEE'",
                    ));
                }
                acc.has_exponent = true;
                acc.push(element);
                acc.decimal_point_index = Some(acc.elements.len() - 1);
                Ok(State::AfterExponent)
            }
            DigitX(_) => {
                if acc.has_9 {
                    return Err(Error::invalid_combination(
                        "'X' cannot appear together with '9'",
                    ));
                }
                if acc.has_group_separator {
                    return Err(Error::invalid_combination(
                        "'X' cannot appear together with ',' or 'G'",
                    ));
                }
                acc.has_x = true;
                acc.push(element);
                Ok(State::Hexadecimal)
            }
            Digit9 => {
                acc.has_9 = true;
                acc.push(element);
                Ok(State::IntegerPart)
            }
            Digit0 => {
                acc.push(element);
                Ok(State::IntegerPart)
            }
            GroupSeparatorComma | GroupSeparatorG => {
                acc.has_group_separator = true;
                acc.push(element);
                Ok(State::IntegerPart)
            }
            DecimalPointDot | DecimalPointD | ElementV => {
                acc.push(element);
                acc.decimal_point_index = Some(acc.elements.len() - 1);
                acc.decimal_point_element = Some(element);
                Ok(State::FractionalPart)
            }
            Tm(_) | Tme(_) | Tm9(_) => Err(Error::invalid_combination(
                "'TM','TM9' or 'TME' cannot be combined with other format elements",
            )),
            other => Err(Error::invalid_combination(format!(
                "Unexpected format element '{}'",
                other.canonical_name()
            ))),
        },

        State::FractionalPart => match element {
            Digit9 | Digit0 => {
                acc.push(element);
                Ok(State::FractionalPart)
            }
            DigitX(_) => Err(Error::invalid_combination(format!(
                "'X' cannot appear together with '{}'",
                acc.decimal_point_element
                    .expect("FractionalPart implies a decimal point element was set")
                    .canonical_name()
            ))),
            ExponentEEEE(_) => {
                if acc.has_group_separator {
                    return Err(Error::invalid_combination(
                        "',' or 'G' cannot appear together with 'EEEE'",
                    ));
                }
                acc.has_exponent = true;
                acc.push(element);
                Ok(State::AfterExponent)
            }
            SignS | SignMi | SignPr => {
                acc.set_sign(element)?;
                acc.sign_at_front = false;
                Ok(State::AfterBackSign)
            }
            DecimalPointDot | DecimalPointD | ElementV => Err(Error::invalid_combination(
                "There can be at most one of '.','D','V'",
            )),
            GroupSeparatorComma | GroupSeparatorG => Err(Error::invalid_combination(
                "',' or 'G' cannot appear after '.','D' or 'V'",
            )),
            Tm(_) | Tme(_) | Tm9(_) => Err(Error::invalid_combination(
                "'TM','TM9' or 'TME' cannot be combined with other format elements",
            )),
            other => Err(Error::invalid_combination(format!(
                "Unexpected format element '{}'",
                other.canonical_name()
            ))),
        },

        State::AfterExponent => match element {
            SignS | SignMi | SignPr => {
                acc.set_sign(element)?;
                acc.sign_at_front = false;
                Ok(State::AfterBackSign)
            }
            GroupSeparatorComma | GroupSeparatorG => Err(Error::invalid_combination(
                "',' or 'G' cannot appear together with 'EEEE'",
            )),
            other => Err(Error::invalid_combination(format!(
                "'{}' cannot appear after 'EEEE'",
                other.canonical_name()
            ))),
        },

        State::AfterBackSign => {
            if element.is_digit() || matches!(element, ExponentEEEE(_)) {
                let message = match acc.sign {
                    Some(SignS) => "'S' can only appear before or after all digits and 'EEEE'".to_string(),
                    Some(sign) => format!(
                        "'{}' can only appear after all digits and 'EEEE'",
                        sign.canonical_name()
                    ),
                    None => unreachable!("AfterBackSign is only entered once a sign has been set"),
                };
                Err(Error::invalid_combination(message))
            } else {
                Err(Error::invalid_combination(format!(
                    "Unexpected format element '{}'",
                    element.canonical_name()
                )))
            }
        }

        State::Hexadecimal => match element {
            Digit0 => {
                acc.push(element);
                Ok(State::Hexadecimal)
            }
            DigitX(_) => {
                acc.push(element);
                Ok(State::Hexadecimal)
            }
            SignS | SignMi | SignPr => {
                acc.set_sign(element)?;
                acc.sign_at_front = false;
                Ok(State::AfterBackSign)
            }
            other => Err(Error::invalid_combination(format!(
                "'X' cannot appear together with '{}'",
                other.canonical_name()
            ))),
        },

        State::TextMinimal => Err(Error::invalid_combination(format!(
            "'TM','TM9' or 'TME' cannot be combined with other format elements, found '{}'",
            element.canonical_name()
        ))),

        State::RomanNumeral => Err(Error::invalid_combination(format!(
            "'RN' cannot appear together with '{}'",
            element.canonical_name()
        ))),
    }
}

fn finish(acc: Accum) -> Result<ParsedFormat, Error> {
    let Accum {
        mut elements,
        decimal_point_index,
        digit_count,
        has_x,
        has_exponent,
        has_fm,
        has_b,
        sign,
        sign_at_front,
        currency,
        roman_numeral,
        tm,
        ..
    } = acc;

    if currency.is_some() {
        if tm.is_some() {
            return Err(Error::invalid_combination(
                "'$', 'C' or 'L' cannot appear together with 'TM', 'TM9' or 'TME'",
            ));
        }
        if has_x {
            return Err(Error::invalid_combination(
                "'$', 'C' or 'L' cannot appear together with 'X'",
            ));
        }
        if roman_numeral.is_some() {
            return Err(Error::invalid_combination(
                "'$', 'C' or 'L' cannot appear together with 'RN'",
            ));
        }
    }

    if has_b {
        if tm.is_some() {
            return Err(Error::invalid_combination(
                "'B' cannot appear together with 'TM', 'TM9' or 'TME'",
            ));
        }
        if has_x {
            return Err(Error::invalid_combination("'B' cannot appear together with 'X'"));
        }
        if roman_numeral.is_some() {
            return Err(Error::invalid_combination("'B' cannot appear together with 'RN'"));
        }
    }

    if has_fm && tm.is_some() {
        return Err(Error::invalid_combination(
            "'FM' cannot appear together with 'TM', 'TM9' or 'TME'",
        ));
    }

    if tm.is_none() && roman_numeral.is_none() && digit_count == 0 {
        return Err(Error::EmptyDigits);
    }

    if has_x && digit_count > 16 {
        return Err(Error::HexTooLong);
    }

    let output_type = if tm.is_some() {
        OutputType::TextMinimal
    } else if roman_numeral.is_some() {
        OutputType::RomanNumeral
    } else if has_x {
        OutputType::Hexadecimal
    } else {
        OutputType::Decimal
    };

    // Resolve the sentinel: "no decimal point seen" becomes "one past the
    // last element", per spec -- not a magic index, just the natural
    // length of a list with no further elements to index into.
    let mut decimal_point_index = decimal_point_index.unwrap_or(elements.len());

    if has_exponent && decimal_point_index >= 2 {
        elements.drain(0..decimal_point_index - 1);
        decimal_point_index = 1;
    }

    let num_integer_digit = elements[..decimal_point_index]
        .iter()
        .filter(|e| e.is_digit())
        .count();
    let scale = elements[decimal_point_index..]
        .iter()
        .filter(|e| e.is_digit())
        .count();
    let index_of_first_zero = elements
        .iter()
        .position(|e| matches!(e, FormatElement::Digit0));

    Ok(ParsedFormat {
        output_type,
        elements,
        decimal_point_index,
        index_of_first_zero,
        num_integer_digit,
        scale,
        sign,
        sign_at_front,
        currency,
        roman_numeral,
        tm,
        has_fm,
        has_b,
        has_exponent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Case;

    fn p(s: &str) -> Result<ParsedFormat, Error> {
        parse(s, &Config::default())
    }

    #[test]
    fn b1_empty_format() {
        assert_eq!(p(""), Err(Error::EmptyDigits));
    }

    #[test]
    fn b2_too_many_x() {
        assert_eq!(p("XXXXXXXXXXXXXXXXX"), Err(Error::HexTooLong));
    }

    #[test]
    fn b3_x_with_9() {
        let err = p("9X").unwrap_err();
        assert_eq!(
            err,
            Error::invalid_combination("'X' cannot appear together with '9'")
        );
    }

    #[test]
    fn b4_group_separator_with_exponent() {
        let err = p("9,9EEEE").unwrap_err();
        assert_eq!(
            err,
            Error::invalid_combination("',' or 'G' cannot appear together with 'EEEE'")
        );
    }

    #[test]
    fn b5_leading_decimal_point_ok() {
        let f = p(".9").unwrap();
        assert_eq!(f.output_type, OutputType::Decimal);
        assert_eq!(f.num_integer_digit, 0);
        assert_eq!(f.scale, 1);

        let f = p("V9").unwrap();
        assert_eq!(f.num_integer_digit, 0);
        assert_eq!(f.scale, 1);
    }

    #[test]
    fn b6_tm9_parses_as_text_minimal() {
        let f = p("TM9").unwrap();
        assert_eq!(f.output_type, OutputType::TextMinimal);
    }

    #[test]
    fn b7_duplicate_decimal_point() {
        let err = p("9.9.9").unwrap_err();
        assert_eq!(
            err,
            Error::invalid_combination("There can be at most one of '.','D','V'")
        );
    }

    #[test]
    fn b8_mi_before_digits() {
        let err = p("9MI9").unwrap_err();
        assert_eq!(
            err,
            Error::invalid_combination(
                "'MI' can only appear after all digits and 'EEEE'"
            )
        );
    }

    #[test]
    fn p2_digit_count_invariant() {
        for fmt in ["999.99", "9,999.99", "0009", "99.9999", "9EEEE", "999.99EEEE"] {
            let parsed = p(fmt).unwrap();
            let total_digits = fmt.chars().filter(|c| "09X".contains(*c)).count();
            if !parsed.has_exponent {
                assert_eq!(
                    parsed.num_integer_digit + parsed.scale,
                    total_digits,
                    "format {}",
                    fmt
                );
            } else {
                // exponent rewrite drops leading integer placeholders; the
                // surviving count is exactly what P3 requires.
                assert_eq!(parsed.num_integer_digit, 1, "format {}", fmt);
            }
        }
    }

    #[test]
    fn p3_exponent_rewrite_keeps_one_integer_digit() {
        let f = p("999.99EEEE").unwrap();
        assert_eq!(f.decimal_point_index, 1);
        assert!(f.elements[0].is_digit());
        assert_eq!(f.scale, 2);

        let f = p("999EEEE").unwrap();
        assert_eq!(f.decimal_point_index, 1);
        assert_eq!(f.scale, 0);
    }

    #[test]
    fn roman_numeral_allows_fm() {
        let f = p("FMRN").unwrap();
        assert_eq!(f.output_type, OutputType::RomanNumeral);
        assert!(f.has_fm);
    }

    #[test]
    fn hex_format_rejects_nine() {
        let err = p("X9").unwrap_err();
        assert_eq!(
            err,
            Error::invalid_combination("'X' cannot appear together with '9'")
        );
    }

    #[test]
    fn currency_rejects_roman() {
        let err = p("$RN").unwrap_err();
        assert_eq!(
            err,
            Error::invalid_combination("'$', 'C' or 'L' cannot appear together with 'RN'")
        );
    }

    #[test]
    fn lowercase_tokens_produce_uppercase_error_text() {
        let err = p("9mi9").unwrap_err();
        assert_eq!(
            err,
            Error::invalid_combination(
                "'MI' can only appear after all digits and 'EEEE'"
            )
        );
    }

    #[test]
    fn exponent_case_is_preserved() {
        let f = p("9.99eeee").unwrap();
        assert!(matches!(
            f.elements.last().unwrap(),
            FormatElement::ExponentEEEE(Case::Lower)
        ));
    }
}
