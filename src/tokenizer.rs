use crate::element::{Case, FormatElement};

/// Consume the longest recognised token at the start of `input`.
///
/// Returns the element plus how many `char`s were consumed, or `None` if
/// `input` starts with a character that no token recognises. The match is
/// case-insensitive; multi-character tokens are checked before their
/// single-character prefixes so e.g. `MI` is never mistaken for a bare `M`
/// (which isn't a token at all) and `TM9`/`TME` are never truncated to `TM`.
pub(crate) fn next_token(input: &str) -> Option<(FormatElement, usize)> {
    let first = input.chars().next()?;
    let case = Case::of(first);
    let upper4: String = input.chars().take(4).map(|c| c.to_ascii_uppercase()).collect();

    if upper4.starts_with("EEEE") {
        return Some((FormatElement::ExponentEEEE(case), 4));
    }
    if upper4.starts_with("TM9") {
        return Some((FormatElement::Tm9(case), 3));
    }
    if upper4.starts_with("TME") {
        return Some((FormatElement::Tme(case), 3));
    }
    if upper4.starts_with("MI") {
        return Some((FormatElement::SignMi, 2));
    }
    if upper4.starts_with("PR") {
        return Some((FormatElement::SignPr, 2));
    }
    if upper4.starts_with("RN") {
        return Some((FormatElement::RomanNumeral(case), 2));
    }
    if upper4.starts_with("FM") {
        return Some((FormatElement::CompactMode, 2));
    }
    if upper4.starts_with("TM") {
        return Some((FormatElement::Tm(case), 2));
    }

    match first {
        '$' => Some((FormatElement::CurrencyDollar, 1)),
        '9' => Some((FormatElement::Digit9, 1)),
        '0' => Some((FormatElement::Digit0, 1)),
        'X' | 'x' => Some((FormatElement::DigitX(case), 1)),
        '.' => Some((FormatElement::DecimalPointDot, 1)),
        'D' | 'd' => Some((FormatElement::DecimalPointD, 1)),
        ',' => Some((FormatElement::GroupSeparatorComma, 1)),
        'G' | 'g' => Some((FormatElement::GroupSeparatorG, 1)),
        'S' | 's' => Some((FormatElement::SignS, 1)),
        'B' | 'b' => Some((FormatElement::ElementB, 1)),
        'V' | 'v' => Some((FormatElement::ElementV, 1)),
        'C' | 'c' => Some((FormatElement::CurrencyC(case), 1)),
        'L' | 'l' => Some((FormatElement::CurrencyL, 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_tokens_win_over_prefixes() {
        assert!(matches!(
            next_token("MI9"),
            Some((FormatElement::SignMi, 2))
        ));
        assert!(matches!(
            next_token("EEEE9"),
            Some((FormatElement::ExponentEEEE(Case::Upper), 4))
        ));
        assert!(matches!(next_token("TM9x"), Some((FormatElement::Tm9(_), 3))));
        assert!(matches!(next_token("TME"), Some((FormatElement::Tme(_), 3))));
        assert!(matches!(next_token("TM"), Some((FormatElement::Tm(_), 2))));
    }

    #[test]
    fn case_insensitive() {
        assert!(matches!(
            next_token("rn"),
            Some((FormatElement::RomanNumeral(Case::Lower), 2))
        ));
        assert!(matches!(
            next_token("eeee"),
            Some((FormatElement::ExponentEEEE(Case::Lower), 4))
        ));
    }

    #[test]
    fn unrecognised_character_is_none() {
        assert_eq!(next_token("!"), None);
        assert_eq!(next_token(""), None);
    }

    #[test]
    fn single_char_tokens() {
        assert!(matches!(next_token("9"), Some((FormatElement::Digit9, 1))));
        assert!(matches!(next_token("0"), Some((FormatElement::Digit0, 1))));
        assert!(matches!(next_token(","), Some((FormatElement::GroupSeparatorComma, 1))));
        assert!(matches!(next_token("$"), Some((FormatElement::CurrencyDollar, 1))));
    }
}
