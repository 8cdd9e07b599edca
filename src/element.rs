/// Case of a format element whose token spelling affects output.
///
/// Only `EEEE` (emits `e`/`E`) and `C` (emits `usd`/`USD`) actually read this
/// back out at render time; it is tracked for every case-insensitive token
/// regardless, since the parser accepts either case uniformly.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Case {
    Upper,
    Lower,
}

impl Case {
    pub(crate) fn of(c: char) -> Self {
        if c.is_ascii_lowercase() {
            Case::Lower
        } else {
            Case::Upper
        }
    }
}

/// A single recognised token of a format string.
///
/// Digit placeholders (`0`, `9`, `X`) and the `EEEE`/`RN`/`TM`/`TM9`/`TME`/`C`
/// tokens carry a [`Case`] because the tokenizer is case-insensitive but a
/// handful of elements echo their case back into the rendered output.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormatElement {
    Digit9,
    Digit0,
    DigitX(Case),

    DecimalPointDot,
    DecimalPointD,
    ElementV,

    GroupSeparatorComma,
    GroupSeparatorG,

    SignS,
    SignMi,
    SignPr,

    ExponentEEEE(Case),

    RomanNumeral(Case),
    Tm(Case),
    Tme(Case),
    Tm9(Case),

    CompactMode,
    ElementB,

    CurrencyDollar,
    CurrencyC(Case),
    CurrencyL,
}

impl FormatElement {
    /// `true` for the three digit placeholders (`0`, `9`, `X`).
    pub(crate) fn is_digit(self) -> bool {
        matches!(
            self,
            FormatElement::Digit9 | FormatElement::Digit0 | FormatElement::DigitX(_)
        )
    }

    /// The uppercase spelling of this element, used verbatim in error messages.
    ///
    /// Error text is asserted verbatim by tests downstream, so this must
    /// return the canonical spelling regardless of the case the token was
    /// actually written in.
    pub(crate) fn canonical_name(self) -> &'static str {
        match self {
            FormatElement::Digit9 => "9",
            FormatElement::Digit0 => "0",
            FormatElement::DigitX(_) => "X",
            FormatElement::DecimalPointDot => ".",
            FormatElement::DecimalPointD => "D",
            FormatElement::ElementV => "V",
            FormatElement::GroupSeparatorComma => ",",
            FormatElement::GroupSeparatorG => "G",
            FormatElement::SignS => "S",
            FormatElement::SignMi => "MI",
            FormatElement::SignPr => "PR",
            FormatElement::ExponentEEEE(_) => "EEEE",
            FormatElement::RomanNumeral(_) => "RN",
            FormatElement::Tm(_) => "TM",
            FormatElement::Tme(_) => "TME",
            FormatElement::Tm9(_) => "TM9",
            FormatElement::CompactMode => "FM",
            FormatElement::ElementB => "B",
            FormatElement::CurrencyDollar => "$",
            FormatElement::CurrencyC(_) => "C",
            FormatElement::CurrencyL => "L",
        }
    }
}

/// The rendering mode selected by a parsed format string.
///
/// Only [`OutputType::Decimal`] is implemented by the renderer; the other
/// three are fully validated by the parser but surface
/// [`Error::Unimplemented`][crate::Error::Unimplemented] at render time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputType {
    Decimal,
    Hexadecimal,
    RomanNumeral,
    TextMinimal,
}
