use oracle_numeric_format::{numerical_to_string_with_format as render, validate_format, Config};

macro_rules! render_tests {
    ($( $test_name:ident : ($fmt:expr, $num:expr) => $want:expr ; )*) => {
        $(
            #[test]
            fn $test_name() {
                let got = render($num, $fmt, &Config::default()).expect("must render");
                assert_eq!(got, $want);
            }
        )*
    };
}

macro_rules! reject_tests {
    ($( $test_name:ident : $fmt:expr ; )*) => {
        $(
            #[test]
            fn $test_name() {
                validate_format($fmt, &Config::default()).expect_err("must reject");
            }
        )*
    };
}

render_tests! {
    basic_fraction: ("9.99", 1.2f64) => " 1.20";
    d_alias_for_dot: ("9D99", 1.2f64) => " 1.20";
    v_elides_decimal_point: ("9V99", 1.2f64) => " 120";
    group_separator_fits: ("9,999", 1234u32) => " 1,234";
    group_separator_overflows: ("9,999", 12345u32) => "#,###";
    default_negative_sign: ("9", -3i32) => "-3";
    explicit_plus_minus_sign: ("S9", 3i32) => "+3";
    explicit_plus_minus_sign_negative: ("S9", -3i32) => "-3";
    trailing_mi_sign_positive: ("9MI", 3i32) => "3 ";
    trailing_mi_sign_negative: ("9MI", -3i32) => "3-";
    angle_bracket_sign_negative: ("9PR", -3i32) => "<3>";
    angle_bracket_sign_positive: ("9PR", 3i32) => " 3 ";
    integer_part_suppressed_below_one: ("9.9", 0.5f64) => "  .5";
    forced_leading_zero: ("0.9", 0.5f64) => " 0.5";
    currency_dollar: ("$9,999.99", 1234.5f64) => "$1,234.50";
    scientific_notation: ("9.99EEEE", 1234.0f64) => " 1.23e+03";
    scientific_notation_rounds_up: ("9.9EEEE", 999.0f64) => " 1.0e+03";
    zero_renders_as_zero: ("9", 0u32) => " 0";
}

reject_tests! {
    x_and_nine_conflict: "9X";
    roman_numeral_and_digits_conflict: "RN9";
    duplicate_sign_elements: "SMI9";
    comma_after_decimal_point: "9.9,9";
    tm_combined_with_other_elements: "TM9.9";
    unrecognised_character: "9Z";
}

#[test]
fn validate_format_accepts_reusable_format() {
    let config = Config::default();
    validate_format("$9,999.00", &config).expect("must parse");
    // A validated format string can be rendered against many values without
    // re-validating.
    assert_eq!(render(10u32, "$9,999.00", &config).unwrap(), "   $10.00");
    assert_eq!(render(2500u32, "$9,999.00", &config).unwrap(), "$2,500.00");
}

#[test]
fn negative_value_with_currency_keeps_minus_sign() {
    let got = render(-1234.5f64, "$9,999.99", &Config::default()).unwrap();
    assert_eq!(got, "-$1,234.50");
}

#[test]
fn format_too_long_is_rejected() {
    let mut config = Config::default();
    config.format_max_output_width = 4;
    let err = validate_format("999999", &config).unwrap_err();
    assert!(matches!(
        err,
        oracle_numeric_format::Error::FormatTooLong { limit: 4 }
    ));
}

#[test]
fn unimplemented_output_types_surface_distinct_errors() {
    validate_format("RN", &Config::default()).expect("RN is a valid format by itself");
    let err = render(42u32, "RN", &Config::default()).unwrap_err();
    assert!(matches!(err, oracle_numeric_format::Error::Unimplemented(_)));
}
