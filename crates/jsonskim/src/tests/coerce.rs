use rstest::rstest;

use crate::{Error, parse};

#[rstest]
#[case("7", 7)]
#[case("-12", -12)]
#[case("0", 0)]
#[case("12.5", 12)]
#[case("1e3", 1)]
#[case("-2147483648", i32::MIN)]
#[case("2147483647", i32::MAX)]
fn as_i32_parses_the_leading_integer_run(#[case] text: &str, #[case] expected: i32) {
    assert_eq!(parse(text).as_i32(), Ok(expected));
}

#[rstest]
#[case::empty("")]
#[case::alpha("abc")]
#[case::leading_plus("+5")]
#[case::bare_sign("-")]
#[case::overflow("2147483648")]
#[case::underflow("-2147483649")]
#[case::string_shape(r#""7""#)]
fn as_i32_rejects(#[case] text: &str) {
    assert_eq!(parse(text).as_i32(), Err(Error::MalformedNumber));
}

#[rstest]
#[case("0", 0)]
#[case("7", 7)]
#[case("4294967295", u32::MAX)]
#[case("12.5", 12)]
fn as_u32_parses_the_leading_digit_run(#[case] text: &str, #[case] expected: u32) {
    assert_eq!(parse(text).as_u32(), Ok(expected));
}

#[test]
fn negative_text_is_never_reinterpreted_as_unsigned() {
    // Bit-reinterpreting "-1" would quietly yield u32::MAX; it is a
    // hard error instead.
    assert_eq!(parse("-1").as_u32(), Err(Error::MalformedNumber));
    assert_eq!(parse("-4294967295").as_u32(), Err(Error::MalformedNumber));
}

#[test]
fn as_u32_rejects_overflow() {
    assert_eq!(parse("4294967296").as_u32(), Err(Error::MalformedNumber));
}

#[rstest]
#[case::plain(r#""hello""#, "hello")]
#[case::empty(r#""""#, "")]
#[case::newline(r#""a\nb""#, "a\nb")]
#[case::tab_and_return(r#""a\tb\rc""#, "a\tb\rc")]
#[case::quote_and_backslash(r#""q: \" b: \\""#, "q: \" b: \\")]
#[case::control_pair(r#""\b\f""#, "\u{8}\u{c}")]
#[case::unicode_bmp(r#""caf\u00e9""#, "caf\u{e9}")]
#[case::unicode_letter(r#""\u0041BC""#, "ABC")]
#[case::surrogate_pair(r#""\ud83d\ude00""#, "\u{1f600}")]
#[case::multibyte_passthrough("\"\u{3b1}\u{3b2}\"", "\u{3b1}\u{3b2}")]
fn as_string_decodes_escapes(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(parse(text).as_string().as_deref(), Ok(expected));
}

#[rstest]
#[case::bad_selector(r#""a\x""#, Error::InvalidEscape('x'))]
#[case::solidus(r#""a\/b""#, Error::InvalidEscape('/'))]
#[case::bad_hex(r#""\uZZZZ""#, Error::MalformedString)]
#[case::lone_high_surrogate(r#""\ud800""#, Error::MalformedString)]
#[case::high_surrogate_bad_low(r#""\ud800\u0041""#, Error::MalformedString)]
#[case::lone_low_surrogate(r#""\udc00""#, Error::MalformedString)]
#[case::unterminated(r#""abc"#, Error::UnterminatedString)]
#[case::truncated_unicode(r#""\u00"#, Error::UnterminatedString)]
#[case::number_shape("123", Error::NotAString)]
#[case::empty_span("", Error::NotAString)]
fn as_string_rejects(#[case] text: &str, #[case] expected: Error) {
    assert_eq!(parse(text).as_string().unwrap_err(), expected);
}

#[test]
fn shape_sniffs_check_the_first_character_only() {
    assert_eq!(parse("[1]").is_array(), Ok(true));
    assert_eq!(parse("{}").is_array(), Ok(false));
    assert_eq!(parse("{}").is_object(), Ok(true));
    assert_eq!(parse(r#""s""#).is_object(), Ok(false));
}

#[test]
fn empty_spans_are_an_error_for_every_coercion() {
    assert_eq!(parse("").is_array(), Err(Error::NotAnArray));
    assert_eq!(parse("").is_object(), Err(Error::NotAnObject));
    assert_eq!(parse("").as_string(), Err(Error::NotAString));
    assert_eq!(parse("").as_i32(), Err(Error::MalformedNumber));
    assert_eq!(parse("").as_u32(), Err(Error::MalformedNumber));
}
