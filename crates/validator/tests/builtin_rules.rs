//! Built-in rules exercised through the record walker.

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use ruletag::{Error, Field, FieldValue, Record, Registry, Validator};

/// A one-field record, so each case reads as `rules` + `value`.
struct Single<'a> {
    rules: &'a str,
    value: FieldValue<'a>,
}

impl Record for Single<'_> {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::from_value("data", self.value).with_rules(self.rules)]
    }
}

fn messages(rules: &str, value: FieldValue<'_>) -> Vec<String> {
    let registry = Registry::with_builtins();
    match Validator::with_registry(&registry).validate(&Single { rules, value }) {
        Ok(()) => Vec::new(),
        Err(Error::Invalid(err)) => err.messages().to_vec(),
        Err(other) => panic!("unexpected configuration error: {other}"),
    }
}

// ============================================================================
// PASSING VALUES
// ============================================================================

#[rstest]
#[case("NotEmpty", FieldValue::Text("x"))]
#[case("NotEmpty", FieldValue::Bytes(b"x"))]
#[case("NotZero", FieldValue::Int(-1))]
#[case("NotZero", FieldValue::Float(0.001))]
#[case("GreaterThan:50", FieldValue::Float(50.01))]
#[case("GreaterThan:50", FieldValue::UInt(12311))]
#[case("LessThan:10", FieldValue::Int(-3))]
#[case("Length:4", FieldValue::Text("test"))]
#[case("Length:0", FieldValue::Text(""))]
#[case("MinLength:2", FieldValue::Text("ab"))]
#[case("MaxLength:2", FieldValue::Text("ab"))]
#[case("Alpha", FieldValue::Text("abcXYZ"))]
#[case("Alphanumeric", FieldValue::Text("abc123"))]
#[case("Email", FieldValue::Text("someone@example.org"))]
#[case("URL", FieldValue::Text("https://example.com/a?b=c"))]
#[case("UUID", FieldValue::Text("f47ac10b-58cc-4372-a567-0e02b2c3d479"))]
#[case("UUID", FieldValue::Text("8563d95d-efb0-4e87-95d8-1d6c5debf298"))]
#[case("Regexp:/^[a-zA-Z]{3,5}[0-9]+$/", FieldValue::Text("aaa123456789"))]
fn builtin_rule_passes(#[case] rules: &str, #[case] value: FieldValue<'static>) {
    assert_eq!(messages(rules, value), Vec::<String>::new());
}

// ============================================================================
// FAILING VALUES
// ============================================================================

#[rstest]
#[case("NotEmpty", FieldValue::Text(""), "Field 'data' is empty")]
#[case("NotZero", FieldValue::Int(0), "Field 'data' is 0")]
#[case("GreaterThan:50", FieldValue::Int(50), "Field 'data' must be greater than 50")]
#[case("LessThan:10", FieldValue::Float(10.0), "Field 'data' must be less than 10")]
#[case("Length:3", FieldValue::Text("test"), "Field 'data' must be 3 characters long")]
#[case(
    "MinLength:2",
    FieldValue::Text("t"),
    "Field 'data' is too short; it must be at least 2 characters long"
)]
#[case(
    "MaxLength:2",
    FieldValue::Text("test"),
    "Field 'data' is too long; it must be at most 2 characters long"
)]
#[case("Alpha", FieldValue::Text("abc1"), "Field 'data' contains non-alphabetic characters")]
#[case(
    "Alphanumeric",
    FieldValue::Text("abc-1"),
    "Field 'data' contains non-alphanumeric characters"
)]
#[case("Email", FieldValue::Text("invalid"), "Field 'data' is not a valid email address")]
#[case(
    "UUID",
    FieldValue::Text("F47AC10B-58CC-4372-A567-0E02B2C3D479"),
    "Field 'data' is an invalid UUID"
)]
#[case(
    "UUID",
    FieldValue::Text("E55A815A-BA16-4FB9-AE01-644204CC433A"),
    "Field 'data' is an invalid UUID"
)]
#[case("URL", FieldValue::Text("http://example\\.com"), "Field 'data' has an invalid host")]
#[case(
    "Regexp:/^[a-zA-Z]{3,5}[0-9]+$/",
    FieldValue::Text("0aaa0"),
    "Field 'data' doesn't match regular expression /^[a-zA-Z]{3,5}[0-9]+$/"
)]
fn builtin_rule_fails(#[case] rules: &str, #[case] value: FieldValue<'static>, #[case] message: &str) {
    assert_eq!(messages(rules, value), vec![message.to_owned()]);
}

// ============================================================================
// COMBINED EXPRESSIONS
// ============================================================================

const LETTERS_THEN_DIGITS: &str = "MinLength:1,Regexp:/^[a-zA-Z]{3,5}[0-9]+$/,NotEmpty";

#[rstest]
#[case("aaaaa0", &[])]
#[case("aaa123456789", &[])]
#[case(
    "",
    &[
        "Field 'data' is too short; it must be at least 1 characters long",
        "Field 'data' doesn't match regular expression /^[a-zA-Z]{3,5}[0-9]+$/",
        "Field 'data' is empty",
    ]
)]
#[case(
    "0aaa0",
    &["Field 'data' doesn't match regular expression /^[a-zA-Z]{3,5}[0-9]+$/"]
)]
fn regexp_with_comma_combines_with_other_rules(#[case] text: &str, #[case] expected: &[&str]) {
    assert_eq!(messages(LETTERS_THEN_DIGITS, FieldValue::Text(text)), expected);
}

// ============================================================================
// OUT-OF-DOMAIN VALUES
// ============================================================================

#[rstest]
#[case("NotEmpty")]
#[case("Length:1")]
#[case("MinLength:1")]
#[case("MaxLength:1")]
#[case("Alpha")]
#[case("Alphanumeric")]
#[case("Email")]
#[case("URL")]
#[case("UUID")]
#[case("Regexp:/.*/")]
fn text_rules_reject_numbers(#[case] rules: &str) {
    assert_eq!(
        messages(rules, FieldValue::Float(2.333)),
        vec!["Field 'data' is not a string".to_owned()]
    );
}

#[rstest]
#[case("NotZero")]
#[case("GreaterThan:1")]
#[case("LessThan:1")]
fn numeric_rules_reject_text(#[case] rules: &str) {
    assert_eq!(
        messages(rules, FieldValue::Text("a")),
        vec!["Field 'data' is not numeric".to_owned()]
    );
}

#[test]
fn unsupported_field_type_fails_like_a_mismatch() {
    let value = FieldValue::other::<std::collections::HashMap<String, String>>();
    assert_eq!(
        messages("NotEmpty", value),
        vec!["Field 'data' is not a string".to_owned()]
    );
}

// ============================================================================
// TIMESTAMPS
// ============================================================================

#[test]
fn not_zero_time() {
    let set = Utc.with_ymd_and_hms(2015, 10, 21, 16, 29, 0).unwrap();
    assert!(messages("NotZeroTime", FieldValue::Timestamp(set)).is_empty());
    assert_eq!(
        messages("NotZeroTime", FieldValue::Timestamp(DateTime::<Utc>::default())),
        vec!["Field 'data' has a zero value".to_owned()]
    );
    assert_eq!(
        messages("NotZeroTime", FieldValue::Text("2015-10-21")),
        vec!["Field 'data' is not a Time type".to_owned()]
    );
}

// ============================================================================
// MALFORMED ARGUMENTS
// ============================================================================

#[rstest]
#[case("MinLength:abc", "Field 'data' has an invalid argument 'abc' for MinLength")]
#[case("GreaterThan:", "Field 'data' has an invalid argument '' for GreaterThan")]
#[case("MaxLength", "Field 'data' has no argument for MaxLength; MaxLength requires one")]
fn malformed_argument_is_a_field_failure(#[case] rules: &str, #[case] message: &str) {
    let value = if rules.starts_with("GreaterThan") {
        FieldValue::Int(1)
    } else {
        FieldValue::Text("abc")
    };
    assert_eq!(messages(rules, value), vec![message.to_owned()]);
}
