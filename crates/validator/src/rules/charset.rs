//! Character-class rules: `Alpha`, `Alphanumeric`.
//!
//! Both accept ASCII only and pass on empty text.

crate::rule! {
    /// Passes when every character is an ASCII letter.
    pub alpha("Alpha") for text;
    rule(input) { input.chars().all(|c| c.is_ascii_alphabetic()) }
    error(input) { "contains non-alphabetic characters" }
}

crate::rule! {
    /// Passes when every character is an ASCII letter or digit.
    pub alphanumeric("Alphanumeric") for text;
    rule(input) { input.chars().all(|c| c.is_ascii_alphanumeric()) }
    error(input) { "contains non-alphanumeric characters" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Failure, FieldValue, ValidationContext};
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("abcXYZ", true)]
    #[case("abc1", false)]
    #[case("ab c", false)]
    #[case("h\u{e9}llo", false)]
    fn test_alpha(#[case] text: &str, #[case] passes: bool) {
        let value = FieldValue::Text(text);
        let outcome = alpha(&ValidationContext::new("data", &value, &[]));
        assert_eq!(outcome.is_ok(), passes, "{text:?}");
    }

    #[rstest]
    #[case("", true)]
    #[case("abc123", true)]
    #[case("ABC", true)]
    #[case("abc-123", false)]
    #[case("abc_", false)]
    fn test_alphanumeric(#[case] text: &str, #[case] passes: bool) {
        let value = FieldValue::Text(text);
        let outcome = alphanumeric(&ValidationContext::new("data", &value, &[]));
        assert_eq!(outcome.is_ok(), passes, "{text:?}");
    }

    #[test]
    fn test_failure_reasons() {
        let value = FieldValue::Text("a1!");
        assert_eq!(
            alpha(&ValidationContext::new("data", &value, &[])),
            Err(Failure::new("contains non-alphabetic characters"))
        );
        assert_eq!(
            alphanumeric(&ValidationContext::new("data", &value, &[])),
            Err(Failure::new("contains non-alphanumeric characters"))
        );
    }

    #[test]
    fn test_non_text_value() {
        let value = FieldValue::Bool(true);
        assert_eq!(
            alpha(&ValidationContext::new("data", &value, &[])),
            Err(Failure::not_text())
        );
    }
}
