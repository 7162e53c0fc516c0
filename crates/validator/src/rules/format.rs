//! Well-known text formats: `Email`, `URL`, `UUID`.

use std::sync::LazyLock;

use regex::Regex;

use crate::coerce::as_text;
use crate::core::{Failure, Outcome, ValidationContext};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[A-Z0-9!#$%&'*+/=?^_{|}~-]+(?:\.[A-Z0-9!#$%&'*+/=?^_{|}~-]+)*@(?:[A-Z0-9](?:[A-Z0-9-]*[A-Z0-9])?\.)+[A-Z0-9](?:[A-Z0-9-]*[A-Z0-9])?",
    )
    .expect("email pattern compiles")
});

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:urn:uuid:)?\{?[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}\}?$",
    )
    .expect("uuid pattern compiles")
});

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Passes when the text contains a `local@domain.tld` address.
    ///
    /// Case-insensitive and unanchored: `John <john@example.com>` passes.
    /// The domain needs at least one dot.
    pub email("Email") for text;
    rule(input) { EMAIL_REGEX.is_match(&input) }
    error(input) { "is not a valid email address" }
}

// ============================================================================
// UUID
// ============================================================================

crate::rule! {
    /// Passes on a lowercase hyphenated UUID of version 1 through 5.
    ///
    /// An `urn:uuid:` prefix and surrounding braces are tolerated.
    pub uuid("UUID") for text;
    rule(input) { UUID_REGEX.is_match(&input) }
    error(input) { "is an invalid UUID" }
}

// ============================================================================
// URL
// ============================================================================

/// Passes on an absolute `http` or `https` URL with a non-empty host.
///
/// The host is checked as written. The scheme must be followed by `//`, and
/// the authority after it must not contain a backslash: `http://example\.com`
/// and `http:example.com` both fail even though the WHATWG parser finds a
/// host in each.
pub fn url(ctx: &ValidationContext<'_>) -> Outcome {
    let text = as_text(ctx.value()).map_err(|_| Failure::not_text())?;
    let parsed = url::Url::parse(&text).map_err(|_| Failure::new("is not a valid URL"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Failure::new(
            "has an invalid scheme; the scheme must be 'http' or 'https'",
        ));
    }

    let host_present = parsed.host_str().is_some_and(|host| !host.is_empty());
    let authority_clean = written_authority(&text, parsed.scheme())
        .is_some_and(|auth| !auth.is_empty() && !auth.contains('\\'));
    if host_present && authority_clean {
        Ok(())
    } else {
        Err(Failure::new("has an invalid host"))
    }
}

/// The authority exactly as written: the text right after `scheme://` up to
/// the first `/`, `?` or `#`. `None` when the scheme is not followed by `//`.
fn written_authority<'a>(text: &'a str, scheme: &str) -> Option<&'a str> {
    let text = text.trim_start_matches(|c: char| c <= ' ');
    let rest = text.get(scheme.len() + 1..)?.strip_prefix("//")?;
    Some(rest.find(['/', '?', '#']).map_or(rest, |end| &rest[..end]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;
    use rstest::rstest;

    fn run(rule: fn(&ValidationContext<'_>) -> Outcome, text: &str) -> Outcome {
        let value = FieldValue::Text(text);
        rule(&ValidationContext::new("data", &value, &[]))
    }

    #[rstest]
    #[case("user@example.com")]
    #[case("First.Last+tag@sub.example.co.uk")]
    #[case("a@b.io")]
    #[case("user@example.com trailing")]
    #[case("John <john@example.com>")]
    #[case("mailto:john@example.com")]
    fn test_valid_email(#[case] text: &str) {
        assert!(run(email, text).is_ok());
    }

    #[rstest]
    #[case("invalid")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@localhost")]
    #[case("user @example.com")]
    fn test_invalid_email(#[case] text: &str) {
        assert_eq!(
            run(email, text),
            Err(Failure::new("is not a valid email address"))
        );
    }

    #[rstest]
    #[case("f47ac10b-58cc-4372-a567-0e02b2c3d479")]
    #[case("urn:uuid:f47ac10b-58cc-4372-a567-0e02b2c3d479")]
    #[case("{f47ac10b-58cc-1372-a567-0e02b2c3d479}")]
    fn test_valid_uuid(#[case] text: &str) {
        assert!(run(uuid, text).is_ok());
    }

    #[rstest]
    #[case("F47AC10B-58CC-4372-A567-0E02B2C3D479")]
    #[case("f47ac10b-58cc-6372-a567-0e02b2c3d479")]
    #[case("f47ac10b58cc4372a5670e02b2c3d479")]
    #[case("g47ac10b-58cc-4372-a567-0e02b2c3d479")]
    #[case("")]
    fn test_invalid_uuid(#[case] text: &str) {
        assert_eq!(run(uuid, text), Err(Failure::new("is an invalid UUID")));
    }

    #[rstest]
    #[case("http://example.com")]
    #[case("https://example.com/path?q=1#top")]
    #[case("HTTPS://Example.com")]
    #[case("http://user:pw@example.com:8080")]
    fn test_valid_url(#[case] text: &str) {
        assert!(run(url, text).is_ok());
    }

    #[test]
    fn test_url_scheme() {
        let err = run(url, "ftp://example.com").unwrap_err();
        assert!(err.reason().starts_with("has an invalid scheme"));
        assert!(run(url, "mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_url_host() {
        assert_eq!(
            run(url, "http://example\\.com"),
            Err(Failure::new("has an invalid host"))
        );
    }

    #[rstest]
    #[case("http:example.com/path")]
    #[case("http:example.com/?next=http://x")]
    #[case("http:\\\\evil.com?x=://")]
    #[case("http:/\\evil.com/?a=://b")]
    #[case("https:///example.com")]
    fn test_url_without_written_authority(#[case] text: &str) {
        assert_eq!(run(url, text), Err(Failure::new("has an invalid host")));
    }

    #[test]
    fn test_url_unparsable() {
        assert_eq!(run(url, "not a url"), Err(Failure::new("is not a valid URL")));
        assert_eq!(run(url, "http://"), Err(Failure::new("is not a valid URL")));
    }

    #[test]
    fn test_written_authority() {
        assert_eq!(written_authority("http://a.b/c", "http"), Some("a.b"));
        assert_eq!(written_authority("HTTP://a.b?x", "http"), Some("a.b"));
        assert_eq!(written_authority("  http://a.b", "http"), Some("a.b"));
        assert_eq!(written_authority("http://a\\b/c", "http"), Some("a\\b"));
        assert_eq!(written_authority("http:a.b", "http"), None);
        assert_eq!(written_authority("http:a.b/?u=http://c", "http"), None);
    }

    #[test]
    fn test_non_text_value() {
        let value = FieldValue::Int(3);
        let ctx = ValidationContext::new("data", &value, &[]);
        assert_eq!(url(&ctx), Err(Failure::not_text()));
        assert_eq!(email(&ctx), Err(Failure::not_text()));
        assert_eq!(uuid(&ctx), Err(Failure::not_text()));
    }
}
