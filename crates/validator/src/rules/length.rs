//! Text length rules: `Length:N`, `MinLength:N`, `MaxLength:N`.
//!
//! Length is measured in Unicode scalar values, so `"héllo"` has length 5.

/// Length of `text` in Unicode scalar values.
#[inline]
fn char_len(text: &str) -> usize {
    text.chars().count()
}

crate::rule! {
    /// Passes when the text has exactly `N` characters.
    pub length("Length") for text, arg(expected: usize);
    rule(input) { char_len(&input) == expected }
    error(input) { format!("must be {expected} characters long") }
}

crate::rule! {
    /// Passes when the text has at least `N` characters.
    pub min_length("MinLength") for text, arg(min: usize);
    rule(input) { char_len(&input) >= min }
    error(input) { format!("is too short; it must be at least {min} characters long") }
}

crate::rule! {
    /// Passes when the text has at most `N` characters.
    pub max_length("MaxLength") for text, arg(max: usize);
    rule(input) { char_len(&input) <= max }
    error(input) { format!("is too long; it must be at most {max} characters long") }
}
