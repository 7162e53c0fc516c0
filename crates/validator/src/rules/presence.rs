//! Presence rules: `NotEmpty`, `NotZero`, `NotZeroTime`.

use chrono::{DateTime, Utc};

use crate::core::{Failure, FieldValue, Outcome, ValidationContext};

crate::rule! {
    /// Passes when the text is not empty. Whitespace counts as content.
    pub not_empty("NotEmpty") for text;
    rule(input) { !input.is_empty() }
    error(input) { "is empty" }
}

crate::rule! {
    /// Passes when the number is not exactly zero (either sign passes).
    pub not_zero("NotZero") for number;
    rule(input) { input != 0.0 }
    error(input) { "is 0" }
}

/// The zero timestamp: the Unix epoch, which is also
/// `DateTime::<Utc>::default()`.
pub const ZERO_TIME: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// Passes when the value is a timestamp other than [`ZERO_TIME`].
pub fn not_zero_time(ctx: &ValidationContext<'_>) -> Outcome {
    match ctx.value() {
        FieldValue::Timestamp(time) if *time == ZERO_TIME => Err(Failure::new("has a zero value")),
        FieldValue::Timestamp(_) => Ok(()),
        _ => Err(Failure::new("is not a Time type")),
    }
}
