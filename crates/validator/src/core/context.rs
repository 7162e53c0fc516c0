//! The datum a rule receives, and what it answers.

use std::borrow::Cow;
use std::fmt;

use super::value::FieldValue;

// ============================================================================
// VALIDATION CONTEXT
// ============================================================================

/// Everything a rule needs to judge one field.
///
/// Built fresh by the dispatch engine for every rule invocation and dropped
/// once the rule returns. Arguments are the raw text following the `:` in the
/// rule expression; rules parse them themselves.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    field: &'a str,
    value: &'a FieldValue<'a>,
    args: &'a [&'a str],
    code: Option<&'a str>,
}

impl<'a> ValidationContext<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(field: &'a str, value: &'a FieldValue<'a>, args: &'a [&'a str]) -> Self {
        Self {
            field,
            value,
            args,
            code: None,
        }
    }

    /// Attaches the caller-supplied error code of the field.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: Option<&'a str>) -> Self {
        self.code = code;
        self
    }

    /// Name of the field under validation.
    #[must_use]
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// Value of the field under validation.
    #[must_use]
    pub fn value(&self) -> &'a FieldValue<'a> {
        self.value
    }

    /// All arguments, in order.
    #[must_use]
    pub fn args(&self) -> &'a [&'a str] {
        self.args
    }

    /// The argument at `index`, if present.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    /// Caller-supplied error code of the field.
    #[must_use]
    pub fn code(&self) -> Option<&'a str> {
        self.code
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// A rule's verdict: `Ok(())` passes, `Err(Failure)` fails.
pub type Outcome = Result<(), Failure>;

/// Why a rule rejected a value.
///
/// The reason is a sentence fragment completing `Field '<name>' ...`, e.g.
/// `"is empty"` or `"must be greater than 50"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    reason: Cow<'static, str>,
}

impl Failure {
    /// Creates a failure with the given reason.
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The value is not text.
    #[must_use]
    pub fn not_text() -> Self {
        Self::new("is not a string")
    }

    /// The value is not numeric.
    #[must_use]
    pub fn not_numeric() -> Self {
        Self::new("is not numeric")
    }

    /// The rule needs an argument but none was written.
    pub fn missing_argument(rule: &str) -> Self {
        Self::new(format!("has no argument for {rule}; {rule} requires one"))
    }

    /// The argument could not be interpreted by the rule.
    pub fn invalid_argument(rule: &str, argument: &str) -> Self {
        Self::new(format!("has an invalid argument '{argument}' for {rule}"))
    }

    /// The reason text.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Renders the full message for `field`.
    #[must_use]
    pub fn message_for(&self, field: &str) -> String {
        format!("Field '{field}' {}", self.reason)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}
