//! Error types for record validation.
//!
//! Two outcomes can end a failed validation run:
//!
//! - [`ValidationError`]: one or more fields failed their rules. Expected,
//!   aggregated across the whole record (and its embedded records).
//! - [`Error::UnknownRule`]: a rule expression names a rule that is not
//!   registered. A configuration defect; it aborts the walk and discards any
//!   failures collected so far.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The aggregated failures of one record.
///
/// Failures are kept three ways:
///
/// - a flat, ordered list of human-readable messages;
/// - the set of field names that failed;
/// - a field → rule → messages map for programmatic inspection.
///
/// # Examples
///
/// ```rust,ignore
/// use ruletag::ValidationError;
///
/// let mut error = ValidationError::new();
/// error.add("name", "NotEmpty", "Field 'name' is empty");
///
/// assert!(error.contains_field("name"));
/// assert_eq!(error.rule_messages("name", "NotEmpty"), ["Field 'name' is empty"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    messages: Vec<String>,
    fields: IndexSet<String>,
    failures: IndexMap<String, IndexMap<String, Vec<String>>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "IndexMap::is_empty"))]
    codes: IndexMap<String, String>,
}

impl ValidationError {
    /// Creates an empty error.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one failed rule for a field.
    pub fn add(
        &mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) {
        let field = field.into();
        let message = message.into();

        self.messages.push(message.clone());
        self.failures
            .entry(field.clone())
            .or_default()
            .entry(rule.into())
            .or_default()
            .push(message);
        self.fields.insert(field);
    }

    /// Associates a caller-supplied error code with a failed field.
    pub fn set_code(&mut self, field: impl Into<String>, code: impl Into<String>) {
        self.codes.insert(field.into(), code.into());
    }

    /// Merges another error into this one.
    ///
    /// Messages are appended, field sets unioned and per-rule message lists
    /// concatenated.
    pub fn merge(&mut self, other: ValidationError) {
        self.messages.extend(other.messages);
        self.fields.extend(other.fields);
        for (field, rules) in other.failures {
            let entry = self.failures.entry(field).or_default();
            for (rule, messages) in rules {
                entry.entry(rule).or_default().extend(messages);
            }
        }
        for (field, code) in other.codes {
            self.codes.entry(field).or_insert(code);
        }
    }

    /// Returns true if no failure has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of recorded failure messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// All failure messages in the order they were produced.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Names of the fields that failed.
    #[must_use]
    pub fn fields(&self) -> &IndexSet<String> {
        &self.fields
    }

    /// Returns true if `field` failed at least one rule.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    /// The field → rule → messages map.
    #[must_use]
    pub fn failures(&self) -> &IndexMap<String, IndexMap<String, Vec<String>>> {
        &self.failures
    }

    /// Messages produced by `rule` on `field`; empty if it did not fail.
    #[must_use]
    pub fn rule_messages(&self, field: &str, rule: &str) -> &[String] {
        self.failures
            .get(field)
            .and_then(|rules| rules.get(rule))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The error code attached to a failed field, if the field carried one.
    #[must_use]
    pub fn code(&self, field: &str) -> Option<&str> {
        self.codes.get(field).map(String::as_str)
    }

    /// `Ok(())` when empty, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the following errors occurred during validation:")?;
        for message in &self.messages {
            write!(f, " {message}.")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TOP-LEVEL ERROR
// ============================================================================

/// Everything that can end a validation run unsuccessfully.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// One or more fields failed their rules.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A rule expression references a rule that was never registered.
    #[error("no validation rule named '{rule}' is registered (used by field '{field}')")]
    UnknownRule {
        /// The unknown rule name.
        rule: String,
        /// The field whose expression referenced it.
        field: String,
    },
}

impl Error {
    /// The aggregated field failures, if this is a validation failure.
    #[must_use]
    pub fn as_invalid(&self) -> Option<&ValidationError> {
        match self {
            Error::Invalid(error) => Some(error),
            Error::UnknownRule { .. } => None,
        }
    }

    /// Returns true for configuration errors that abort a walk.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::UnknownRule { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================
