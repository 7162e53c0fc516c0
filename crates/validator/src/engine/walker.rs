//! The record walker.

use indexmap::IndexSet;
use tracing::debug;

use super::dispatch::dispatch;
use crate::core::{Error, Record, ValidationError};
use crate::registry::{self, Registry};

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates records against a registry.
///
/// A `Validator` is plain configuration: which registry resolves rule names
/// and, optionally, which of the record's own fields to check. It holds no
/// state between runs, so validating the same record twice yields the same
/// result.
///
/// # Examples
///
/// ```rust,ignore
/// use ruletag::{Registry, Validator};
///
/// let registry = Registry::with_builtins();
/// let result = Validator::with_registry(&registry)
///     .only(["email"])
///     .validate(&signup);
/// ```
#[derive(Debug, Clone)]
pub struct Validator<'r> {
    registry: &'r Registry,
    only: Option<IndexSet<String>>,
}

impl Validator<'static> {
    /// A validator over the process-wide registry.
    ///
    /// Call [`crate::init`] first so the built-in rules are available.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(registry::global())
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Validator<'r> {
    /// A validator over `registry`.
    #[must_use]
    pub fn with_registry(registry: &'r Registry) -> Self {
        Self {
            registry,
            only: None,
        }
    }

    /// Restricts validation to the named fields of the top-level record.
    ///
    /// Embedded records are still validated in full.
    #[must_use = "builder methods must be chained or built"]
    pub fn only<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// The registry rule names are resolved against.
    #[must_use]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Validates `record`.
    ///
    /// # Errors
    ///
    /// - [`Error::Invalid`] with every failure, when at least one rule
    ///   rejected a field.
    /// - [`Error::UnknownRule`] when an expression names an unregistered
    ///   rule. Failures collected before that point are dropped.
    pub fn validate<R>(&self, record: &R) -> Result<(), Error>
    where
        R: Record + ?Sized,
    {
        let errors = self.walk(record, self.only.as_ref())?;
        debug!(failures = errors.len(), "record validated");
        errors.into_result().map_err(Error::from)
    }

    fn walk<R>(&self, record: &R, only: Option<&IndexSet<String>>) -> Result<ValidationError, Error>
    where
        R: Record + ?Sized,
    {
        let fields = record.fields();
        debug!(fields = fields.len(), filtered = only.is_some(), "walking record");

        let mut errors = ValidationError::new();
        for field in &fields {
            if let Some(inner) = field.value().as_record().filter(|_| field.is_embedded()) {
                errors.merge(self.walk(inner, None)?);
            }

            if only.is_some_and(|names| !names.contains(field.name())) {
                continue;
            }

            dispatch(self.registry, field, &mut errors)?;
        }
        Ok(errors)
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Validates every field of `record` against the process-wide registry.
///
/// # Errors
///
/// See [`Validator::validate`].
pub fn validate<R>(record: &R) -> Result<(), Error>
where
    R: Record + ?Sized,
{
    Validator::new().validate(record)
}

/// Validates only the named top-level fields of `record` against the
/// process-wide registry.
///
/// # Errors
///
/// See [`Validator::validate`].
pub fn validate_fields<R>(record: &R, fields: &[&str]) -> Result<(), Error>
where
    R: Record + ?Sized,
{
    Validator::new().only(fields.iter().copied()).validate(record)
}
