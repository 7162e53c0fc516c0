//! Record introspection.
//!
//! The engine never reflects over host types. A record describes itself by
//! returning an ordered list of [`Field`] descriptors, either by hand or via
//! `#[derive(Record)]`.

use std::borrow::Cow;

use super::value::{AsFieldValue, FieldValue};

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// One field of a record, as handed to the walker.
///
/// # Examples
///
/// ```rust,ignore
/// use ruletag::{Field, Record};
///
/// struct Login { user: String, pin: u16 }
///
/// impl Record for Login {
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("user", &self.user).with_rules("NotEmpty, MaxLength:32"),
///             Field::new("pin", &self.pin).with_rules("NotZero"),
///         ]
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Field<'a> {
    name: Cow<'a, str>,
    value: FieldValue<'a>,
    rules: Option<&'a str>,
    embedded: bool,
    code: Option<&'a str>,
}

impl<'a> Field<'a> {
    /// Creates a plain field without a rule expression.
    pub fn new<V>(name: impl Into<Cow<'a, str>>, value: &'a V) -> Self
    where
        V: AsFieldValue + ?Sized,
    {
        Self::from_value(name, value.field_value())
    }

    /// Creates a plain field from an already converted value.
    pub fn from_value(name: impl Into<Cow<'a, str>>, value: FieldValue<'a>) -> Self {
        Self {
            name: name.into(),
            value,
            rules: None,
            embedded: false,
            code: None,
        }
    }

    /// Creates an embedded field. Embedded records are always validated
    /// recursively and their failures merged into the parent's result.
    pub fn embedded(name: impl Into<Cow<'a, str>>, record: &'a dyn Record) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Record(record),
            rules: None,
            embedded: true,
            code: None,
        }
    }

    /// Attaches a rule expression such as `"MinLength:2, NotEmpty"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rules(mut self, rules: &'a str) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Attaches a caller-supplied error code, passed to every rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: &'a str) -> Self {
        self.code = Some(code);
        self
    }

    /// Field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field value.
    #[must_use]
    pub fn value(&self) -> &FieldValue<'a> {
        &self.value
    }

    /// The rule expression, if any. An empty expression counts as absent.
    #[must_use]
    pub fn rules(&self) -> Option<&'a str> {
        self.rules.filter(|rules| !rules.is_empty())
    }

    /// Whether the field is an embedded record.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Caller-supplied error code.
    #[must_use]
    pub fn code(&self) -> Option<&'a str> {
        self.code
    }
}

// ============================================================================
// RECORD TRAIT
// ============================================================================

/// A value whose fields can be validated.
///
/// Implementations must return fields in declaration order; the walker
/// reports failures in that order.
pub trait Record {
    /// Ordered field descriptors for this record.
    fn fields(&self) -> Vec<Field<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}
