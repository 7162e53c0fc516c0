//! Field values as seen by rules.
//!
//! A record hands its field values to the engine as a [`FieldValue`], a small
//! borrowed sum type. Rules never inspect host types directly; they match on
//! the variant (usually through [`crate::coerce`]).
//!
//! Host types opt in through [`AsFieldValue`]. The crate implements it for the
//! string-like, numeric, boolean and timestamp types a record usually carries.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};

use super::record::Record;

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A borrowed, dynamically typed field value.
///
/// Text-like values keep their original shape (`Text`, `Bytes`, `Chars`) so
/// that coercion stays lossless until a rule actually asks for text.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// UTF-8 text.
    Text(&'a str),
    /// A byte sequence, read as (lossy) UTF-8 text by text rules.
    Bytes(&'a [u8]),
    /// A character sequence.
    Chars(&'a [char]),
    /// Any signed integer, widened to `i64`.
    Int(i64),
    /// Any unsigned integer, widened to `u64`.
    UInt(u64),
    /// Any float, widened to `f64`.
    Float(f64),
    /// A boolean. Neither numeric nor text.
    Bool(bool),
    /// A point in time.
    Timestamp(DateTime<Utc>),
    /// A nested record.
    Record(&'a dyn Record),
    /// A value the engine has no interpretation for; carries its type name.
    Other(&'static str),
}

impl<'a> FieldValue<'a> {
    /// Builds an [`FieldValue::Other`] carrying the type name of `T`.
    #[must_use]
    pub fn other<T: ?Sized>() -> Self {
        FieldValue::Other(std::any::type_name::<T>())
    }

    /// Short human-readable name of the value kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "string",
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Chars(_) => "chars",
            FieldValue::Int(_) => "integer",
            FieldValue::UInt(_) => "unsigned integer",
            FieldValue::Float(_) => "float",
            FieldValue::Bool(_) => "bool",
            FieldValue::Timestamp(_) => "timestamp",
            FieldValue::Record(_) => "record",
            FieldValue::Other(name) => name,
        }
    }

    /// Returns the nested record, if this value is one.
    #[must_use]
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            FieldValue::Record(record) => Some(*record),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(v) => f.debug_tuple("Text").field(v).finish(),
            FieldValue::Bytes(v) => f.debug_tuple("Bytes").field(v).finish(),
            FieldValue::Chars(v) => f.debug_tuple("Chars").field(v).finish(),
            FieldValue::Int(v) => f.debug_tuple("Int").field(v).finish(),
            FieldValue::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            FieldValue::Float(v) => f.debug_tuple("Float").field(v).finish(),
            FieldValue::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            FieldValue::Timestamp(v) => f.debug_tuple("Timestamp").field(v).finish(),
            FieldValue::Record(_) => f.write_str("Record(..)"),
            FieldValue::Other(name) => f.debug_tuple("Other").field(name).finish(),
        }
    }
}

// ============================================================================
// CONVERSION TRAIT
// ============================================================================

/// Conversion of a host value into a [`FieldValue`].
///
/// `#[derive(Record)]` calls this for every field carrying a rule expression,
/// so a field type used with rules must implement it.
///
/// # Examples
///
/// ```rust,ignore
/// use ruletag::{AsFieldValue, FieldValue};
///
/// struct Cents(u32);
///
/// impl AsFieldValue for Cents {
///     fn field_value(&self) -> FieldValue<'_> {
///         FieldValue::UInt(u64::from(self.0))
///     }
/// }
/// ```
pub trait AsFieldValue {
    /// Borrows `self` as a field value.
    fn field_value(&self) -> FieldValue<'_>;
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    fn field_value(&self) -> FieldValue<'_> {
        match self {
            Some(inner) => inner.field_value(),
            None => FieldValue::Other("Option::None"),
        }
    }
}

impl AsFieldValue for FieldValue<'_> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        *self
    }
}

// ── text ────────────────────────────────────────────────────────────────────

impl AsFieldValue for str {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for String {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }
}

impl AsFieldValue for Box<str> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for Cow<'_, str> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_ref())
    }
}

impl AsFieldValue for [u8] {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Bytes(self)
    }
}

impl AsFieldValue for Vec<u8> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Bytes(self.as_slice())
    }
}

impl AsFieldValue for [char] {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Chars(self)
    }
}

impl AsFieldValue for Vec<char> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Chars(self.as_slice())
    }
}

// A single char is neither text nor a number to the rules.
impl AsFieldValue for char {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Other("char")
    }
}

// ── numbers ─────────────────────────────────────────────────────────────────

macro_rules! signed_field_value {
    ($($ty:ty),+) => {$(
        impl AsFieldValue for $ty {
            #[inline]
            fn field_value(&self) -> FieldValue<'_> {
                FieldValue::Int(i64::from(*self))
            }
        }
    )+};
}

macro_rules! unsigned_field_value {
    ($($ty:ty),+) => {$(
        impl AsFieldValue for $ty {
            #[inline]
            fn field_value(&self) -> FieldValue<'_> {
                FieldValue::UInt(u64::from(*self))
            }
        }
    )+};
}

signed_field_value!(i8, i16, i32, i64);
unsigned_field_value!(u8, u16, u32, u64);

// Pointer-sized integers are at most 64 bits on every supported target.
impl AsFieldValue for isize {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self as i64)
    }
}

impl AsFieldValue for usize {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::UInt(*self as u64)
    }
}

impl AsFieldValue for i128 {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self as f64)
    }
}

impl AsFieldValue for u128 {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self as f64)
    }
}

impl AsFieldValue for f32 {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl AsFieldValue for f64 {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl AsFieldValue for bool {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

// ── time ────────────────────────────────────────────────────────────────────

impl AsFieldValue for DateTime<Utc> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Timestamp(*self)
    }
}

impl AsFieldValue for DateTime<FixedOffset> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Timestamp(self.with_timezone(&Utc))
    }
}

// ============================================================================
// TESTS
// ============================================================================
