//! Canonical numeric and text views of a [`FieldValue`].
//!
//! Rules that compare numbers work on `f64`; rules that inspect text work on
//! `str`. Conversions never fail on precision loss: a `u64` above 2^53 simply
//! rounds, like a native widening cast.

use std::borrow::Cow;

use crate::core::FieldValue;

/// A value could not be viewed as the kind a rule asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoerceError {
    /// Not an integer or float.
    #[error("expected a number, found {found}")]
    NotNumeric {
        /// Kind of the offending value.
        found: &'static str,
    },
    /// Not a string, byte sequence or character sequence.
    #[error("expected text, found {found}")]
    NotText {
        /// Kind of the offending value.
        found: &'static str,
    },
}

/// Views an integer or float value as `f64`.
///
/// # Examples
///
/// ```rust,ignore
/// use ruletag::{coerce::as_number, FieldValue};
///
/// assert_eq!(as_number(&FieldValue::Int(-4)), Ok(-4.0));
/// assert!(as_number(&FieldValue::Text("4")).is_err());
/// ```
pub fn as_number(value: &FieldValue<'_>) -> Result<f64, CoerceError> {
    match *value {
        FieldValue::Int(v) => Ok(v as f64),
        FieldValue::UInt(v) => Ok(v as f64),
        FieldValue::Float(v) => Ok(v),
        ref other => Err(CoerceError::NotNumeric {
            found: other.kind(),
        }),
    }
}

/// Views a string-like value as text.
///
/// Byte sequences are decoded as UTF-8, replacing invalid sequences; only
/// character sequences and non-UTF-8 bytes allocate.
pub fn as_text<'a>(value: &FieldValue<'a>) -> Result<Cow<'a, str>, CoerceError> {
    match *value {
        FieldValue::Text(v) => Ok(Cow::Borrowed(v)),
        FieldValue::Bytes(v) => Ok(String::from_utf8_lossy(v)),
        FieldValue::Chars(v) => Ok(Cow::Owned(v.iter().collect())),
        ref other => Err(CoerceError::NotText {
            found: other.kind(),
        }),
    }
}
