//! Core types shared by the engine and the rules.
//!
//! - **Values**: [`FieldValue`], [`AsFieldValue`]
//! - **Records**: [`Record`], [`Field`]
//! - **Rule contract**: [`ValidationContext`], [`Outcome`], [`Failure`]
//! - **Errors**: [`ValidationError`], [`Error`]

pub mod context;
pub mod error;
pub mod record;
pub mod value;

pub use context::{Failure, Outcome, ValidationContext};
pub use error::{Error, ValidationError};
pub use record::{Field, Record};
pub use value::{AsFieldValue, FieldValue};
