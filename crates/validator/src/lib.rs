//! # ruletag
//!
//! Declarative field validation driven by rule expressions.
//!
//! Each field of a record carries a short expression such as
//! `"MinLength:3, Alphanumeric"`. The engine parses it, looks every rule up in
//! a [`Registry`], runs them all, and aggregates the failures of the whole
//! record (embedded records included) into one [`ValidationError`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ruletag::prelude::*;
//!
//! #[derive(Record)]
//! struct Signup {
//!     #[validate("MinLength:3, Alphanumeric")]
//!     username: String,
//!     #[validate(rules = "Email", code = "E_EMAIL")]
//!     email: String,
//! }
//!
//! ruletag::init()?;
//! let signup = Signup { username: "al".into(), email: "nope".into() };
//! let err = ruletag::validate(&signup).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "the following errors occurred during validation: \
//!      Field 'username' is too short; it must be at least 3 characters long. \
//!      Field 'email' is not a valid email address."
//! );
//! ```
//!
//! ## Custom Rules
//!
//! Register a closure with [`register`], or write a rule function with the
//! [`rule!`] macro:
//!
//! ```rust,ignore
//! ruletag::rule! {
//!     pub lowercase("Lowercase") for text;
//!     rule(input) { !input.chars().any(char::is_uppercase) }
//!     error(input) { "contains uppercase characters" }
//! }
//!
//! ruletag::register("Lowercase", lowercase)?;
//! ```
//!
//! ## Built-in Rules
//!
//! See [`rules`] for the catalog installed by [`init`].

// Failure messages are owned strings; boxing ValidationError would only add
// an allocation to every failing run.
#![allow(clippy::result_large_err)]

pub mod coerce;
pub mod core;
pub mod engine;
mod macros;
pub mod prelude;
pub mod registry;
pub mod rules;

pub use crate::core::{
    AsFieldValue, Error, Failure, Field, FieldValue, Outcome, Record, ValidationContext,
    ValidationError,
};
pub use engine::{Validator, validate, validate_fields};
pub use registry::{Registry, RegistryError, Rule, init, register};

#[cfg(feature = "derive")]
pub use ruletag_macros::Record;
