//! Prelude module for convenient imports.
//!
//! Provides a single `use ruletag::prelude::*;` import that brings in the
//! record contract, the rule contract, the error types and the entry points.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ruletag::prelude::*;
//!
//! fn check(record: &impl Record) -> Result<(), Error> {
//!     Validator::new().only(["email"]).validate(record)
//! }
//! ```

// ============================================================================
// RECORDS
// ============================================================================

pub use crate::core::{AsFieldValue, Field, FieldValue, Record};

// ============================================================================
// RULES
// ============================================================================

pub use crate::core::{Failure, Outcome, ValidationContext};
pub use crate::registry::{Registry, RegistryError};

// ============================================================================
// ERRORS
// ============================================================================

pub use crate::core::{Error, ValidationError};

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::engine::{Validator, validate, validate_fields};
pub use crate::registry::{init, register};

// ============================================================================
// DERIVE-GATED: #[derive(Record)]
// ============================================================================

#[cfg(feature = "derive")]
pub use ruletag_macros::Record;
