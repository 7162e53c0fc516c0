//! # ruletag-macros
//!
//! `#[derive(Record)]` for ruletag. Re-exported by `ruletag` behind its
//! default `derive` feature; depend on `ruletag`, not on this crate.
//!
//! ```rust,ignore
//! use ruletag::Record;
//!
//! #[derive(Record)]
//! struct Signup {
//!     #[validate("MinLength:3, Alphanumeric")]
//!     username: String,
//!
//!     #[validate(rules = "Email", code = "E_EMAIL")]
//!     email: String,
//!
//!     #[validate(embedded)]
//!     address: Address,
//!
//!     // no attribute: never validated
//!     nickname: String,
//! }
//! ```

use proc_macro::TokenStream;

mod record;

// ============================================================================
// RECORD DERIVE
// ============================================================================

/// Derives `ruletag::Record` for a struct with named fields.
///
/// Only fields carrying a `#[validate(...)]` attribute are described, in
/// declaration order.
///
/// # Field attributes
///
/// - `#[validate("Rule, Rule:arg")]` - rule expression
/// - `#[validate(rules = "...")]` - same, in key-value form
/// - `#[validate(rules = "...", code = "...")]` - rule expression plus an
///   error code reported with the field's failures
/// - `#[validate(embedded)]` - the field is itself a `Record`; it is
///   validated recursively and its failures merged into the parent's
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
