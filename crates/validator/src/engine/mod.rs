//! The validation engine: rule-expression lexer, per-field dispatch and the
//! record walker.
//!
//! Most callers only need [`Validator`] or the [`validate`] /
//! [`validate_fields`] entry points. [`tag::parse`] is public so tooling can
//! inspect expressions without a registry.

mod dispatch;
pub mod tag;
mod walker;

pub use dispatch::dispatch;
pub use tag::{ParsedTag, RuleInvocation};
pub use walker::{Validator, validate, validate_fields};
