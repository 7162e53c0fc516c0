//! Runs the rules of one field.

use tracing::{trace, warn};

use super::tag;
use crate::core::{Error, Field, ValidationContext, ValidationError};
use crate::registry::Registry;

/// Runs every rule in the field's expression, collecting failures into
/// `errors`.
///
/// All rules run even after one fails. A name missing from `registry`
/// aborts with [`Error::UnknownRule`]; failures already pushed for this
/// field stay in `errors` and are discarded by the caller.
///
/// Returns whether any rule failed.
pub fn dispatch(
    registry: &Registry,
    field: &Field<'_>,
    errors: &mut ValidationError,
) -> Result<bool, Error> {
    let Some(expression) = field.rules() else {
        return Ok(false);
    };

    let name = field.name();
    let mut failed = false;

    for invocation in &tag::parse(expression) {
        let rule = registry.lookup(invocation.name()).map_err(|_| {
            warn!(field = name, rule = invocation.name(), "unknown validation rule");
            Error::UnknownRule {
                rule: invocation.name().to_owned(),
                field: name.to_owned(),
            }
        })?;

        let ctx =
            ValidationContext::new(name, field.value(), invocation.args()).with_code(field.code());
        match rule(&ctx) {
            Ok(()) => trace!(field = name, rule = invocation.name(), "rule passed"),
            Err(failure) => {
                trace!(
                    field = name,
                    rule = invocation.name(),
                    reason = failure.reason(),
                    "rule failed"
                );
                errors.add(name, invocation.name(), failure.message_for(name));
                failed = true;
            }
        }
    }

    if let (true, Some(code)) = (failed, field.code()) {
        errors.set_code(name, code);
    }

    Ok(failed)
}
