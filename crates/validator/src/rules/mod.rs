//! Built-in rules.
//!
//! Every rule is a plain function `fn(&ValidationContext<'_>) -> Outcome`.
//! [`BUILTINS`] maps the names used in rule expressions to those functions;
//! [`crate::init`] installs them into the process-wide registry.
//!
//! | Name | Value | Argument |
//! |------|-------|----------|
//! | `NotEmpty` | text | |
//! | `NotZero` | number | |
//! | `NotZeroTime` | timestamp | |
//! | `GreaterThan` | number | number |
//! | `LessThan` | number | number |
//! | `Length` | text | count |
//! | `MinLength` | text | count |
//! | `MaxLength` | text | count |
//! | `Alpha` | text | |
//! | `Alphanumeric` | text | |
//! | `Email` | text | |
//! | `URL` | text | |
//! | `UUID` | text | |
//! | `Regexp` | text | `/pattern/` |

pub mod charset;
pub mod format;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod presence;

use std::str::FromStr;

use crate::core::{Failure, Outcome, ValidationContext};

/// Signature shared by every built-in rule.
pub type BuiltinRule = fn(&ValidationContext<'_>) -> Outcome;

/// The built-in catalog, by rule-expression name.
pub const BUILTINS: &[(&str, BuiltinRule)] = &[
    ("NotEmpty", presence::not_empty),
    ("NotZero", presence::not_zero),
    ("NotZeroTime", presence::not_zero_time),
    ("GreaterThan", numeric::greater_than),
    ("LessThan", numeric::less_than),
    ("Length", length::length),
    ("MinLength", length::min_length),
    ("MaxLength", length::max_length),
    ("Alpha", charset::alpha),
    ("Alphanumeric", charset::alphanumeric),
    ("Email", format::email),
    ("URL", format::url),
    ("UUID", format::uuid),
    ("Regexp", pattern::regexp),
];

/// Parses the first argument of a rule invocation.
///
/// A missing or unparsable argument is reported as an ordinary field
/// failure naming `rule`, never as a configuration error.
pub fn parse_arg<T: FromStr>(ctx: &ValidationContext<'_>, rule: &str) -> Result<T, Failure> {
    let raw = ctx.arg(0).ok_or_else(|| Failure::missing_argument(rule))?;
    raw.parse()
        .map_err(|_| Failure::invalid_argument(rule, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = BUILTINS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTINS.len());
    }

    #[test]
    fn test_parse_arg() {
        let value = FieldValue::Text("");
        let ctx = ValidationContext::new("f", &value, &["12"]);
        assert_eq!(parse_arg::<usize>(&ctx, "MinLength"), Ok(12));

        let ctx = ValidationContext::new("f", &value, &["abc"]);
        assert_eq!(
            parse_arg::<usize>(&ctx, "MinLength"),
            Err(Failure::invalid_argument("MinLength", "abc"))
        );

        let ctx = ValidationContext::new("f", &value, &[]);
        assert_eq!(
            parse_arg::<usize>(&ctx, "MinLength"),
            Err(Failure::missing_argument("MinLength"))
        );
    }
}
