//! Macros for writing rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`] — Create a rule function that coerces the field value, parses
//!   an optional argument, and turns a boolean check into an [`Outcome`].
//!
//! [`Outcome`]: crate::core::Outcome

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a rule function usable with [`Registry::register`].
///
/// The value is coerced first (`text` → `Cow<str>`, `number` → `f64`); a
/// value of the wrong kind fails with `"is not a string"` / `"is not
/// numeric"`. An `arg(...)` clause then parses the first argument with
/// [`FromStr`]; a missing or unparsable argument fails the field.
///
/// # Variants
///
/// **No argument**:
/// ```rust,ignore
/// ruletag::rule! {
///     pub lowercase("Lowercase") for text;
///     rule(input) { !input.chars().any(char::is_uppercase) }
///     error(input) { "contains uppercase characters" }
/// }
/// ```
///
/// **With an argument**:
/// ```rust,ignore
/// ruletag::rule! {
///     pub divisible_by("DivisibleBy") for number, arg(n: f64);
///     rule(input) { input % n == 0.0 }
///     error(input) { format!("must be divisible by {n}") }
/// }
/// ```
///
/// [`Registry::register`]: crate::registry::Registry::register
/// [`FromStr`]: std::str::FromStr
#[macro_export]
macro_rules! rule {
    (@coerce text, $ctx:ident) => {
        match $crate::coerce::as_text($ctx.value()) {
            Ok(text) => text,
            Err(_) => return Err($crate::core::Failure::not_text()),
        }
    };

    (@coerce number, $ctx:ident) => {
        match $crate::coerce::as_number($ctx.value()) {
            Ok(number) => number,
            Err(_) => return Err($crate::core::Failure::not_numeric()),
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis $name:ident($rule_name:literal) for $kind:ident $(, arg($arg:ident: $aty:ty))?;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[allow(unused_variables)]
        $vis fn $name(ctx: &$crate::core::ValidationContext<'_>) -> $crate::core::Outcome {
            let $inp = $crate::rule!(@coerce $kind, ctx);
            $(
                let $arg: $aty = $crate::rules::parse_arg(ctx, $rule_name)?;
            )?
            let passed: bool = $rule;
            if passed {
                Ok(())
            } else {
                let $einp = $inp;
                Err($crate::core::Failure::new($err))
            }
        }
    };
}
