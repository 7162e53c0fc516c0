//! Lexer for rule expressions.
//!
//! A rule expression is a comma-separated list of `Name` or `Name:argument`
//! tokens:
//!
//! ```text
//! MinLength:2, Alphanumeric, Regexp:/^[a-z,]+$/
//! ```
//!
//! A `Regexp:/…/` literal may itself contain commas and colons, so it is cut
//! out of the expression before the rest is split. Only one such literal is
//! recognised per expression; the match is greedy and runs to the last `/`.
//! The literal keeps its written position among the invocations instead of
//! being evaluated ahead of the comma-split tokens.
//!
//! Parsing never fails. Unknown names are caught at dispatch time and bad
//! arguments by the rules themselves.

use std::sync::LazyLock;

use regex::Regex;
use smallvec::{SmallVec, smallvec};

/// Name under which the pattern rule is invoked.
pub const REGEXP_RULE: &str = "Regexp";

static REGEXP_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Regexp:/.*/").expect("regexp literal pattern compiles"));

// ============================================================================
// RULE INVOCATION
// ============================================================================

/// One `Name[:argument]` token of a rule expression.
///
/// Borrows from the expression it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInvocation<'a> {
    name: &'a str,
    args: SmallVec<[&'a str; 1]>,
}

impl<'a> RuleInvocation<'a> {
    /// Splits a token on its first colon.
    fn from_token(token: &'a str) -> Self {
        match token.split_once(':') {
            Some((name, arg)) => Self {
                name,
                args: smallvec![arg],
            },
            None => Self {
                name: token,
                args: SmallVec::new(),
            },
        }
    }

    /// Rule name, as written.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Raw arguments. Currently zero or one.
    #[must_use]
    pub fn args(&self) -> &[&'a str] {
        &self.args
    }

    /// First argument, if any.
    #[must_use]
    pub fn arg(&self) -> Option<&'a str> {
        self.args.first().copied()
    }
}

// ============================================================================
// PARSED TAG
// ============================================================================

/// The invocations of a rule expression, in written order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTag<'a> {
    invocations: SmallVec<[RuleInvocation<'a>; 4]>,
}

impl<'a> ParsedTag<'a> {
    /// Iterates the invocations left to right.
    pub fn iter(&self) -> std::slice::Iter<'_, RuleInvocation<'a>> {
        self.invocations.iter()
    }

    /// Number of invocations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    /// True when the expression held no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }

    /// Invocation names, in order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.invocations.iter().map(RuleInvocation::name)
    }

    fn push_segment(&mut self, segment: &'a str) {
        for token in segment.split(',') {
            let token = token.strip_prefix(' ').unwrap_or(token);
            if !token.is_empty() {
                self.invocations.push(RuleInvocation::from_token(token));
            }
        }
    }
}

impl<'t, 'a> IntoIterator for &'t ParsedTag<'a> {
    type Item = &'t RuleInvocation<'a>;
    type IntoIter = std::slice::Iter<'t, RuleInvocation<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for ParsedTag<'a> {
    type Item = RuleInvocation<'a>;
    type IntoIter = smallvec::IntoIter<[RuleInvocation<'a>; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.invocations.into_iter()
    }
}

/// Parses a rule expression.
///
/// # Examples
///
/// ```rust,ignore
/// use ruletag::engine::tag;
///
/// let parsed = tag::parse("MinLength:1,Regexp:/^[a-z]+$/,NotEmpty");
/// let names: Vec<_> = parsed.names().collect();
/// assert_eq!(names, ["MinLength", "Regexp", "NotEmpty"]);
/// ```
#[must_use]
pub fn parse(expression: &str) -> ParsedTag<'_> {
    let mut parsed = ParsedTag::default();

    let Some(literal) = REGEXP_LITERAL.find(expression) else {
        parsed.push_segment(expression);
        return parsed;
    };

    parsed.push_segment(&expression[..literal.start()]);
    let argument = &expression[literal.start() + REGEXP_RULE.len() + 1..literal.end()];
    parsed.invocations.push(RuleInvocation {
        name: REGEXP_RULE,
        args: smallvec![argument],
    });
    parsed.push_segment(&expression[literal.end()..]);
    parsed
}
