//! `Regexp:/pattern/`, with patterns taken from rule expressions.
//!
//! Each distinct pattern is compiled once per process and shared. The cache
//! holds at most [`MAX_CACHED_PATTERNS`] entries; patterns beyond that are
//! compiled on every use.

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use regex::Regex;

use crate::coerce::as_text;
use crate::core::{Failure, Outcome, ValidationContext};

const RULE: &str = "Regexp";

/// Upper bound on distinct patterns kept compiled. Entries are never evicted.
pub const MAX_CACHED_PATTERNS: usize = 1024;

static COMPILED: LazyLock<DashMap<String, Arc<Regex>>> = LazyLock::new(DashMap::new);

/// Strips the `/` delimiters: the body runs from after the first `/` to
/// before the last one.
fn pattern_body(argument: &str) -> Option<&str> {
    argument
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
}

/// Returns the compiled form of `pattern`, compiling and caching it on first
/// use.
fn compiled(pattern: &str) -> Result<Arc<Regex>, regex::Error> {
    compile_cached(&COMPILED, MAX_CACHED_PATTERNS, pattern)
}

fn compile_cached(
    cache: &DashMap<String, Arc<Regex>>,
    capacity: usize,
    pattern: &str,
) -> Result<Arc<Regex>, regex::Error> {
    if let Some(regex) = cache.get(pattern) {
        return Ok(Arc::clone(regex.value()));
    }
    let regex = Arc::new(Regex::new(pattern)?);
    if cache.len() < capacity {
        cache.insert(pattern.to_owned(), Arc::clone(&regex));
    }
    Ok(regex)
}

/// Passes when the text matches the pattern written between slashes.
///
/// A search, not a full match: anchor with `^…$` to match the whole text.
/// Empty text is matched like any other.
pub fn regexp(ctx: &ValidationContext<'_>) -> Outcome {
    let text = as_text(ctx.value()).map_err(|_| Failure::not_text())?;
    let argument = ctx.arg(0).ok_or_else(|| Failure::missing_argument(RULE))?;
    let pattern = pattern_body(argument).ok_or_else(|| Failure::invalid_argument(RULE, argument))?;
    let regex = compiled(pattern).map_err(|_| Failure::invalid_argument(RULE, argument))?;

    if regex.is_match(&text) {
        Ok(())
    } else {
        Err(Failure::new(format!(
            "doesn't match regular expression {argument}"
        )))
    }
}
