//! Rule registry.
//!
//! Maps rule names (as written in rule expressions) to rule predicates.
//! Registration is one-time per name; lookups are cheap and may run from any
//! number of threads at once.
//!
//! A process-wide registry backs the free functions [`crate::validate`] and
//! [`crate::register`]. It starts empty: call [`crate::init`] once at startup
//! to install the built-in rules, then register any custom rules.
//!
//! ```rust,ignore
//! use ruletag::{Failure, ValidationContext};
//!
//! ruletag::init()?;
//! ruletag::register("Even", |ctx: &ValidationContext<'_>| {
//!     match ruletag::coerce::as_number(ctx.value()) {
//!         Ok(n) if n % 2.0 == 0.0 => Ok(()),
//!         Ok(_) => Err(Failure::new("is not even")),
//!         Err(_) => Err(Failure::not_numeric()),
//!     }
//! })?;
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{Arc, LazyLock, OnceLock};

use parking_lot::RwLock;
use tracing::debug;

use crate::core::{Outcome, ValidationContext};

// ============================================================================
// TYPES
// ============================================================================

/// Signature of a rule predicate.
pub type RuleFn = dyn Fn(&ValidationContext<'_>) -> Outcome + Send + Sync;

/// A registered rule, shared between the registry and in-flight validations.
pub type Rule = Arc<RuleFn>;

/// Registry failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A rule with this name is already registered.
    #[error("validation rule '{name}' is already registered")]
    DuplicateRule {
        /// The contested name.
        name: String,
    },

    /// No rule with this name is registered.
    #[error("no validation rule named '{name}' is registered")]
    UnknownRule {
        /// The missing name.
        name: String,
    },
}

// ============================================================================
// REGISTRY
// ============================================================================

/// A name → rule table.
///
/// Most callers use the process-wide instance through [`global`]; a private
/// `Registry` is handy for tests and for embedding several independent rule
/// sets in one process.
#[derive(Default)]
pub struct Registry {
    rules: RwLock<HashMap<String, Rule>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in rule.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for &(name, rule) in crate::rules::BUILTINS {
            registry
                .rules
                .write()
                .insert(name.to_owned(), Arc::new(rule));
        }
        registry
    }

    /// Registers `rule` under `name`.
    ///
    /// Fails with [`RegistryError::DuplicateRule`] if the name is taken; the
    /// existing rule is left in place.
    pub fn register<F>(&self, name: impl Into<String>, rule: F) -> Result<(), RegistryError>
    where
        F: Fn(&ValidationContext<'_>) -> Outcome + Send + Sync + 'static,
    {
        let name = name.into();
        match self.rules.write().entry(name) {
            Entry::Occupied(entry) => Err(RegistryError::DuplicateRule {
                name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                debug!(rule = %entry.key(), "registered validation rule");
                entry.insert(Arc::new(rule));
                Ok(())
            }
        }
    }

    /// Looks up the rule registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<Rule, RegistryError> {
        self.rules
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownRule {
                name: name.to_owned(),
            })
    }

    /// Returns true if a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.read().contains_key(name)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }

    /// Registered rule names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rules.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("rules", &self.names())
            .finish()
    }
}

// ============================================================================
// PROCESS-WIDE REGISTRY
// ============================================================================

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);
static BUILTINS_INSTALLED: OnceLock<Result<(), RegistryError>> = OnceLock::new();

/// The process-wide registry.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Installs the built-in rules into the process-wide registry.
///
/// Safe to call any number of times; only the first call installs. Fails if
/// a custom rule already claimed a built-in name before the first call.
pub fn init() -> Result<(), RegistryError> {
    BUILTINS_INSTALLED
        .get_or_init(|| {
            let registry = global();
            for &(name, rule) in crate::rules::BUILTINS {
                registry.register(name, rule)?;
            }
            debug!(count = crate::rules::BUILTINS.len(), "installed built-in rules");
            Ok(())
        })
        .clone()
}

/// Registers a custom rule in the process-wide registry.
pub fn register<F>(name: impl Into<String>, rule: F) -> Result<(), RegistryError>
where
    F: Fn(&ValidationContext<'_>) -> Outcome + Send + Sync + 'static,
{
    global().register(name, rule)
}

// ============================================================================
// TESTS
// ============================================================================
