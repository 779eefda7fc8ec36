use indexmap::IndexMap;
use scraper::Selector;

use crate::document::Document;
use crate::error::{LayoutGuardError, Result};

use super::Violation;

/// The generic primitive every rule is built from: evaluate `selector`
/// against the document tree and report a violation unless it matches
/// exactly one node. Zero matches is the ordinary reportable case, not a
/// fault; the check always completes.
#[must_use]
pub fn check_exactly_one(
    document: &Document,
    description: &str,
    selector: &Selector,
) -> Option<Violation> {
    let actual = document.count(selector);
    (actual != 1).then(|| Violation {
        path: document.path.clone(),
        description: description.to_string(),
        expected: 1,
        actual,
    })
}

/// One structural expectation: a human-readable description plus the
/// pre-parsed selector it is verified with.
#[derive(Debug, Clone)]
pub struct Check {
    description: String,
    selector: Selector,
}

impl Check {
    /// # Errors
    /// Returns [`LayoutGuardError::Selector`] if `selector` is not valid
    /// CSS selector syntax.
    pub fn new(description: &str, selector: &str) -> Result<Self> {
        let parsed = Selector::parse(selector).map_err(|e| LayoutGuardError::Selector {
            selector: selector.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            description: description.to_string(),
            selector: parsed,
        })
    }
}

/// A named rule body: an ordered list of checks, each of which may emit one
/// diagnostic. Rules never mutate the document and never fail.
#[derive(Debug, Clone)]
pub struct Rule {
    checks: Vec<Check>,
}

impl Rule {
    #[must_use]
    pub const fn new(checks: Vec<Check>) -> Self {
        Self { checks }
    }

    /// Convenience constructor for the common single-check rule.
    ///
    /// # Errors
    /// Returns [`LayoutGuardError::Selector`] if `selector` is invalid.
    pub fn single(description: &str, selector: &str) -> Result<Self> {
        Ok(Self::new(vec![Check::new(description, selector)?]))
    }

    /// Runs every check against `document`, collecting the violations in
    /// check order.
    #[must_use]
    pub fn apply(&self, document: &Document) -> Vec<Violation> {
        self.checks
            .iter()
            .filter_map(|c| check_exactly_one(document, &c.description, &c.selector))
            .collect()
    }
}

/// Name-indexed rule registry, populated once before first use and shared
/// read-only across all dispatch.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: IndexMap<String, Rule>,
}

impl RuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rule` under `name`. Registering the same name again
    /// silently overwrites the earlier rule.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) {
        self.rules.insert(name.into(), rule);
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
