use crate::error::Result;

use super::{Check, Rule, RuleRegistry};

impl RuleRegistry {
    /// Builds the registry of built-in rules. Registration order is fixed;
    /// every selector in the table is parsed here, before any document is
    /// processed.
    ///
    /// # Errors
    /// Returns [`crate::LayoutGuardError::Selector`] if a built-in selector
    /// fails to parse. This cannot happen for the shipped table; the error
    /// path guards rules added later.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        registry.register("has_footer", Rule::single("footer", "footer")?);
        registry.register("has_navbar", Rule::single("navbar", "div.navbar")?);
        registry.register(
            "has_title_in_head",
            Rule::single("title in head", "head > title")?,
        );
        registry.register(
            "has_title_in_body",
            Rule::single("title in body", "body h1")?,
        );
        registry.register(
            "has_prereq",
            Rule::single("prerequisites", "blockquote.prereq")?,
        );
        registry.register(
            "has_syllabus",
            Rule::new(vec![
                Check::new("syllabus", "div.syllabus")?,
                Check::new("syllabus heading", "div.syllabus h2")?,
                Check::new("syllabus table", "div.syllabus table")?,
            ]),
        );
        registry.register(
            "has_objectives",
            Rule::single("learning objectives", "blockquote.objectives")?,
        );
        Ok(registry)
    }
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
