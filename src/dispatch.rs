use std::io::Write;

use globset::{GlobBuilder, GlobMatcher};

use crate::config::Config;
use crate::document::Document;
use crate::error::{LayoutGuardError, Result};
use crate::rules::RuleRegistry;

#[derive(Debug)]
struct PatternRules {
    pattern: String,
    matcher: GlobMatcher,
    rules: Vec<String>,
}

/// The core control loop: matches every document against every configured
/// pattern and invokes the rules of each matching pattern, in configured
/// order, writing each violation to the output stream as it is found.
#[derive(Debug)]
pub struct Dispatcher {
    patterns: Vec<PatternRules>,
    registry: RuleRegistry,
    verbose: u8,
}

impl Dispatcher {
    /// Compiles the configured patterns and validates every referenced rule
    /// name against the registry, before any document is processed.
    ///
    /// Patterns are matched right-anchored against the path relative to the
    /// source root, component by component: `*` and `?` never cross a path
    /// separator, and a pattern with N components matches the trailing N
    /// components of the path. So `*.html` matches `topic-1/index.html`,
    /// and so does the literal `index.html`, while `*-*/index.html` requires
    /// a hyphenated parent directory.
    ///
    /// # Errors
    /// Returns [`LayoutGuardError::InvalidPattern`] for malformed glob
    /// syntax and [`LayoutGuardError::UnknownRule`] for a rule name with no
    /// registered implementation.
    pub fn new(config: &Config, registry: RuleRegistry, verbose: u8) -> Result<Self> {
        let mut patterns = Vec::with_capacity(config.patterns.len());
        for (pattern, rules) in &config.patterns {
            let matcher = compile_pattern(pattern)?;

            for rule in rules {
                if !registry.contains(rule) {
                    return Err(LayoutGuardError::UnknownRule {
                        rule: rule.clone(),
                        pattern: pattern.clone(),
                    });
                }
            }

            patterns.push(PatternRules {
                pattern: pattern.clone(),
                matcher,
                rules: rules.clone(),
            });
        }

        Ok(Self {
            patterns,
            registry,
            verbose,
        })
    }

    /// Visits every document and runs every rule of every matching pattern.
    /// Rules are not deduplicated: a rule reachable through two matching
    /// patterns runs twice and may diagnose twice. There is no early
    /// termination regardless of earlier failures.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` fails; rule checks
    /// themselves never fail.
    pub fn dispatch(&self, documents: &[Document], out: &mut dyn Write) -> Result<()> {
        for document in documents {
            if self.verbose >= 1 {
                eprintln!("Checking {}", document.path);
            }
            self.dispatch_one(document, out)?;
        }
        Ok(())
    }

    fn dispatch_one(&self, document: &Document, out: &mut dyn Write) -> Result<()> {
        for pattern in &self.patterns {
            if !pattern.matcher.is_match(&document.path) {
                continue;
            }
            for name in &pattern.rules {
                if self.verbose >= 2 {
                    eprintln!("  Applying {name}");
                }
                let rule =
                    self.registry
                        .lookup(name)
                        .ok_or_else(|| LayoutGuardError::UnknownRule {
                            rule: name.clone(),
                            pattern: pattern.pattern.clone(),
                        })?;
                for violation in rule.apply(document) {
                    writeln!(out, "{violation}")?;
                }
            }
        }
        Ok(())
    }
}

/// The `**/` prefix makes matching right-anchored: any number of leading
/// path components may precede the pattern.
fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(&format!("**/{pattern}"))
        .literal_separator(true)
        .build()
        .map_err(|e| LayoutGuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;
    Ok(glob.compile_matcher())
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
