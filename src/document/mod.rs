mod scanner;

pub use scanner::DocumentScanner;

use std::fs;
use std::path::Path;

use scraper::{Html, Selector};

use crate::error::{LayoutGuardError, Result};

/// One parsed HTML file, identified by its path relative to the source root
/// and queryable through CSS selectors. Immutable once loaded.
#[derive(Debug)]
pub struct Document {
    /// Path relative to the source root, `/`-separated on all platforms.
    pub path: String,
    tree: Html,
}

impl Document {
    /// Parses raw markup into a document. Parsing is lenient and never fails;
    /// malformed input still yields a queryable tree.
    #[must_use]
    pub fn parse(path: impl Into<String>, html: &str) -> Self {
        Self {
            path: path.into(),
            tree: Html::parse_document(html),
        }
    }

    /// Reads and parses the file at `file`, recording its path relative to `root`.
    ///
    /// # Errors
    /// Returns [`LayoutGuardError::FileRead`] if the file cannot be read.
    pub fn load(root: &Path, file: &Path) -> Result<Self> {
        let content = fs::read_to_string(file).map_err(|e| LayoutGuardError::FileRead {
            path: file.to_path_buf(),
            source: e,
        })?;
        Ok(Self::parse(relative_path(root, file), &content))
    }

    /// Number of nodes in the tree matched by `selector`.
    #[must_use]
    pub fn count(&self, selector: &Selector) -> usize {
        self.tree.select(selector).count()
    }
}

fn relative_path(root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    rel.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
