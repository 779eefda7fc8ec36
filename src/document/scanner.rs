use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{LayoutGuardError, Result};

use super::Document;

/// Discovers and loads every `.html` file under a source root.
#[derive(Debug, Default)]
pub struct DocumentScanner;

impl DocumentScanner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Recursively scans `root` and loads every HTML file found, in sorted
    /// path order so repeated runs produce identical output.
    ///
    /// # Errors
    /// Returns [`LayoutGuardError::NoSourceFiles`] if no HTML files exist
    /// under `root`, or [`LayoutGuardError::FileRead`] if any file cannot
    /// be read. Either condition is fatal to the whole run.
    pub fn scan(&self, root: &Path) -> Result<Vec<Document>> {
        let mut paths: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && has_html_extension(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect();
        paths.sort();

        if paths.is_empty() {
            return Err(LayoutGuardError::NoSourceFiles {
                dir: root.to_path_buf(),
            });
        }

        paths.iter().map(|p| Document::load(root, p)).collect()
    }
}

fn has_html_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "html")
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
