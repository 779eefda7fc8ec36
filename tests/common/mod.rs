#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the layout-guard binary.
#[macro_export]
macro_rules! layout_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("layout-guard"))
    };
}

/// A fully conforming lesson index page: passes every built-in rule.
pub const GOOD_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head><title>Lesson</title></head>
<body>
<div class="navbar"><a href="/">Home</a></div>
<h1>Lesson</h1>
<blockquote class="prereq"><p>Some prior knowledge.</p></blockquote>
<div class="syllabus">
<h2>Syllabus</h2>
<table><tr><td>Topic</td></tr></table>
</div>
<footer>Copyright</footer>
</body>
</html>
"#;

/// A page with head and body titles but no navbar and no footer.
pub const PAGE_MISSING_FOOTER_NAVBAR: &str = r#"<!DOCTYPE html>
<html>
<head><title>Page</title></head>
<body>
<h1>Page</h1>
<p>Content.</p>
</body>
</html>
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a site tree under `_site/` with the given pages.
    pub fn create_site(&self, pages: &[(&str, &str)]) {
        self.create_dir("_site");
        for (relative_path, content) in pages {
            self.create_file(&format!("_site/{relative_path}"), content);
        }
    }
}
