use indexmap::IndexMap;
use serde::Deserialize;

/// Validator configuration: an ordered mapping from glob-style path pattern to
/// the ordered list of rule names applied to every file matching that pattern.
///
/// Patterns are not mutually exclusive. One file may match several patterns,
/// and every matching pattern's rules are applied in configured order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_patterns")]
    pub patterns: IndexMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
        }
    }
}

fn default_patterns() -> IndexMap<String, Vec<String>> {
    let mut patterns = IndexMap::new();
    patterns.insert(
        "*.html".to_string(),
        vec![
            "has_title_in_head".to_string(),
            "has_navbar".to_string(),
            "has_title_in_body".to_string(),
            "has_footer".to_string(),
        ],
    );
    patterns.insert(
        "index.html".to_string(),
        vec!["has_prereq".to_string(), "has_syllabus".to_string()],
    );
    patterns.insert(
        "*-*/index.html".to_string(),
        vec!["has_objectives".to_string()],
    );
    patterns
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
