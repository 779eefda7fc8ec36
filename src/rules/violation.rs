use std::fmt;

/// One reported structural violation. Advisory only: violations are printed
/// as they are found and never affect the exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub description: String,
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "In {}, checking {}: expected {} match, got {}",
            self.path, self.description, self.expected, self.actual
        )
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
