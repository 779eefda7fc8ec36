mod builtin;
mod registry;
mod violation;

pub use registry::{Check, Rule, RuleRegistry, check_exactly_one};
pub use violation::Violation;
