pub mod cli;
pub mod config;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod rules;

pub use error::{LayoutGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
