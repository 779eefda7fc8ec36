mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader};
pub use model::Config;
