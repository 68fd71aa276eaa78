//! Configuration module - shortcut settings
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::DEFAULT_LOG_FILTER;

pub use types::Config;

pub use loader::{default_config_path, load_config, read_config};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
