//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Directory under the home directory holding editor settings
pub const DEFAULT_CONFIG_DIR: &str = ".purr-data";

/// File name of the shortcut configuration
pub const DEFAULT_CONFIG_FILE: &str = "shortcuts.json";

/// Default tracing filter when neither the config nor RUST_LOG sets one
pub const DEFAULT_LOG_FILTER: &str = "info";
