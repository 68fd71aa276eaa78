//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::shortcuts::{DuplicatePolicy, Platform, Variant};

/// Shortcut configuration, read from `~/.purr-data/shortcuts.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Platform descriptor (`darwin`, `win32`, `MacIntel`, ...). Detected when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Binding set to use (default: desktop)
    #[serde(default)]
    pub variant: Variant,
    /// Handling of repeated command entries while building the table (default: reject)
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// JSONL log file; stderr only when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Tracing filter directive, e.g. "debug" or "purr_shortcuts=trace"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Config {
    /// The configured platform, or the one this binary runs on.
    pub fn platform(&self) -> Platform {
        self.platform
            .as_deref()
            .map(Platform::from_descriptor)
            .unwrap_or_else(Platform::current)
    }
}
