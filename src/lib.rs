//! purr-shortcuts - keyboard shortcut tables and chord resolution for the
//! Purr Data patch editor.
//!
//! The shortcut table is built once per platform; each window context owns
//! a keymap of host callbacks, and key-down events are resolved against the
//! keymap of the active context.

pub mod config;
pub mod error;
pub mod logging;
pub mod shortcuts;
