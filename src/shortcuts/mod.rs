//! Keyboard shortcut tables and chord resolution.
//!
//! This module provides:
//! - A read-only command → chord table per platform, with desktop and web sets
//! - Per-context keymaps from canonical chord strings to host callbacks
//! - Deterministic key-down resolution against the active context
//!
//! # Example
//!
//! ```ignore
//! use purr_shortcuts::shortcuts::{build_table, install_context, ActionSet, KeyEvent, Platform, Resolver, Variant};
//!
//! let table = build_table(Platform::from_descriptor("darwin"))?;
//! let actions = ActionSet::new().on("save", || println!("saving"));
//! let mut resolver = Resolver::new();
//! install_context(&mut resolver, &table, Variant::Desktop, "", &["save"], &actions)?;
//!
//! let mut event = KeyEvent::new("s").cmd();
//! resolver.on_key_down(&mut event, ""); // prints "saving"
//! ```

mod contexts;
mod keymap;
mod resolver;
mod table;
mod types;

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;



pub use types::{
    canonical_chord_string, canonical_key, resolve_platform_modifier, Chord, ChordParseError,
    Modifiers, Platform, PlatformModifier,
};

pub use table::{
    build_table, build_table_with_policy, ChordConflict, CommandKey, DuplicatePolicy,
    ShortcutTable, TableBuilder, Variant,
};

pub use keymap::{ActionHandler, Binding, Keymap, ShadowedBinding};

pub use resolver::{canonical_chord, KeyEvent, KeyOutcome, Resolver};

pub use contexts::{
    canvas_commands, console_commands, install_context, ActionSet, CANVAS_CONTEXT,
    CONSOLE_CONTEXT,
};
