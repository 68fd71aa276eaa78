//! The built-in command → chord table.
//!
//! Uses Vec for deterministic iteration order and HashMap for O(1) lookup.
//! Built once per platform and never mutated afterward.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::types::{resolve_platform_modifier, Chord, Modifiers, Platform, PlatformModifier};
use crate::error::{Result, ShortcutError};

const WEB_SUFFIX: &str = "_web";

/// Which binding set a command belongs to.
///
/// The web set runs with reduced permissions inside a browser, where several
/// accelerators are taken by the browser itself and so are bound differently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Desktop,
    Web,
}

/// A command name qualified by its variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommandKey {
    pub name: String,
    pub variant: Variant,
}

impl CommandKey {
    pub fn new(name: impl Into<String>, variant: Variant) -> Self {
        Self {
            name: name.into(),
            variant,
        }
    }

    /// Parse a table name such as `save` or `save_web`.
    pub fn from_table_name(table_name: &str) -> Self {
        match table_name.strip_suffix(WEB_SUFFIX) {
            Some(base) => Self::new(base, Variant::Web),
            None => Self::new(table_name, Variant::Desktop),
        }
    }

    /// Name as it appears in the table, with `_web` for the web variant.
    pub fn table_name(&self) -> String {
        match self.variant {
            Variant::Desktop => self.name.clone(),
            Variant::Web => format!("{}{}", self.name, WEB_SUFFIX),
        }
    }
}

impl fmt::Display for CommandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.table_name())
    }
}

/// What to do when the same command key is inserted twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicatePolicy {
    /// Fail construction with `ShortcutError::DuplicateCommand`.
    #[default]
    Reject,
    /// Replace the earlier chord, keeping the earlier position.
    LastWriteWins,
}

/// Several commands of one variant sharing a chord.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChordConflict {
    pub chord: String,
    /// Command names in table order.
    pub commands: Vec<String>,
}

/// Read-only command → chord table for one platform.
#[derive(Clone, Debug)]
pub struct ShortcutTable {
    platform: Platform,
    entries: Vec<(CommandKey, Chord)>,
    index: HashMap<CommandKey, usize>,
}

impl ShortcutTable {
    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn get(&self, name: &str, variant: Variant) -> Option<&Chord> {
        self.get_key(&CommandKey::new(name, variant))
    }

    pub fn get_key(&self, key: &CommandKey) -> Option<&Chord> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Whether `name` has a chord in either variant.
    pub fn defines(&self, name: &str) -> bool {
        self.get(name, Variant::Desktop).is_some() || self.get(name, Variant::Web).is_some()
    }

    /// Look up by table name (`save`, `save_web`).
    pub fn lookup(&self, table_name: &str) -> Option<&Chord> {
        self.get_key(&CommandKey::from_table_name(table_name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CommandKey, &Chord)> {
        self.entries.iter().map(|(k, c)| (k, c))
    }

    pub fn variant(&self, variant: Variant) -> impl Iterator<Item = (&CommandKey, &Chord)> {
        self.iter().filter(move |(k, _)| k.variant == variant)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Chords bound to more than one command within a variant.
    ///
    /// Such commands cannot share a keymap: whichever is bound last wins.
    pub fn chord_conflicts(&self, variant: Variant) -> Vec<ChordConflict> {
        let mut conflicts: Vec<ChordConflict> = Vec::new();
        let mut by_chord: HashMap<String, usize> = HashMap::new();

        for (key, chord) in self.variant(variant) {
            let canonical = chord.canonical();
            match by_chord.get(&canonical) {
                Some(&i) => conflicts[i].commands.push(key.name.clone()),
                None => {
                    by_chord.insert(canonical.clone(), conflicts.len());
                    conflicts.push(ChordConflict {
                        chord: canonical,
                        commands: vec![key.name.clone()],
                    });
                }
            }
        }

        conflicts.retain(|c| c.commands.len() > 1);
        conflicts
    }
}

/// Incremental table construction with an explicit duplicate policy.
pub struct TableBuilder {
    platform: Platform,
    policy: DuplicatePolicy,
    entries: Vec<(CommandKey, Chord)>,
    index: HashMap<CommandKey, usize>,
}

impl TableBuilder {
    pub fn new(platform: Platform, policy: DuplicatePolicy) -> Self {
        Self {
            platform,
            policy,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: CommandKey, chord: Chord) -> Result<()> {
        if let Some(&existing) = self.index.get(&key) {
            return match self.policy {
                DuplicatePolicy::Reject => Err(ShortcutError::DuplicateCommand(key.table_name())),
                DuplicatePolicy::LastWriteWins => {
                    warn!(
                        event_type = "shortcut_table",
                        command = %key,
                        previous = %self.entries[existing].1,
                        replacement = %chord,
                        "Duplicate command entry replaces earlier chord"
                    );
                    self.entries[existing].1 = chord;
                    Ok(())
                }
            };
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, chord));
        Ok(())
    }

    pub fn build(self) -> ShortcutTable {
        ShortcutTable {
            platform: self.platform,
            entries: self.entries,
            index: self.index,
        }
    }
}

/// Build the full table for `platform`, rejecting duplicate commands.
pub fn build_table(platform: Platform) -> Result<ShortcutTable> {
    build_table_with_policy(platform, DuplicatePolicy::Reject)
}

pub fn build_table_with_policy(platform: Platform, policy: DuplicatePolicy) -> Result<ShortcutTable> {
    let mut builder = TableBuilder::new(platform, policy);

    for (name, chord) in desktop_entries(platform) {
        builder.insert(CommandKey::new(name, Variant::Desktop), chord)?;
    }
    for (name, chord) in web_entries(platform) {
        builder.insert(CommandKey::new(name, Variant::Web), chord)?;
    }

    let table = builder.build();
    debug!(
        event_type = "shortcut_table",
        platform = platform.name(),
        entries = table.len(),
        "Built shortcut table"
    );
    Ok(table)
}

/// Chords that differ by platform beyond the primary modifier.
struct PlatformKeys {
    primary: Modifiers,
    preferences_key: &'static str,
    fullscreen: Chord,
}

impl PlatformKeys {
    fn new(platform: Platform) -> Self {
        let modifier = resolve_platform_modifier(platform);
        let (preferences_key, fullscreen) = if platform.is_mac() {
            (
                ",",
                Chord::new("F", Modifiers::primary(PlatformModifier::Cmd).with_ctrl()),
            )
        } else {
            ("P", Chord::bare("F11"))
        };
        Self {
            primary: Modifiers::primary(modifier),
            preferences_key,
            fullscreen,
        }
    }
}

fn desktop_entries(platform: Platform) -> Vec<(&'static str, Chord)> {
    let keys = PlatformKeys::new(platform);
    let p = keys.primary;
    let ps = p.with_shift();
    let pa = p.with_alt();

    vec![
        // File
        ("new", Chord::new("N", p)),
        ("open", Chord::new("O", p)),
        ("save", Chord::new("S", p)),
        ("saveas", Chord::new("S", ps)),
        ("print", Chord::new("P", ps)),
        ("message", Chord::new("M", p)),
        ("close", Chord::new("W", p)),
        ("quit", Chord::new("Q", p)),
        // Edit
        ("undo", Chord::new("Z", p)),
        ("redo", Chord::new("Z", ps)),
        ("selectall", Chord::new("A", p)),
        ("cut", Chord::new("X", p)),
        ("copy", Chord::new("C", p)),
        ("paste", Chord::new("V", p)),
        ("paste_clipboard", Chord::new("V", pa)),
        ("duplicate", Chord::new("D", p)),
        ("reselect", Chord::new("\n", p)),
        ("clear_console", Chord::new("L", ps)),
        ("tidyup", Chord::new("Y", p)),
        ("cordinspector", Chord::new("R", ps)),
        ("find", Chord::new("F", p)),
        ("findagain", Chord::new("G", p)),
        ("editmode", Chord::new("E", p)),
        ("preferences", Chord::new(keys.preferences_key, p)),
        // View
        ("zoomin", Chord::new("=", p)),
        ("zoomout", Chord::new("-", p)),
        ("zoomreset", Chord::new("0", p)),
        ("zoomoptimal", Chord::new("9", p)),
        ("zoomhoriz", Chord::new("9", pa)),
        ("zoomvert", Chord::new("9", ps)),
        ("fullscreen", keys.fullscreen.clone()),
        // Put
        ("object", Chord::new("1", p)),
        ("msgbox", Chord::new("2", p)),
        ("number", Chord::new("3", p)),
        ("symbol", Chord::new("4", p)),
        ("comment", Chord::new("5", p)),
        ("dropdown", Chord::new("6", p)),
        ("bang", Chord::new("B", ps)),
        ("toggle", Chord::new("T", ps)),
        ("number2", Chord::new("N", ps)),
        ("vslider", Chord::new("V", ps)),
        ("hslider", Chord::new("H", ps)),
        ("vradio", Chord::new("D", ps)),
        ("hradio", Chord::new("I", ps)),
        ("vu", Chord::new("U", ps)),
        ("cnv", Chord::new("C", ps)),
        // Windows
        ("nextwin", Chord::new("PageDown", p)),
        ("prevwin", Chord::new("PageUp", p)),
        ("pdwin", Chord::new("R", p)),
        // Media
        ("audio_on", Chord::new("/", p)),
        ("audio_off", Chord::new(".", p)),
        // Help
        ("browser", Chord::new("B", p)),
    ]
}

fn web_entries(platform: Platform) -> Vec<(&'static str, Chord)> {
    let keys = PlatformKeys::new(platform);
    let p = keys.primary;
    let ps = p.with_shift();

    vec![
        // File
        ("new", Chord::new("N", p)),
        ("open", Chord::new("O", p)),
        ("save", Chord::new("S", p)),
        ("saveas", Chord::new("S", ps)),
        ("print", Chord::new("P", p)),
        ("message", Chord::new("M", p)),
        ("close", Chord::new("W", p)),
        // Edit
        ("undo", Chord::new("Z", p)),
        ("redo", Chord::new("Z", ps)),
        ("selectall", Chord::new("Q", ps)),
        ("cut", Chord::new("X", ps)),
        ("copy", Chord::new("C", p)),
        ("paste", Chord::new("V", p)),
        ("paste_clipboard", Chord::new("G", ps)),
        ("duplicate", Chord::new("D", p)),
        ("reselect", Chord::new("Q", ps)),
        ("clear_console", Chord::new("L", ps)),
        ("tidyup", Chord::new("Y", p)),
        ("cordinspector", Chord::new("R", ps)),
        ("find", Chord::new("F", p)),
        ("findagain", Chord::new("F", ps)),
        ("editmode", Chord::new("E", ps)),
        ("preferences", Chord::new(keys.preferences_key, p)),
        // View
        ("zoomin", Chord::new("=", p)),
        ("zoomout", Chord::new("-", p)),
        ("zoomreset", Chord::new("0", p)),
        ("zoomoptimal", Chord::new("9", p)),
        ("zoomhoriz", Chord::new("9", p)),
        ("zoomvert", Chord::new("9", ps)),
        ("fullscreen", keys.fullscreen.clone()),
        // Put
        ("object", Chord::new("1", p)),
        ("msgbox", Chord::new("2", p)),
        ("number", Chord::new("3", p)),
        ("symbol", Chord::new("4", p)),
        ("comment", Chord::new("5", p)),
        ("dropdown", Chord::new("M", ps)),
        ("bang", Chord::new("B", ps)),
        ("toggle", Chord::new("T", ps)),
        ("number2", Chord::new("N", ps)),
        ("vslider", Chord::new("V", ps)),
        ("hslider", Chord::new("H", ps)),
        ("vradio", Chord::new("D", ps)),
        ("hradio", Chord::new("I", ps)),
        ("vu", Chord::new("U", ps)),
        ("cnv", Chord::new("C", ps)),
        // Windows
        ("nextwin", Chord::new("PageDown", p)),
        ("prevwin", Chord::new("PageUp", p)),
        ("pdwin", Chord::new("R", p)),
        // Media
        ("audio_on", Chord::new("/", p)),
        ("audio_off", Chord::new(".", p)),
        // Help
        ("browser", Chord::new("B", p)),
    ]
}
