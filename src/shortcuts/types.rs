//! Core chord types with proper error handling and platform-aware modifiers.
//!
//! This module provides:
//! - `Chord` - A key plus a modifier set, with a canonical lookup string
//! - `Modifiers` - Modifier key flags (cmd, ctrl, shift, alt)
//! - `Platform` / `PlatformModifier` - Which key acts as the primary accelerator
//! - `ChordParseError` - Detailed parse errors for user-supplied chord strings

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a chord string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChordParseError {
    #[error("chord string is empty")]
    Empty,
    #[error("chord has no key, only modifiers")]
    MissingKey,
    #[error("unexpected token '{0}' in chord")]
    UnknownToken(String),
}

/// Modifier keys held during a chord.
///
/// `cmd` is the Command key on macOS and the Meta/Super key elsewhere.
/// The table never binds it outside macOS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub cmd: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
}

impl Modifiers {
    pub fn primary(modifier: PlatformModifier) -> Self {
        match modifier {
            PlatformModifier::Cmd => Self {
                cmd: true,
                ..Default::default()
            },
            PlatformModifier::Ctrl => Self {
                ctrl: true,
                ..Default::default()
            },
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn none(&self) -> bool {
        !(self.cmd || self.ctrl || self.shift || self.alt)
    }

    /// Modifier prefix in canonical order: `Cmd+Ctrl+Shift+Alt+`.
    pub fn canonical_prefix(&self) -> String {
        let mut s = String::new();
        if self.cmd {
            s.push_str("Cmd+");
        }
        if self.ctrl {
            s.push_str("Ctrl+");
        }
        if self.shift {
            s.push_str("Shift+");
        }
        if self.alt {
            s.push_str("Alt+");
        }
        s
    }
}

/// Host platform, derived from an explicit descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
}

impl Platform {
    /// Platform of the running binary. Only the CLI and config layer call
    /// this; table construction always receives the platform explicitly.
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOS
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Platform::Linux
        }
    }

    /// Interpret a platform descriptor.
    ///
    /// Accepts both process-style names (`darwin`, `win32`, `linux`) and
    /// navigator-style strings (`MacIntel`, `Win32`, `Linux x86_64`).
    pub fn from_descriptor(descriptor: &str) -> Self {
        let upper = descriptor.trim().to_uppercase();
        if upper == "DARWIN" || upper.contains("MAC") {
            Platform::MacOS
        } else if upper.starts_with("WIN") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    pub fn is_mac(&self) -> bool {
        matches!(self, Platform::MacOS)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

/// The primary accelerator modifier for a platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlatformModifier {
    Cmd,
    Ctrl,
}

impl PlatformModifier {
    pub fn token(&self) -> &'static str {
        match self {
            PlatformModifier::Cmd => "Cmd",
            PlatformModifier::Ctrl => "Ctrl",
        }
    }
}

impl fmt::Display for PlatformModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// `Cmd` on macOS, `Ctrl` everywhere else.
pub fn resolve_platform_modifier(platform: Platform) -> PlatformModifier {
    if platform.is_mac() {
        PlatformModifier::Cmd
    } else {
        PlatformModifier::Ctrl
    }
}

/// A key plus the modifiers held with it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    pub key: String,
    pub modifiers: Modifiers,
}

impl Chord {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    /// A chord with no modifiers (e.g. `F11`).
    pub fn bare(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::default())
    }

    /// Parse a user-supplied chord such as `cmd+shift+s` or `Ctrl+PageDown`.
    ///
    /// A trailing `+` is taken as the plus key itself (`ctrl++`).
    pub fn parse(s: &str) -> Result<Self, ChordParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ChordParseError::Empty);
        }

        let mut parts: Vec<&str> = s.split('+').collect();
        if s.ends_with("++") || s == "+" {
            // "ctrl++" splits into [.., "", ""]; collapse the tail into "+".
            while parts.last() == Some(&"") {
                parts.pop();
            }
            parts.push("+");
        }

        let mut modifiers = Modifiers::default();
        let mut key_part: Option<&str> = None;

        for part in parts {
            let token = part.trim();
            if token.is_empty() {
                continue;
            }
            match token.to_lowercase().as_str() {
                "cmd" | "command" | "meta" | "super" | "⌘" => modifiers.cmd = true,
                "ctrl" | "control" | "ctl" | "^" => modifiers.ctrl = true,
                "shift" | "⇧" => modifiers.shift = true,
                "alt" | "opt" | "option" | "⌥" => modifiers.alt = true,
                _ => {
                    if key_part.is_some() {
                        return Err(ChordParseError::UnknownToken(token.to_string()));
                    }
                    key_part = Some(token);
                }
            }
        }

        let key = key_part.ok_or(ChordParseError::MissingKey)?;
        Ok(Self::new(key, modifiers))
    }

    /// Canonical lookup string: modifier prefix plus the uppercased key.
    pub fn canonical(&self) -> String {
        canonical_chord_string(&self.modifiers, &self.key)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Uppercase a key token for lookup.
///
/// Line feed and carriage return are reported by hosts as `Enter`, so they
/// collapse onto the same token.
pub fn canonical_key(key: &str) -> String {
    match key {
        "\n" | "\r" | "\r\n" => "ENTER".to_string(),
        k => k.to_uppercase(),
    }
}

/// Build the canonical chord string from a modifier set and a key token.
pub fn canonical_chord_string(modifiers: &Modifiers, key: &str) -> String {
    let mut s = modifiers.canonical_prefix();
    s.push_str(&canonical_key(key));
    s
}
