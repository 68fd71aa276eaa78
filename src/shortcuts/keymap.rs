//! Per-context keymaps: canonical chord string → bound action.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use super::table::{ShortcutTable, Variant};
use super::types::Chord;
use crate::error::{Result, ShortcutError};

/// Callback run when a bound chord is pressed. Takes nothing, returns nothing.
pub type ActionHandler = Arc<dyn Fn() + Send + Sync>;

/// A command bound to a chord inside one keymap.
#[derive(Clone)]
pub struct Binding {
    pub command: String,
    pub chord: Chord,
    handler: ActionHandler,
}

impl Binding {
    pub fn invoke(&self) {
        (self.handler)();
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("command", &self.command)
            .field("chord", &self.chord.canonical())
            .finish_non_exhaustive()
    }
}

/// A binding displaced by a later binding on the same chord.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadowedBinding {
    pub chord: String,
    /// The command that is no longer reachable.
    pub shadowed: String,
    /// The command that now owns the chord.
    pub winner: String,
}

/// The chord table of one context.
#[derive(Debug)]
pub struct Keymap {
    context: String,
    bindings: HashMap<String, Binding>,
    order: Vec<String>,
    shadowed: Vec<ShadowedBinding>,
}

impl Keymap {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            bindings: HashMap::new(),
            order: Vec::new(),
            shadowed: Vec::new(),
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// Bind `command` to `chord`.
    ///
    /// A chord can only reach one command. Binding an already bound chord
    /// replaces the earlier binding; the displaced command is recorded in
    /// [`Keymap::shadowed`].
    pub fn bind(&mut self, command: impl Into<String>, chord: Chord, handler: ActionHandler) {
        let command = command.into();
        let canonical = chord.canonical();
        let binding = Binding {
            command: command.clone(),
            chord,
            handler,
        };

        match self.bindings.insert(canonical.clone(), binding) {
            Some(previous) => {
                warn!(
                    event_type = "keymap",
                    context = %self.context,
                    chord = %canonical,
                    shadowed = %previous.command,
                    winner = %command,
                    "Chord already bound, later binding wins"
                );
                self.shadowed.push(ShadowedBinding {
                    chord: canonical,
                    shadowed: previous.command,
                    winner: command,
                });
            }
            None => self.order.push(canonical),
        }
    }

    /// Bind `command` using the chord the table holds for it.
    pub fn bind_from_table(
        &mut self,
        table: &ShortcutTable,
        variant: Variant,
        command: &str,
        handler: ActionHandler,
    ) -> Result<()> {
        let chord = table
            .get(command, variant)
            .cloned()
            .ok_or_else(|| ShortcutError::UnknownCommand(command.to_string()))?;
        self.bind(command, chord, handler);
        Ok(())
    }

    /// Look up a canonical chord string.
    pub fn get(&self, canonical: &str) -> Option<&Binding> {
        self.bindings.get(canonical)
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.bindings.contains_key(canonical)
    }

    /// Reachable bindings, in the order their chords were first bound.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.order.iter().filter_map(move |c| self.bindings.get(c))
    }

    /// Names of the reachable commands.
    pub fn commands(&self) -> Vec<&str> {
        self.bindings().map(|b| b.command.as_str()).collect()
    }

    pub fn shadowed(&self) -> &[ShadowedBinding] {
        &self.shadowed
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
