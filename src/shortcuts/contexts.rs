//! The editor's standard contexts and the commands each one binds.
//!
//! The patch canvas uses the default context `""`; the console window uses
//! `"console"`. The host supplies the actual callbacks through an
//! [`ActionSet`].

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::keymap::{ActionHandler, Keymap};
use super::resolver::Resolver;
use super::table::{ShortcutTable, Variant};
use crate::error::{Result, ShortcutError};

pub const CANVAS_CONTEXT: &str = "";
pub const CONSOLE_CONTEXT: &str = "console";

/// Commands bound by the patch canvas window: the whole desktop menu.
pub fn canvas_commands() -> &'static [&'static str] {
    &[
        "new",
        "open",
        "save",
        "saveas",
        "print",
        "message",
        "close",
        "quit",
        "undo",
        "redo",
        "selectall",
        "cut",
        "copy",
        "paste",
        "paste_clipboard",
        "duplicate",
        "reselect",
        "clear_console",
        "tidyup",
        "cordinspector",
        "find",
        "findagain",
        "editmode",
        "preferences",
        "zoomin",
        "zoomout",
        "zoomreset",
        "zoomoptimal",
        "zoomhoriz",
        "zoomvert",
        "fullscreen",
        "object",
        "msgbox",
        "number",
        "symbol",
        "comment",
        "dropdown",
        "bang",
        "toggle",
        "number2",
        "vslider",
        "hslider",
        "vradio",
        "hradio",
        "vu",
        "cnv",
        "nextwin",
        "prevwin",
        "pdwin",
        "audio_on",
        "audio_off",
        "browser",
    ]
}

/// Commands bound by the console window. No patch editing, no find-again.
pub fn console_commands() -> &'static [&'static str] {
    &[
        "new",
        "open",
        "message",
        "close",
        "quit",
        "selectall",
        "copy",
        "clear_console",
        "find",
        "preferences",
        "zoomin",
        "zoomout",
        "zoomreset",
        "fullscreen",
        "nextwin",
        "prevwin",
        "pdwin",
        "audio_on",
        "audio_off",
        "browser",
    ]
}

/// Callbacks the host provides, keyed by command name.
#[derive(Clone, Default)]
pub struct ActionSet {
    actions: HashMap<String, ActionHandler>,
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(mut self, command: impl Into<String>, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.insert(command, Arc::new(action));
        self
    }

    pub fn insert(&mut self, command: impl Into<String>, handler: ActionHandler) {
        self.actions.insert(command.into(), handler);
    }

    pub fn get(&self, command: &str) -> Option<&ActionHandler> {
        self.actions.get(command)
    }
}

/// Build the keymap for `context` from `commands` and register it.
///
/// Commands without a callback in `actions` are left unbound, as are
/// commands the table only defines for the other variant (`quit` has no web
/// binding). A command missing from both variants is an error.
pub fn install_context(
    resolver: &mut Resolver,
    table: &ShortcutTable,
    variant: Variant,
    context: &str,
    commands: &[&str],
    actions: &ActionSet,
) -> Result<()> {
    let mut keymap = Keymap::new(context);
    for &command in commands {
        let Some(chord) = table.get(command, variant) else {
            if !table.defines(command) {
                return Err(ShortcutError::UnknownCommand(command.to_string()));
            }
            debug!(
                event_type = "keymap",
                context = %context,
                command = command,
                variant = ?variant,
                "Command has no chord in this variant, left unbound"
            );
            continue;
        };
        let Some(handler) = actions.get(command) else {
            debug!(
                event_type = "keymap",
                context = %context,
                command = command,
                "No action registered, command left unbound"
            );
            continue;
        };
        keymap.bind(command, chord.clone(), handler.clone());
    }

    debug!(
        event_type = "keymap",
        context = %context,
        bound = keymap.len(),
        shadowed = keymap.shadowed().len(),
        "Installed context keymap"
    );
    resolver.register_context(keymap);
    Ok(())
}
