//! Key-down dispatch against the keymap of the active context.
//!
//! Contexts are independent: a miss in one context never falls through to
//! another, including the default context `""`.

use std::collections::HashMap;

use tracing::{debug, info};

use super::keymap::{Binding, Keymap};
use super::types::{canonical_chord_string, Modifiers};
use crate::error::{Result, ShortcutError};
use crate::logging;

/// A key-down notification from the host UI runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub ctrl: bool,
    pub cmd: bool,
    pub shift: bool,
    pub alt: bool,
    /// Key identifier as reported by the host (`s`, `PageDown`, `Enter`).
    pub key: String,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn cmd(mut self) -> Self {
        self.cmd = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            cmd: self.cmd,
            ctrl: self.ctrl,
            shift: self.shift,
            alt: self.alt,
        }
    }

    /// Stop the host from running its own behavior for this key.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Canonical chord string for a live event.
pub fn canonical_chord(event: &KeyEvent) -> String {
    canonical_chord_string(&event.modifiers(), &event.key)
}

/// Result of a key-down dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A binding matched: default suppressed and the action invoked.
    Handled { command: String },
    /// Nothing matched: the host's default behavior proceeds.
    Unhandled,
}

impl KeyOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, KeyOutcome::Handled { .. })
    }
}

/// Routes key events to the keymap registered for each context.
#[derive(Debug, Default)]
pub struct Resolver {
    contexts: HashMap<String, Keymap>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a keymap under its context, replacing any earlier keymap for
    /// the same context.
    pub fn register_context(&mut self, keymap: Keymap) {
        let context = keymap.context().to_string();
        if self.contexts.insert(context.clone(), keymap).is_some() {
            debug!(event_type = "resolver", context = %context, "Replaced keymap for context");
        }
    }

    pub fn keymap(&self, context: &str) -> Option<&Keymap> {
        self.contexts.get(context)
    }

    pub fn has_context(&self, context: &str) -> bool {
        self.contexts.contains_key(context)
    }

    /// Registered context names, sorted.
    pub fn contexts(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.contexts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Side-effect-free lookup. `None` for a miss or an unregistered context.
    pub fn resolve(&self, event: &KeyEvent, context: &str) -> Option<&Binding> {
        self.contexts
            .get(context)
            .and_then(|keymap| keymap.get(&canonical_chord(event)))
    }

    /// Dispatch a key-down event.
    ///
    /// An unregistered context behaves like a context with no matching chord.
    pub fn on_key_down(&self, event: &mut KeyEvent, context: &str) -> KeyOutcome {
        if !self.has_context(context) {
            debug!(
                event_type = "resolver",
                context = %context,
                "Key event for unregistered context ignored"
            );
            return KeyOutcome::Unhandled;
        }
        self.dispatch(event, context)
    }

    /// Like [`Resolver::on_key_down`], but an unregistered context is an error.
    pub fn try_on_key_down(&self, event: &mut KeyEvent, context: &str) -> Result<KeyOutcome> {
        if !self.has_context(context) {
            return Err(ShortcutError::UnknownContext(context.to_string()));
        }
        Ok(self.dispatch(event, context))
    }

    fn dispatch(&self, event: &mut KeyEvent, context: &str) -> KeyOutcome {
        let chord = canonical_chord(event);
        let Some(binding) = self.resolve(event, context) else {
            logging::log_key_event(&event.key, &chord, "unbound");
            return KeyOutcome::Unhandled;
        };

        event.prevent_default();
        info!(
            event_type = "shortcut",
            context = %context,
            chord = %chord,
            command = %binding.command,
            "Shortcut triggered"
        );
        binding.invoke();

        KeyOutcome::Handled {
            command: binding.command.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::types::Chord;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, crate::shortcuts::ActionHandler) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let handler: crate::shortcuts::ActionHandler = Arc::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (count, handler)
    }

    #[test]
    fn canonical_order_is_fixed() {
        let a = KeyEvent::new("s").alt().shift().ctrl();
        let b = KeyEvent::new("s").ctrl().alt().shift();
        assert_eq!(canonical_chord(&a), "Ctrl+Shift+Alt+S");
        assert_eq!(canonical_chord(&a), canonical_chord(&b));
    }

    #[test]
    fn named_keys_are_uppercased() {
        assert_eq!(canonical_chord(&KeyEvent::new("PageDown").cmd()), "Cmd+PAGEDOWN");
        assert_eq!(canonical_chord(&KeyEvent::new("F11")), "F11");
    }

    #[test]
    fn hit_prevents_default_and_invokes_once() {
        let (count, handler) = counter();
        let mut keymap = Keymap::new("");
        keymap.bind("save", Chord::parse("ctrl+s").unwrap(), handler);
        let mut resolver = Resolver::new();
        resolver.register_context(keymap);

        let mut event = KeyEvent::new("s").ctrl();
        let outcome = resolver.on_key_down(&mut event, "");

        assert_eq!(
            outcome,
            KeyOutcome::Handled {
                command: "save".into()
            }
        );
        assert!(event.default_prevented());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn miss_leaves_event_untouched() {
        let (count, handler) = counter();
        let mut keymap = Keymap::new("");
        keymap.bind("save", Chord::parse("ctrl+s").unwrap(), handler);
        let mut resolver = Resolver::new();
        resolver.register_context(keymap);

        let mut event = KeyEvent::new("s").ctrl().alt();
        assert_eq!(resolver.on_key_down(&mut event, ""), KeyOutcome::Unhandled);
        assert!(!event.default_prevented());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unregistered_context_is_a_miss_or_an_error() {
        let resolver = Resolver::new();
        let mut event = KeyEvent::new("s").ctrl();

        assert_eq!(resolver.on_key_down(&mut event, "nowhere"), KeyOutcome::Unhandled);
        assert!(!event.default_prevented());
        assert!(matches!(
            resolver.try_on_key_down(&mut event, "nowhere"),
            Err(ShortcutError::UnknownContext(c)) if c == "nowhere"
        ));
    }

    #[test]
    fn contexts_do_not_fall_through_to_default() {
        let (count, handler) = counter();
        let mut main = Keymap::new("");
        main.bind("findagain", Chord::parse("ctrl+g").unwrap(), handler);
        let mut resolver = Resolver::new();
        resolver.register_context(main);
        resolver.register_context(Keymap::new("console"));

        let mut event = KeyEvent::new("g").ctrl();
        assert_eq!(resolver.on_key_down(&mut event, "console"), KeyOutcome::Unhandled);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn registering_a_context_again_replaces_it() {
        let (_, first) = counter();
        let (second_count, second) = counter();
        let mut resolver = Resolver::new();

        let mut keymap = Keymap::new("console");
        keymap.bind("copy", Chord::parse("ctrl+c").unwrap(), first);
        resolver.register_context(keymap);

        let mut keymap = Keymap::new("console");
        keymap.bind("clear_console", Chord::parse("ctrl+shift+l").unwrap(), second);
        resolver.register_context(keymap);

        assert_eq!(resolver.contexts(), vec!["console"]);
        assert!(resolver.resolve(&KeyEvent::new("c").ctrl(), "console").is_none());

        let mut event = KeyEvent::new("l").ctrl().shift();
        assert!(resolver.on_key_down(&mut event, "console").is_handled());
        assert_eq!(second_count.load(Ordering::SeqCst), 1);
    }
}
