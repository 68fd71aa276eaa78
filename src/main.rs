//! purr-shortcuts - inspect the editor's shortcut tables
//!
//! # Usage
//!
//! ```bash
//! purr-shortcuts list --platform darwin --variant web
//! purr-shortcuts resolve "cmd+s" --platform darwin
//! purr-shortcuts resolve "ctrl+g" --context console
//! purr-shortcuts conflicts --platform linux
//! ```

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use purr_shortcuts::config;
use purr_shortcuts::error::ResultExt;
use purr_shortcuts::logging;
use purr_shortcuts::shortcuts::{
    build_table_with_policy, canvas_commands, console_commands, install_context, ActionSet, Chord,
    KeyEvent, KeyOutcome, Resolver, ShortcutTable, Variant, CANVAS_CONTEXT,
    CONSOLE_CONTEXT,
};

#[derive(Parser, Debug)]
#[command(name = "purr-shortcuts", version, about = "Inspect Purr Data keyboard shortcuts")]
struct Cli {
    /// Config file (default: ~/.purr-data/shortcuts.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Platform descriptor, e.g. darwin, win32, linux, MacIntel
    #[arg(long, global = true)]
    platform: Option<String>,

    /// Binding set
    #[arg(long, global = true, value_enum)]
    variant: Option<VariantArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every command and its chord
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show which command a chord triggers in a context
    Resolve {
        /// Chord such as "cmd+shift+s" or "Ctrl+PageDown"
        chord: String,
        /// Context name; the canvas is the empty string
        #[arg(long, default_value = "")]
        context: String,
    },
    /// List chords shared by several commands
    Conflicts,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Desktop,
    Web,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Desktop => Variant::Desktop,
            VariantArg::Web => Variant::Web,
        }
    }
}

#[derive(Serialize)]
struct ListEntry<'a> {
    command: String,
    chord: String,
    binding: &'a Chord,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        // An explicit path that cannot be loaded is a hard error.
        Some(path) => config::read_config(path)?,
        None => logging::with_bootstrap(|| config::load_config(&config::default_config_path())),
    };
    if let Some(platform) = cli.platform {
        config.platform = Some(platform);
    }
    if let Some(variant) = cli.variant {
        config.variant = variant.into();
    }

    let _guard = logging::init(&config);

    let platform = config.platform();
    let table = build_table_with_policy(platform, config.duplicate_policy)
        .context("building shortcut table")?;

    match cli.command {
        Command::List { json } => list(&table, config.variant, json),
        Command::Resolve { chord, context } => {
            resolve(&table, config.variant, &chord, &context)
        }
        Command::Conflicts => {
            conflicts(&table, config.variant);
            Ok(())
        }
    }
}

fn list(table: &ShortcutTable, variant: Variant, json: bool) -> Result<()> {
    let entries: Vec<ListEntry> = table
        .variant(variant)
        .map(|(key, chord)| ListEntry {
            command: key.table_name(),
            chord: chord.canonical(),
            binding: chord,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("# {} ({:?})", table.platform().name(), variant);
        for entry in entries {
            println!("{:20} {}", entry.command, entry.chord);
        }
    }
    Ok(())
}

fn resolve(table: &ShortcutTable, variant: Variant, chord: &str, context: &str) -> Result<()> {
    let chord = Chord::parse(chord).with_context(|| format!("parsing chord '{}'", chord))?;

    // Every command gets a no-op action; only the routing is of interest here.
    let actions = canvas_commands()
        .iter()
        .fold(ActionSet::new(), |set, &command| set.on(command, || {}));
    let mut resolver = Resolver::new();
    install_context(&mut resolver, table, variant, CANVAS_CONTEXT, canvas_commands(), &actions)?;
    install_context(&mut resolver, table, variant, CONSOLE_CONTEXT, console_commands(), &actions)?;

    let mut event = KeyEvent::new(chord.key.clone());
    event.cmd = chord.modifiers.cmd;
    event.ctrl = chord.modifiers.ctrl;
    event.shift = chord.modifiers.shift;
    event.alt = chord.modifiers.alt;

    let Some(outcome) = resolver.try_on_key_down(&mut event, context).log_err() else {
        println!("{}: no such context '{}'", chord, context);
        return Ok(());
    };
    match outcome {
        KeyOutcome::Handled { command } => println!("{} -> {}", chord, command),
        KeyOutcome::Unhandled => println!("{} -> (unbound)", chord),
    }
    Ok(())
}

fn conflicts(table: &ShortcutTable, variant: Variant) {
    let conflicts = table.chord_conflicts(variant);
    if conflicts.is_empty() {
        println!("no shared chords");
        return;
    }
    for conflict in conflicts {
        let winner = conflict.commands.last().map(String::as_str).unwrap_or_default();
        println!(
            "{:16} {} (reachable: {})",
            conflict.chord,
            conflict.commands.join(", "),
            winner
        );
    }
}
