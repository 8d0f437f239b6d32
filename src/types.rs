//! Shared data-model types: the keybindings file schema and the static
//! workspace / setting rows.
//!
//! # Keybindings schema
//!
//! ```json
//! { "sections": [ { "name": "Apps",
//!                   "bindings": [ { "keys": ["SUPER", "Return"],
//!                                   "action": "Open terminal" } ] } ] }
//! ```
//!
//! A missing `sections` or `bindings` array reads as empty. `name`, `keys`
//! and `action` are required; any other deviation fails the whole file.

use serde::Deserialize;

// ── Keybindings file ───────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
pub struct KeybindingsFile {
    #[serde(default)]
    pub sections: Vec<KeybindingSection>,
}

/// A named group of related bindings, kept in file order.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct KeybindingSection {
    pub name: String,
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// One shortcut: the key-caps in press order and what they do.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<String>,
    pub action: String,
}

// ── Static rows ────────────────────────────────────────────────────────────────

/// Descriptive tile for one virtual desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceEntry {
    pub index: &'static str,
    pub name: &'static str,
    pub shortcut: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingEntry {
    pub label: &'static str,
    pub value: &'static str,
}

/// A titled, ordered list of settings.
#[derive(Debug, Clone, Copy)]
pub struct SettingGroup {
    pub title: &'static str,
    pub entries: &'static [SettingEntry],
}
