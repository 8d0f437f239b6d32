//! Tab pages, each implementing `Page`.

pub mod keybindings;
pub mod settings;
pub mod workspaces;
