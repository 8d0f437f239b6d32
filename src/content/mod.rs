//! Content sources: the color palette, the keybindings file, and the
//! compiled-in workspace and settings tables.

pub mod catalog;
pub mod keybindings;
pub mod palette;
