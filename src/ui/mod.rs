//! UI layer: app orchestrator, `Page` trait and tab container, style sheet,
//! header and pages.

pub mod app;
pub mod colors;
pub mod header;
pub mod pages;
pub mod style;
pub mod window;
