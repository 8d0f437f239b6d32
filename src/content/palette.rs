//! The nine-color palette and the rofi color-file reader.
//!
//! Only three keys are read from the color file (`primary`, `primary-fixed`,
//! `on-primary-fixed`); the remaining six always keep their defaults. Values
//! are taken verbatim, without color-syntax validation. Parsing into real
//! colors happens later in [`crate::ui::style`].

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

static PRIMARY_RE: Lazy<Regex> = Lazy::new(|| key_pattern("primary"));
static PRIMARY_FIXED_RE: Lazy<Regex> = Lazy::new(|| key_pattern("primary-fixed"));
static ON_PRIMARY_FIXED_RE: Lazy<Regex> = Lazy::new(|| key_pattern("on-primary-fixed"));

/// `key: value;` at the start of a line, leading indentation allowed.
fn key_pattern(key: &str) -> Regex {
    let pattern = format!(r"(?m)^\s*{}:\s*([#\w]+);", regex::escape(key));
    Regex::new(&pattern).expect("static color pattern is valid")
}

fn extract(re: &Regex, content: &str) -> Option<String> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Semantic colors driving every style rule, as raw color strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub primary_fixed: String,
    pub on_primary_fixed: String,
    pub surface: String,
    pub on_surface: String,
    pub on_surface_variant: String,
    pub surface_container: String,
    pub surface_container_high: String,
    pub primary_container: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#d9c76f".into(),
            primary_fixed: "#f6e388".into(),
            on_primary_fixed: "#211b00".into(),
            surface: "#15130c".into(),
            on_surface: "#e8e2d4".into(),
            on_surface_variant: "#cdc6b4".into(),
            surface_container: "#222017".into(),
            surface_container_high: "#2c2a21".into(),
            primary_container: "#524700".into(),
        }
    }
}

impl Palette {
    /// Load the palette from an optional color file.
    ///
    /// Never fails: a missing path or file yields the defaults, a read error
    /// yields the defaults plus a warning in the log.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match read_optional(path) {
            Ok(Some(content)) => {
                log::debug!("palette: reading {}", path.display());
                Self::from_rasi(&content)
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Error loading colors from {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Merge the recognized keys found in `content` over the defaults.
    pub fn from_rasi(content: &str) -> Self {
        let mut palette = Self::default();
        if let Some(v) = extract(&PRIMARY_RE, content) {
            palette.primary = v;
        }
        if let Some(v) = extract(&PRIMARY_FIXED_RE, content) {
            palette.primary_fixed = v;
        }
        if let Some(v) = extract(&ON_PRIMARY_FIXED_RE, content) {
            palette.on_primary_fixed = v;
        }
        palette
    }

    /// All nine entries as `(name, value)`, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("primary", self.primary.as_str()),
            ("primary_fixed", self.primary_fixed.as_str()),
            ("on_primary_fixed", self.on_primary_fixed.as_str()),
            ("surface", self.surface.as_str()),
            ("on_surface", self.on_surface.as_str()),
            ("on_surface_variant", self.on_surface_variant.as_str()),
            ("surface_container", self.surface_container.as_str()),
            ("surface_container_high", self.surface_container_high.as_str()),
            ("primary_container", self.primary_container.as_str()),
        ]
    }
}

/// Read a file that is allowed to be absent.
fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
