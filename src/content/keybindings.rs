//! Keybindings file loader.
//!
//! The outcome is one of three explicit states rather than an error: the page
//! renders a notice for [`KeybindingsSource::Missing`] and
//! [`KeybindingsSource::Failed`], and the sections otherwise.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::types::{KeybindingSection, KeybindingsFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeybindingsSource {
    /// No file at the expected location.
    Missing,
    /// The file exists but could not be read or parsed. Holds the error text.
    Failed(String),
    /// Sections in file order.
    Loaded(Vec<KeybindingSection>),
}

impl KeybindingsSource {
    /// Load from an optional path. Never fails.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.filter(|p| p.exists()) else {
            log::info!("keybindings: no file found");
            return Self::Missing;
        };
        let source = match fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content),
            Err(e) => Self::Failed(AppError::from(e).to_string()),
        };
        match &source {
            Self::Loaded(sections) => log::debug!(
                "keybindings: {} sections from {}",
                sections.len(),
                path.display()
            ),
            Self::Failed(e) => log::warn!("keybindings: {}: {e}", path.display()),
            Self::Missing => {}
        }
        source
    }

    /// Parse file contents. The whole file fails on the first shape error.
    pub fn from_json(json: &str) -> Self {
        match parse(json) {
            Ok(file) => Self::Loaded(file.sections),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Derived struct deserializers also take positional arrays, so the file,
/// each section and each binding are checked to be objects first.
fn parse(json: &str) -> Result<KeybindingsFile> {
    let value: Value = serde_json::from_str(json)?;
    require_object(&value, "keybindings file")?;
    if let Some(sections) = value.get("sections").and_then(Value::as_array) {
        for (i, section) in sections.iter().enumerate() {
            require_object(section, &format!("section {i}"))?;
            let Some(bindings) = section.get("bindings").and_then(Value::as_array) else {
                continue;
            };
            for (j, binding) in bindings.iter().enumerate() {
                require_object(binding, &format!("binding {j} of section {i}"))?;
            }
        }
    }
    Ok(serde_json::from_value(value)?)
}

fn require_object(value: &Value, what: &str) -> Result<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(AppError::Shape(format!("{what}: expected an object, found {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Binding;

    const APPS: &str = r#"{"sections":[{"name":"Apps","bindings":[{"keys":["SUPER","Return"],"action":"Open terminal"}]}]}"#;

    #[test]
    fn parses_sections_in_order() {
        let src = KeybindingsSource::from_json(APPS);
        assert_eq!(
            src,
            KeybindingsSource::Loaded(vec![KeybindingSection {
                name: "Apps".into(),
                bindings: vec![Binding {
                    keys: vec!["SUPER".into(), "Return".into()],
                    action: "Open terminal".into(),
                }],
            }])
        );
    }

    #[test]
    fn missing_arrays_read_as_empty() {
        assert_eq!(
            KeybindingsSource::from_json("{}"),
            KeybindingsSource::Loaded(vec![])
        );
        let KeybindingsSource::Loaded(sections) =
            KeybindingsSource::from_json(r#"{"sections":[{"name":"Empty"}]}"#)
        else {
            panic!("expected sections");
        };
        assert_eq!(sections[0].name, "Empty");
        assert!(sections[0].bindings.is_empty());
    }

    #[test]
    fn shape_errors_fail_the_whole_file() {
        // Second binding lacks `action`: no partial recovery.
        let json = r#"{"sections":[{"name":"A","bindings":[
            {"keys":["SUPER","Q"],"action":"Close"},
            {"keys":["SUPER","W"]}]}]}"#;
        assert!(matches!(
            KeybindingsSource::from_json(json),
            KeybindingsSource::Failed(_)
        ));
    }

    #[test]
    fn non_object_shapes_are_rejected() {
        for json in [
            "[]",
            "null",
            r#"[[{"name":"X"}]]"#,
            r#"{"sections":[["Apps",[[["SUPER","Return"],"Open terminal"]]]]}"#,
            r#"{"sections":[{"name":"Apps","bindings":[[["SUPER","Return"],"Open terminal"]]}]}"#,
            r#"{"sections":null}"#,
        ] {
            assert!(
                matches!(KeybindingsSource::from_json(json), KeybindingsSource::Failed(_)),
                "{json} should fail"
            );
        }
    }

    #[test]
    fn shape_error_names_the_offending_entry() {
        let json = r#"{"sections":[{"name":"A","bindings":[{"keys":["Q"],"action":"Quit"},["W","x"]]}]}"#;
        let KeybindingsSource::Failed(msg) = KeybindingsSource::from_json(json) else {
            panic!("expected a shape failure");
        };
        assert!(msg.starts_with("binding 1 of section 0"), "{msg}");
    }

    #[test]
    fn load_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keybindings.json");
        assert_eq!(
            KeybindingsSource::load(Some(&path)),
            KeybindingsSource::Missing
        );
        assert_eq!(KeybindingsSource::load(None), KeybindingsSource::Missing);

        fs::write(&path, "{ not json").unwrap();
        let KeybindingsSource::Failed(msg) = KeybindingsSource::load(Some(&path)) else {
            panic!("expected a parse failure");
        };
        assert!(!msg.is_empty());

        fs::write(&path, APPS).unwrap();
        assert!(matches!(
            KeybindingsSource::load(Some(&path)),
            KeybindingsSource::Loaded(s) if s.len() == 1
        ));
    }
}
