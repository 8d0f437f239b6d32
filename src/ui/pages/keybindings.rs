//! Keybindings page: section headings followed by key-cap rows.
//!
//! The page content is built once into a [`KeybindingsView`], an ordered list
//! of items; `show` only walks that list.

use egui::{self, Align, Label, Layout};

use crate::content::keybindings::KeybindingsSource;
use crate::ui::style::StyleHandle;
use crate::ui::window::Page;

const KEYS_COLUMN_WIDTH: f32 = 200.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeybindingItem {
    Heading(String),
    Row { keys: Vec<String>, action: String },
    Notice(String),
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeybindingsView {
    pub items: Vec<KeybindingItem>,
}

impl KeybindingsView {
    pub fn build(source: &KeybindingsSource) -> Self {
        let items = match source {
            KeybindingsSource::Missing => {
                vec![KeybindingItem::Notice("No keybindings found".to_owned())]
            }
            KeybindingsSource::Failed(err) => {
                vec![KeybindingItem::Error(format!(
                    "Error loading keybindings: {err}"
                ))]
            }
            KeybindingsSource::Loaded(sections) => sections
                .iter()
                .flat_map(|section| {
                    std::iter::once(KeybindingItem::Heading(section.name.clone())).chain(
                        section.bindings.iter().map(|b| KeybindingItem::Row {
                            keys: b.keys.clone(),
                            action: b.action.clone(),
                        }),
                    )
                })
                .collect(),
        };
        Self { items }
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            KeybindingItem::Heading(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn row_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, KeybindingItem::Row { .. }))
            .count()
    }
}

pub struct KeybindingsPage {
    view: KeybindingsView,
}

impl KeybindingsPage {
    pub fn new(source: &KeybindingsSource) -> Self {
        let view = KeybindingsView::build(source);
        log::debug!(
            "keybindings page: {} sections, {} rows",
            view.headings().count(),
            view.row_count()
        );
        Self { view }
    }
}

impl Page for KeybindingsPage {
    fn name(&self) -> &str {
        "keybindings"
    }
    fn title(&self) -> &str {
        "Keybindings"
    }

    fn show(&mut self, ui: &mut egui::Ui, style: &StyleHandle) {
        ui.spacing_mut().item_spacing.y = 4.0;
        for item in &self.view.items {
            match item {
                KeybindingItem::Heading(name) => {
                    ui.add_space(8.0);
                    ui.label(style.section_title(name));
                    ui.add_space(6.0);
                }
                KeybindingItem::Row { keys, action } => {
                    ui.add_space(2.0);
                    keybind_row(ui, style, keys, action);
                    ui.add_space(2.0);
                }
                KeybindingItem::Notice(text) | KeybindingItem::Error(text) => {
                    ui.label(style.notice(text));
                }
            }
        }
    }
}

fn keybind_row(ui: &mut egui::Ui, style: &StyleHandle, keys: &[String], action: &str) {
    style.keybind_item().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 12.0;
            ui.allocate_ui_with_layout(
                egui::vec2(KEYS_COLUMN_WIDTH, ui.spacing().interact_size.y),
                Layout::left_to_right(Align::Center),
                |ui| {
                    ui.set_min_width(KEYS_COLUMN_WIDTH);
                    ui.spacing_mut().item_spacing.x = 3.0;
                    for key in keys {
                        style.keybind_key().show(ui, |ui| {
                            ui.label(style.keybind_key_text(key));
                        });
                    }
                },
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.add(Label::new(style.keybind_action(action)).truncate());
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Binding, KeybindingSection};
    use crate::ui::pages::test_support::render_headless;

    fn section(name: &str, bindings: Vec<(Vec<&str>, &str)>) -> KeybindingSection {
        KeybindingSection {
            name: name.to_owned(),
            bindings: bindings
                .into_iter()
                .map(|(keys, action)| Binding {
                    keys: keys.into_iter().map(str::to_owned).collect(),
                    action: action.to_owned(),
                })
                .collect(),
        }
    }

    #[test]
    fn apps_example_renders_one_heading_and_one_row() {
        let src = KeybindingsSource::from_json(
            r#"{"sections":[{"name":"Apps","bindings":[{"keys":["SUPER","Return"],"action":"Open terminal"}]}]}"#,
        );
        let view = KeybindingsView::build(&src);
        assert_eq!(
            view.items,
            vec![
                KeybindingItem::Heading("Apps".into()),
                KeybindingItem::Row {
                    keys: vec!["SUPER".into(), "Return".into()],
                    action: "Open terminal".into(),
                },
            ]
        );
    }

    #[test]
    fn sections_and_rows_follow_file_order() {
        let src = KeybindingsSource::Loaded(vec![
            section(
                "Windows",
                vec![
                    (vec!["SUPER", "Q"], "Close"),
                    (vec!["SUPER", "F"], "Fullscreen"),
                ],
            ),
            section("Empty", vec![]),
            section("Media", vec![(vec!["XF86AudioPlay"], "Play / pause")]),
        ]);
        let view = KeybindingsView::build(&src);
        assert_eq!(view.headings().collect::<Vec<_>>(), ["Windows", "Empty", "Media"]);
        assert_eq!(view.row_count(), 3);

        let actions: Vec<_> = view
            .items
            .iter()
            .filter_map(|i| match i {
                KeybindingItem::Row { action, .. } => Some(action.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(actions, ["Close", "Fullscreen", "Play / pause"]);
        assert_eq!(
            view.items[2],
            KeybindingItem::Row {
                keys: vec!["SUPER".into(), "F".into()],
                action: "Fullscreen".into(),
            }
        );
    }

    #[test]
    fn missing_file_shows_a_single_notice() {
        let view = KeybindingsView::build(&KeybindingsSource::Missing);
        assert_eq!(
            view.items,
            vec![KeybindingItem::Notice("No keybindings found".into())]
        );
        assert_eq!(view.headings().count(), 0);
    }

    #[test]
    fn malformed_file_shows_a_single_error() {
        let src = KeybindingsSource::from_json("{\"sections\": [");
        let view = KeybindingsView::build(&src);
        assert_eq!(view.items.len(), 1);
        assert!(matches!(
            &view.items[0],
            KeybindingItem::Error(msg) if msg.starts_with("Error loading keybindings: ")
        ));
        assert_eq!(view.headings().count(), 0);
        assert_eq!(view.row_count(), 0);
    }

    #[test]
    fn renders_headless_in_every_state() {
        let loaded = KeybindingsSource::Loaded(vec![section(
            "Apps",
            vec![(
                vec!["SUPER", "SHIFT", "Return"],
                "Open a floating terminal with a long label",
            )],
        )]);
        for src in [
            loaded,
            KeybindingsSource::Missing,
            KeybindingsSource::Failed("boom".into()),
        ] {
            let mut page = KeybindingsPage::new(&src);
            assert!(!page.view.items.is_empty());
            render_headless(&mut page);
        }
    }
}
