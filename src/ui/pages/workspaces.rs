//! Workspaces page: one card per virtual desktop, wrapped two to a row.

use egui::{self, Label};

use crate::content::catalog::WORKSPACES;
use crate::types::WorkspaceEntry;
use crate::ui::style::StyleHandle;
use crate::ui::window::Page;

const MAX_PER_ROW: usize = 2;
const CARD_WIDTH: f32 = 260.0;
const CARD_MIN_HEIGHT: f32 = 120.0;
const CARD_SPACING: f32 = 16.0;
/// Inner margin plus the 1 px border, per side.
const CARD_INSET: f32 = 19.0;
/// Roughly thirty characters of the description font.
const DESC_MAX_WIDTH: f32 = 200.0;

pub struct WorkspacesPage {
    entries: &'static [WorkspaceEntry],
}

impl Default for WorkspacesPage {
    fn default() -> Self {
        Self {
            entries: &WORKSPACES,
        }
    }
}

/// How many cards fit side by side in `width`, between 1 and `MAX_PER_ROW`.
pub fn cards_per_row(width: f32) -> usize {
    let fit = ((width + CARD_SPACING) / (CARD_WIDTH + CARD_SPACING)).floor() as usize;
    fit.clamp(1, MAX_PER_ROW)
}

impl WorkspacesPage {
    /// Entries grouped into display rows.
    pub fn rows(&self, per_row: usize) -> Vec<&[WorkspaceEntry]> {
        self.entries.chunks(per_row.max(1)).collect()
    }
}

impl Page for WorkspacesPage {
    fn name(&self) -> &str {
        "workspaces"
    }
    fn title(&self) -> &str {
        "Workspaces"
    }

    fn show(&mut self, ui: &mut egui::Ui, style: &StyleHandle) {
        let per_row = cards_per_row(ui.available_width());
        let row_width =
            per_row as f32 * CARD_WIDTH + (per_row.saturating_sub(1)) as f32 * CARD_SPACING;

        for (i, row) in self.rows(per_row).into_iter().enumerate() {
            if i > 0 {
                ui.add_space(CARD_SPACING);
            }
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = CARD_SPACING;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                for entry in row {
                    workspace_card(ui, style, entry);
                }
            });
        }
    }
}

fn workspace_card(ui: &mut egui::Ui, style: &StyleHandle, entry: &WorkspaceEntry) {
    let mut prepared = style.workspace_card(false).begin(ui);
    {
        let ui = &mut prepared.content_ui;
        ui.set_width(CARD_WIDTH - 2.0 * CARD_INSET);
        ui.set_min_height(CARD_MIN_HEIGHT - 2.0 * CARD_INSET);
        ui.spacing_mut().item_spacing.y = 8.0;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 10.0;
            ui.label(style.workspace_number(entry.index));
            ui.label(style.workspace_name(entry.name));
        });
        ui.scope(|ui| {
            ui.set_max_width(DESC_MAX_WIDTH);
            ui.add(Label::new(style.workspace_desc(entry.description)).wrap());
        });
        ui.add_space(4.0);
        ui.label(style.workspace_desc(&format!("Press {}", entry.shortcut)));
    }
    let response = prepared.allocate_space(ui);
    if response.hovered() {
        prepared.frame = style.workspace_card(true);
    }
    prepared.paint(ui);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::pages::test_support::render_headless;

    #[test]
    fn four_entries_wrap_into_two_rows() {
        let page = WorkspacesPage::default();
        let rows = page.rows(MAX_PER_ROW);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].name, "Browser");
        assert_eq!(rows[1][1].name, "Music");
        assert_eq!(page.rows(1).len(), 4);
    }

    #[test]
    fn never_more_than_two_per_row() {
        assert_eq!(cards_per_row(2000.0), 2);
        assert_eq!(cards_per_row(CARD_WIDTH * 2.0 + CARD_SPACING), 2);
        assert_eq!(cards_per_row(CARD_WIDTH * 2.0), 1);
        assert_eq!(cards_per_row(10.0), 1);
    }

    #[test]
    fn renders_headless() {
        render_headless(&mut WorkspacesPage::default());
    }
}
