//! Settings page: the fixed environment and appearance rows.

use egui::{self, Align, Layout};

use crate::content::catalog::SETTING_GROUPS;
use crate::types::{SettingEntry, SettingGroup};
use crate::ui::style::StyleHandle;
use crate::ui::window::Page;

pub struct SettingsPage {
    groups: &'static [SettingGroup],
}

impl Default for SettingsPage {
    fn default() -> Self {
        Self {
            groups: &SETTING_GROUPS,
        }
    }
}

impl Page for SettingsPage {
    fn name(&self) -> &str {
        "settings"
    }
    fn title(&self) -> &str {
        "Settings"
    }

    fn show(&mut self, ui: &mut egui::Ui, style: &StyleHandle) {
        ui.spacing_mut().item_spacing.y = 6.0;
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                ui.add_space(12.0);
            }
            ui.label(style.section_title(group.title));
            ui.add_space(6.0);
            for entry in group.entries {
                ui.add_space(3.0);
                setting_row(ui, style, entry);
                ui.add_space(3.0);
            }
        }
    }
}

fn setting_row(ui: &mut egui::Ui, style: &StyleHandle, entry: &SettingEntry) {
    style.setting_item().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 16.0;
            ui.label(style.setting_label(entry.label));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(style.setting_value(entry.value));
            });
        });
    });
}
