//! The `Page` trait and the tabbed container that hosts the pages.
//!
//! To add a new page:
//! 1. Create a new file in `ui/pages/`.
//! 2. Implement `Page` for your struct.
//! 3. Add an `add_<name>_page` step to `WelcomeApp::new` that calls
//!    `TabbedContainer::add_titled`.

use egui::{self, Button, ScrollArea};

use crate::constants::TAB_TRANSITION_SECS;
use crate::ui::style::StyleHandle;

/// Trait implemented by every tab page.
///
/// A page is built once, up front, from its content; `show` only draws.
pub trait Page {
    /// Stable identifier, also used as the scroll-area id.
    fn name(&self) -> &str;

    /// Label on the tab switcher.
    fn title(&self) -> &str;

    /// Draw the page body. Called every frame while the page is selected.
    fn show(&mut self, ui: &mut egui::Ui, style: &StyleHandle);
}

const TAB_WIDTH: f32 = 110.0;
const TAB_HEIGHT: f32 = 28.0;
const PAGE_MARGIN: i8 = 20;

/// Named, scrollable pages with a centered switcher; one visible at a time.
#[derive(Default)]
pub struct TabbedContainer {
    pages: Vec<Box<dyn Page>>,
    selected: usize,
}

impl TabbedContainer {
    pub fn add_titled(&mut self, page: Box<dyn Page>) {
        log::debug!("tabs: adding page {}", page.name());
        self.pages.push(page);
    }

    pub fn titles(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.title()).collect()
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.pages.get(self.selected).map(|p| p.name())
    }

    pub fn select(&mut self, index: usize) {
        if index < self.pages.len() {
            self.selected = index;
        }
    }

    /// Row of tab buttons, centered in the available width.
    pub fn switcher(&mut self, ui: &mut egui::Ui) {
        let n = self.pages.len() as f32;
        let spacing = ui.spacing().item_spacing.x;
        let row_width = n * TAB_WIDTH + (n - 1.0).max(0.0) * spacing;

        let mut clicked = None;
        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            for (i, page) in self.pages.iter().enumerate() {
                let button = Button::new(page.title()).selected(i == self.selected);
                if ui.add_sized([TAB_WIDTH, TAB_HEIGHT], button).clicked() {
                    clicked = Some(i);
                }
            }
        });
        if let Some(i) = clicked {
            self.select(i);
            log::debug!("tabs: showing {:?}", self.selected_name());
        }
    }

    /// Draw the selected page inside its own vertical scroll area.
    pub fn show_selected(&mut self, ui: &mut egui::Ui, style: &StyleHandle) {
        let selected = self.selected;
        let Some(page) = self.pages.get_mut(selected) else {
            return;
        };

        // Fade the incoming page in as the animated index reaches it.
        let shown = ui.ctx().animate_value_with_time(
            egui::Id::new("welcome_tab_transition"),
            selected as f32,
            TAB_TRANSITION_SECS,
        );
        let opacity = (1.0 - (shown - selected as f32).abs()).clamp(0.0, 1.0);

        ScrollArea::vertical()
            .id_salt(page.name().to_owned())
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_opacity(opacity);
                egui::Frame::new()
                    .inner_margin(egui::Margin::same(PAGE_MARGIN))
                    .show(ui, |ui| page.show(ui, style));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blank(&'static str);

    impl Page for Blank {
        fn name(&self) -> &str {
            self.0
        }
        fn title(&self) -> &str {
            self.0
        }
        fn show(&mut self, ui: &mut egui::Ui, _style: &StyleHandle) {
            ui.label(self.0);
        }
    }

    #[test]
    fn pages_keep_insertion_order() {
        let mut tabs = TabbedContainer::default();
        assert_eq!(tabs.selected_name(), None);
        tabs.add_titled(Box::new(Blank("a")));
        tabs.add_titled(Box::new(Blank("b")));
        assert_eq!(tabs.titles(), ["a", "b"]);
        assert_eq!(tabs.selected_name(), Some("a"));

        tabs.select(1);
        assert_eq!(tabs.selected_name(), Some("b"));
        tabs.select(9);
        assert_eq!(tabs.selected_name(), Some("b"));
    }
}
