//! Application orchestrator: builds the style and pages once, then draws the
//! header, tab switcher and selected page every frame.

use crate::constants;
use crate::content::keybindings::KeybindingsSource;
use crate::content::palette::Palette;
use crate::ui::header;
use crate::ui::pages::{
    keybindings::KeybindingsPage, settings::SettingsPage, workspaces::WorkspacesPage,
};
use crate::ui::style::{StyleHandle, StyleSheet};
use crate::ui::window::TabbedContainer;

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// Everything is built in `new`; nothing is reloaded afterwards. The only
/// state that changes at runtime is which tab is selected.
pub struct WelcomeApp {
    style: StyleHandle,
    tabs: TabbedContainer,
}

impl WelcomeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let colors = constants::colors_file()
            .inspect_err(|e| log::warn!("colors: {e}"))
            .ok();
        let keybindings = constants::keybindings_file()
            .inspect_err(|e| log::warn!("keybindings: {e}"))
            .ok();

        let palette = Palette::load(colors.as_deref());
        let source = KeybindingsSource::load(keybindings.as_deref());
        Self::with_content(&cc.egui_ctx, &palette, &source)
    }

    /// Build the window from already-loaded content.
    pub fn with_content(
        ctx: &egui::Context,
        palette: &Palette,
        keybindings: &KeybindingsSource,
    ) -> Self {
        // Dark mode is forced by `install`, before any widget exists.
        let style = StyleSheet::from_palette(palette).install(ctx);

        let mut app = Self {
            style,
            tabs: TabbedContainer::default(),
        };
        app.add_workspaces_page();
        app.add_keybindings_page(keybindings);
        app.add_settings_page();
        log::info!("welcome: pages {:?}", app.tabs.titles());
        app
    }

    // ── Pages ──────────────────────────────────────────────────────────────────

    fn add_workspaces_page(&mut self) {
        self.tabs.add_titled(Box::new(WorkspacesPage::default()));
    }

    fn add_keybindings_page(&mut self, source: &KeybindingsSource) {
        self.tabs.add_titled(Box::new(KeybindingsPage::new(source)));
    }

    fn add_settings_page(&mut self) {
        self.tabs.add_titled(Box::new(SettingsPage::default()));
    }

    /// Draw one frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("welcome_header")
            .show_separator_line(false)
            .frame(egui::Frame::new().fill(self.style.surface))
            .show(ctx, |ui| {
                header::show(ui, &self.style);
                self.tabs.switcher(ui);
                ui.add_space(10.0);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.style.surface))
            .show(ctx, |ui| {
                self.tabs.show_selected(ui, &self.style);
            });
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for WelcomeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
