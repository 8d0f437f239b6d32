//! The style sheet: the resolved palette plus one constructor per visual
//! class (logo badge, cards, key-caps, rows, ...).
//!
//! Pages never hard-code colors; they ask the [`StyleHandle`] returned by
//! [`StyleSheet::install`] for the frame or text of the class they draw.

use std::ops::Deref;

use egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Theme, Visuals};

use crate::content::palette::Palette;
use crate::ui::colors::{alpha, parse_color};

/// Palette colors parsed into `Color32`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub primary: Color32,
    pub primary_fixed: Color32,
    pub on_primary_fixed: Color32,
    pub surface: Color32,
    pub on_surface: Color32,
    pub on_surface_variant: Color32,
    pub surface_container: Color32,
    pub surface_container_high: Color32,
    pub primary_container: Color32,
}

/// Resolve one palette entry; an unparsable value keeps the default's color.
fn resolve(name: &str, value: &str, fallback: &str) -> Color32 {
    if let Some(color) = parse_color(value) {
        return color;
    }
    log::warn!("style: {name} = {value:?} is not a color, using {fallback}");
    parse_color(fallback).unwrap_or(Color32::MAGENTA)
}

impl StyleSheet {
    pub fn from_palette(palette: &Palette) -> Self {
        let defaults = Palette::default();
        let [
            primary,
            primary_fixed,
            on_primary_fixed,
            surface,
            on_surface,
            on_surface_variant,
            surface_container,
            surface_container_high,
            primary_container,
        ] = std::array::from_fn(|i| {
            let (name, value) = palette.entries()[i];
            resolve(name, value, defaults.entries()[i].1)
        });
        Self {
            primary,
            primary_fixed,
            on_primary_fixed,
            surface,
            on_surface,
            on_surface_variant,
            surface_container,
            surface_container_high,
            primary_container,
        }
    }

    /// Dark visuals with the sheet's base colors written over egui's defaults.
    pub fn visuals(&self) -> Visuals {
        let mut v = Visuals::dark();
        v.panel_fill = self.surface;
        v.window_fill = self.surface;
        v.extreme_bg_color = self.surface_container;
        v.faint_bg_color = self.surface_container_high;
        v.override_text_color = Some(self.on_surface);
        v.hyperlink_color = self.primary;
        v.selection.bg_fill = self.primary_container;
        v.selection.stroke = Stroke::new(1.0, self.primary);

        v.widgets.inactive.weak_bg_fill = self.surface_container;
        v.widgets.inactive.bg_fill = self.surface_container;
        v.widgets.hovered.weak_bg_fill = self.surface_container_high;
        v.widgets.hovered.bg_fill = self.surface_container_high;
        v.widgets.hovered.bg_stroke = Stroke::new(1.0, alpha(self.primary, 0.4));
        v.widgets.active.weak_bg_fill = self.primary_container;
        v.widgets.active.bg_fill = self.primary_container;
        v
    }

    /// Force the dark theme and make this sheet the app's visuals.
    ///
    /// Call once, before the first frame.
    pub fn install(self, ctx: &egui::Context) -> StyleHandle {
        ctx.set_theme(Theme::Dark);
        ctx.set_visuals_of(Theme::Dark, self.visuals());
        log::debug!("style: installed sheet, primary {:?}", self.primary);
        StyleHandle { sheet: self }
    }

    // ── Header ─────────────────────────────────────────────────────────────────

    /// Gradient stops of the logo badge, top-left to bottom-right.
    pub fn logo_gradient(&self) -> (Color32, Color32) {
        (self.primary, self.primary_fixed)
    }

    pub fn logo_text_color(&self) -> Color32 {
        self.on_primary_fixed
    }

    pub fn title(&self, text: &str) -> RichText {
        RichText::new(text).size(28.0).strong().color(self.primary)
    }

    pub fn subtitle(&self, text: &str) -> RichText {
        RichText::new(text)
            .size(14.0)
            .color(alpha(self.on_surface_variant, 0.8))
    }

    // ── Workspaces ─────────────────────────────────────────────────────────────

    pub fn workspace_card(&self, hovered: bool) -> Frame {
        let (fill, border) = if hovered {
            (alpha(self.primary, 0.2), self.primary)
        } else {
            (alpha(self.primary, 0.1), alpha(self.primary, 0.3))
        };
        Frame::new()
            .fill(fill)
            .stroke(Stroke::new(1.0, border))
            .corner_radius(CornerRadius::same(12))
            .inner_margin(Margin::same(18))
    }

    pub fn workspace_number(&self, text: &str) -> RichText {
        RichText::new(text).size(28.0).strong().color(self.primary)
    }

    pub fn workspace_name(&self, text: &str) -> RichText {
        RichText::new(text).size(16.0).strong().color(self.on_surface)
    }

    pub fn workspace_desc(&self, text: &str) -> RichText {
        RichText::new(text)
            .size(11.0)
            .color(alpha(self.on_surface_variant, 0.7))
    }

    // ── Keybindings ────────────────────────────────────────────────────────────

    pub fn keybind_item(&self) -> Frame {
        Frame::new()
            .fill(alpha(self.primary, 0.05))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::symmetric(14, 10))
    }

    pub fn keybind_key(&self) -> Frame {
        Frame::new()
            .fill(alpha(self.primary, 0.2))
            .stroke(Stroke::new(1.0, alpha(self.primary, 0.4)))
            .corner_radius(CornerRadius::same(5))
            .inner_margin(Margin::symmetric(8, 3))
    }

    pub fn keybind_key_text(&self, text: &str) -> RichText {
        RichText::new(text)
            .monospace()
            .size(11.0)
            .strong()
            .color(self.primary)
    }

    pub fn keybind_action(&self, text: &str) -> RichText {
        RichText::new(text).size(12.0).color(self.on_surface)
    }

    // ── Shared ─────────────────────────────────────────────────────────────────

    pub fn section_title(&self, text: &str) -> RichText {
        RichText::new(text).size(15.0).strong().color(self.primary)
    }

    /// Plain inline message (missing file, load error).
    pub fn notice(&self, text: &str) -> RichText {
        RichText::new(text).color(self.on_surface)
    }

    // ── Settings ───────────────────────────────────────────────────────────────

    pub fn setting_item(&self) -> Frame {
        Frame::new()
            .fill(alpha(self.primary, 0.05))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::same(14))
    }

    pub fn setting_label(&self, text: &str) -> RichText {
        RichText::new(text).size(13.0).strong().color(self.on_surface)
    }

    pub fn setting_value(&self, text: &str) -> RichText {
        RichText::new(text)
            .size(12.0)
            .color(alpha(self.on_surface_variant, 0.8))
    }
}

/// Proof that the sheet was installed on a context; pages style through it.
#[derive(Debug, Clone)]
pub struct StyleHandle {
    sheet: StyleSheet,
}

impl Deref for StyleHandle {
    type Target = StyleSheet;

    fn deref(&self) -> &StyleSheet {
        &self.sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_flow_into_the_sheet() {
        let palette = Palette::from_rasi("primary: #ff00ff;");
        let sheet = StyleSheet::from_palette(&palette);
        assert_eq!(sheet.primary, Color32::from_rgb(0xff, 0x00, 0xff));
        assert_eq!(sheet.surface, Color32::from_rgb(0x15, 0x13, 0x0c));
        assert_eq!(sheet.logo_gradient().1, Color32::from_rgb(0xf6, 0xe3, 0x88));
    }

    #[test]
    fn invalid_color_falls_back_to_default() {
        let palette = Palette {
            on_primary_fixed: "banana".into(),
            ..Palette::default()
        };
        let sheet = StyleSheet::from_palette(&palette);
        assert_eq!(sheet, StyleSheet::from_palette(&Palette::default()));
    }

    #[test]
    fn hover_card_is_stronger() {
        let sheet = StyleSheet::from_palette(&Palette::default());
        let idle = sheet.workspace_card(false);
        let hot = sheet.workspace_card(true);
        assert!(hot.fill.a() > idle.fill.a());
        assert_eq!(hot.stroke.color, sheet.primary);
    }

    #[test]
    fn install_sets_dark_visuals() {
        let ctx = egui::Context::default();
        let handle = StyleSheet::from_palette(&Palette::default()).install(&ctx);
        assert_eq!(ctx.style_of(Theme::Dark).visuals.panel_fill, handle.surface);
        assert_eq!(ctx.theme(), Theme::Dark);
    }
}
