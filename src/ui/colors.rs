//! Color string parsing and blending helpers for the style sheet.

use egui::Color32;

/// Parse a palette value (`#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`).
///
/// Returns `None` for anything else, including named colors.
pub fn parse_color(value: &str) -> Option<Color32> {
    Color32::from_hex(value.trim()).ok()
}

/// Same color at a fraction of its opacity, like CSS `alpha(c, a)`.
pub fn alpha(color: Color32, factor: f32) -> Color32 {
    color.gamma_multiply(factor)
}

/// Linear blend in sRGB space, `t` clamped to `0..=1`.
pub fn lerp(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}
