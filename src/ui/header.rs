//! Header: gradient logo badge, title and subtitle.

use std::f32::consts::FRAC_PI_2;

use egui::{self, Align2, Color32, FontId, Mesh, Pos2, Rect, Sense, Shape, Vec2};

use crate::constants::{LOGO_TEXT, SUBTITLE_TEXT, TITLE_TEXT};
use crate::ui::colors::lerp;
use crate::ui::style::StyleHandle;

const BADGE_SIZE: f32 = 110.0;
const BADGE_RADIUS: f32 = 20.0;
const CORNER_SEGMENTS: usize = 8;

pub fn show(ui: &mut egui::Ui, style: &StyleHandle) {
    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        ui.spacing_mut().item_spacing.y = 8.0;
        logo_badge(ui, style);
        ui.label(style.title(TITLE_TEXT));
        ui.label(style.subtitle(SUBTITLE_TEXT));
    });
    ui.add_space(15.0);
}

fn logo_badge(ui: &mut egui::Ui, style: &StyleHandle) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(BADGE_SIZE), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let (from, to) = style.logo_gradient();
    let painter = ui.painter();
    painter.add(Shape::mesh(gradient_mesh(rect, BADGE_RADIUS, from, to)));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        LOGO_TEXT,
        FontId::proportional(48.0),
        style.logo_text_color(),
    );
}

/// Outline of a rounded rectangle, clockwise from the top-left arc.
fn rounded_outline(rect: Rect, radius: f32) -> Vec<Pos2> {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    let corners = [
        (Pos2::new(rect.left() + r, rect.top() + r), 2.0),
        (Pos2::new(rect.right() - r, rect.top() + r), 3.0),
        (Pos2::new(rect.right() - r, rect.bottom() - r), 0.0),
        (Pos2::new(rect.left() + r, rect.bottom() - r), 1.0),
    ];
    let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
    for (center, quarter) in corners {
        for step in 0..=CORNER_SEGMENTS {
            let angle = (quarter + step as f32 / CORNER_SEGMENTS as f32) * FRAC_PI_2;
            points.push(center + r * Vec2::angled(angle));
        }
    }
    points
}

/// 135° linear gradient (top-left `from`, bottom-right `to`) filling a
/// rounded rectangle, as a triangle fan around the center.
fn gradient_mesh(rect: Rect, radius: f32, from: Color32, to: Color32) -> Mesh {
    let span = rect.width() + rect.height();
    let color_at = |p: Pos2| {
        let t = ((p.x - rect.left()) + (p.y - rect.top())) / span;
        lerp(from, to, t)
    };

    let mut mesh = Mesh::default();
    let center = rect.center();
    mesh.colored_vertex(center, color_at(center));
    let outline = rounded_outline(rect, radius);
    for &p in &outline {
        mesh.colored_vertex(p, color_at(p));
    }
    let n = outline.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    mesh
}
