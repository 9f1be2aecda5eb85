//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(3, 7, 18);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(17, 24, 39);
pub const BG_SURFACE: Color32 = Color32::from_rgb(31, 41, 55);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(229, 231, 235);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(156, 163, 175);
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(96, 165, 250);
pub const INDIGO: Color32 = Color32::from_rgb(129, 140, 248);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);

/// Tint behind a draft segment that carries issues.
pub const MARK_BG: Color32 = Color32::from_rgba_premultiplied(60, 17, 17, 200);
pub const MARK_UNDERLINE: Color32 = ERROR;

pub const TOOLTIP_BG: Color32 = Color32::from_rgb(15, 23, 42);
pub const TOOLTIP_BORDER: Color32 = Color32::from_rgb(127, 29, 29);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Apply the dark theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}

/// Score color bands, mirroring the gradient families of the original
/// design: green for 80+, blue for 60+, amber for 40+, red below.
pub fn score_color(score: u32) -> Color32 {
    if score >= 80 {
        SUCCESS
    } else if score >= 60 {
        ACCENT_SOFT
    } else if score >= 40 {
        WARNING
    } else {
        ERROR
    }
}
