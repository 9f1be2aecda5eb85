//! Issue tooltip overlay.
//!
//! A single overlay instance is owned by the rendering layer — no hidden
//! module-level state. Panels call `show`/`update`/`hide`; the app renders
//! it last so it floats above everything else.

use egui::{Area, Color32, Frame, Id, Order, Pos2, Rect, RichText, Stroke, Vec2};

use crate::theme::{PANEL_ROUNDING, TOOLTIP_BG, TOOLTIP_BORDER};

const POINTER_OFFSET: f32 = 15.0;
const VIEWPORT_MARGIN: f32 = 10.0;
const MAX_WIDTH: f32 = 360.0;

pub struct TooltipOverlay {
    content: Option<String>,
    pointer: Pos2,
    /// Size measured on the previous frame, used to anchor and clamp.
    last_size: Vec2,
}

impl TooltipOverlay {
    pub fn new() -> Self {
        Self {
            content: None,
            pointer: Pos2::ZERO,
            last_size: Vec2::ZERO,
        }
    }

    /// Show the tooltip with new content near the pointer.
    pub fn show(&mut self, text: String, pointer: Pos2) {
        self.content = Some(text);
        self.pointer = pointer;
    }

    /// Track the pointer while hovering.
    pub fn update(&mut self, pointer: Pos2) {
        if self.content.is_some() {
            self.pointer = pointer;
        }
    }

    pub fn hide(&mut self) {
        self.content = None;
    }

    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    /// Draw the overlay. Call once per frame, after all panels.
    pub fn render(&mut self, ctx: &egui::Context) {
        let Some(text) = self.content.clone() else {
            return;
        };
        let anchor = anchor_tooltip(self.pointer, self.last_size, ctx.screen_rect());

        let response = Area::new(Id::new("issue_tooltip"))
            .order(Order::Tooltip)
            .fixed_pos(anchor)
            .interactable(false)
            .show(ctx, |ui| {
                ui.set_max_width(MAX_WIDTH);
                Frame::default()
                    .fill(TOOLTIP_BG)
                    .stroke(Stroke::new(1.0, TOOLTIP_BORDER))
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(text).color(Color32::from_rgb(226, 232, 240)).size(12.0));
                    });
            });

        self.last_size = response.response.rect.size();
    }
}

impl Default for TooltipOverlay {
    fn default() -> Self {
        Self::new()
    }
}

/// Position a tooltip of `size` near `pointer`, inside `viewport`.
/// Offsets below-right of the pointer, flips to the other side when it
/// would overflow, then clamps to the viewport with a margin.
pub fn anchor_tooltip(pointer: Pos2, size: Vec2, viewport: Rect) -> Pos2 {
    let mut left = pointer.x + POINTER_OFFSET;
    let mut top = pointer.y + POINTER_OFFSET;

    if left + size.x > viewport.max.x - VIEWPORT_MARGIN {
        left = pointer.x - size.x - POINTER_OFFSET;
    }
    if top + size.y > viewport.max.y - VIEWPORT_MARGIN {
        top = pointer.y - size.y - POINTER_OFFSET;
    }

    let max_left = (viewport.max.x - size.x - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    let max_top = (viewport.max.y - size.y - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    Pos2::new(left.clamp(VIEWPORT_MARGIN, max_left), top.clamp(VIEWPORT_MARGIN, max_top))
}
