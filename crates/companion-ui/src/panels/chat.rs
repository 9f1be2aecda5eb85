//! Live Assist panel — conversation sidebar, message log, and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use companion_core::store::SessionStore;
use companion_types::message::{Message, Role};

use crate::state::UiState;
use crate::theme::*;

/// A user intent raised by the chat panel. The app layer applies it to
/// the store and kicks off any network work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    NewChat,
    SwitchTo(String),
    Delete(String),
    Send(String),
}

/// Render the Live Assist panel. Returns at most one action per frame.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    store: &SessionStore,
) -> Option<ChatAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if state.sidebar_open {
            let sidebar_width = 220.0;
            ui.allocate_ui(Vec2::new(sidebar_width, ui.available_height()), |ui| {
                if let Some(a) = sidebar(ui, store) {
                    action = Some(a);
                }
            });
            ui.separator();
        }

        ui.vertical(|ui| {
            if let Some(a) = conversation_view(ui, state, store) {
                action = Some(a);
            }
        });
    });

    action
}

fn sidebar(ui: &mut egui::Ui, store: &SessionStore) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                let new_btn = ui.add_sized(
                    Vec2::new(ui.available_width(), 28.0),
                    egui::Button::new(RichText::new("+ New Chat").color(TEXT_PRIMARY))
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING),
                );
                if new_btn.clicked() {
                    action = Some(ChatAction::NewChat);
                }

                ui.separator();

                ScrollArea::vertical()
                    .max_height(ui.available_height() - 30.0)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        for conv in store.conversations() {
                            let is_current = conv.id == store.current_id();
                            ui.horizontal(|ui| {
                                let label = ui.selectable_label(
                                    is_current,
                                    RichText::new(&conv.title).color(if is_current {
                                        TEXT_PRIMARY
                                    } else {
                                        TEXT_SECONDARY
                                    }),
                                );
                                if label.clicked() && !is_current {
                                    action = Some(ChatAction::SwitchTo(conv.id.clone()));
                                }
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    let del = ui.add(
                                        egui::Button::new(
                                            RichText::new("✕").color(TEXT_SECONDARY).small(),
                                        )
                                        .frame(false),
                                    );
                                    if del.clicked() {
                                        action = Some(ChatAction::Delete(conv.id.clone()));
                                    }
                                });
                            });
                        }
                    });

                ui.separator();
                let count = store.conversations().len();
                ui.label(
                    RichText::new(format!(
                        "{} {}",
                        count,
                        if count == 1 { "chat" } else { "chats" }
                    ))
                    .color(TEXT_SECONDARY)
                    .small(),
                );
            });
        });

    action
}

fn conversation_view(
    ui: &mut egui::Ui,
    state: &mut UiState,
    store: &SessionStore,
) -> Option<ChatAction> {
    let mut action = None;

    // Header
    ui.horizontal(|ui| {
        ui.heading(RichText::new("Live Assist Chat").color(ACCENT_SOFT).strong());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let toggle = if state.sidebar_open { "◀" } else { "▶" };
            if ui.button(toggle).clicked() {
                state.sidebar_open = !state.sidebar_open;
            }
            let status_color = if state.is_busy() { WARNING } else { SUCCESS };
            ui.label(RichText::new(&state.status_text).color(status_color).small());
        });
    });
    ui.label(
        RichText::new("Ask about research papers or get writing feedback")
            .color(TEXT_SECONDARY)
            .small(),
    );

    ui.separator();

    // Messages area
    let available_height = ui.available_height() - 60.0;
    ScrollArea::vertical()
        .max_height(available_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in &store.current().messages {
                render_message(ui, message);
                ui.add_space(4.0);
            }

            if state.thinking {
                egui::Frame::default()
                    .fill(BG_SECONDARY)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.add(egui::Spinner::new().color(ACCENT_SOFT));
                            ui.label(
                                RichText::new("Searching research papers...")
                                    .color(TEXT_SECONDARY)
                                    .small(),
                            );
                        });
                    });
            }
        });

    ui.add_space(8.0);

    // Input area
    ui.horizontal(|ui| {
        let input = egui::TextEdit::multiline(&mut state.live_input)
            .hint_text("Enter a research topic or abstract to find papers...")
            .desired_rows(2)
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(14.0));

        let response = ui.add(input);

        let send_enabled = !state.live_input.trim().is_empty() && !state.thinking;
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        // Submit on Enter (without Shift) or button click
        let enter_pressed = response.has_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);
        if (enter_pressed && send_enabled) || send_btn.clicked() {
            let text = state.live_input.trim().to_string();
            action = Some(ChatAction::Send(text));
            state.live_input.clear();
            response.request_focus();
        }
    });

    action
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label, label_color, bg, layout) = match message.role {
        Role::User => (
            "You",
            ACCENT_SOFT,
            ACCENT.linear_multiply(0.35),
            Layout::top_down(Align::Max),
        ),
        Role::Assistant => (
            "Assistant",
            SUCCESS,
            BG_SECONDARY,
            Layout::top_down(Align::Min),
        ),
    };

    ui.with_layout(layout, |ui| {
        ui.set_max_width(ui.available_width() * 0.8);
        egui::Frame::default()
            .fill(bg)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(label).color(label_color).strong().small());
                ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
            });
    });
}
