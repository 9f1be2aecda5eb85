//! Draft Analysis panel — editor on the left, scored feedback on the right.

use egui::{self, Align, Layout, RichText, ScrollArea};

use companion_core::annotate::{annotate, tooltip_text};
use companion_core::workflow::AnalysisPhase;
use companion_types::analysis::DraftAnalysis;
use companion_types::event::AnalysisOutcome;

use crate::overlay::TooltipOverlay;
use crate::state::UiState;
use crate::theme::*;

const SENTENCES_SHOWN: usize = 3;
const PAPERS_SHOWN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftAction {
    Analyze,
}

/// Render the Draft Analysis panel. Returns `Analyze` when the user
/// triggers a scoring run.
pub fn draft_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    overlay: &mut TooltipOverlay,
) -> Option<DraftAction> {
    let mut action = None;

    ui.columns(2, |cols| {
        if let Some(a) = editor_column(&mut cols[0], state) {
            action = Some(a);
        }
        feedback_column(&mut cols[1], &*state, overlay);
    });

    action
}

fn editor_column(ui: &mut egui::Ui, state: &mut UiState) -> Option<DraftAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Research Draft Editor").color(ACCENT_SOFT));
            ui.separator();

            ui.label(RichText::new("Problem Statement").color(TEXT_SECONDARY).small());
            ui.add(
                egui::TextEdit::multiline(&mut state.draft_problem)
                    .hint_text("Enter problem statement here...")
                    .desired_rows(3)
                    .desired_width(ui.available_width()),
            );

            ui.add_space(4.0);

            ui.label(RichText::new("Draft").color(TEXT_SECONDARY).small());
            let draft_height = (ui.available_height() - 90.0).max(120.0);
            ScrollArea::vertical()
                .max_height(draft_height)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_sized(
                        egui::Vec2::new(ui.available_width(), draft_height),
                        egui::TextEdit::multiline(&mut state.draft_text)
                            .hint_text("Paste or write your research draft here..."),
                    );
                });

            ui.label(
                RichText::new(
                    "Example: \"The global decline in bee populations poses a significant \
                     threat to food security...\"",
                )
                .color(TEXT_SECONDARY)
                .small()
                .italics(),
            );

            if let Some(message) = &state.validation {
                ui.label(RichText::new(message).color(ERROR).small());
            }

            ui.add_space(6.0);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let analyzing = state.analysis.is_analyzing();
                let inputs_present = !state.draft_text.trim().is_empty()
                    && !state.draft_problem.trim().is_empty();
                let btn = ui.add_enabled(
                    !analyzing && inputs_present,
                    egui::Button::new(
                        RichText::new(if analyzing { "Analyzing..." } else { "Analyze Draft" })
                            .color(TEXT_PRIMARY)
                            .strong(),
                    )
                    .fill(if analyzing { BG_SURFACE } else { ACCENT })
                    .corner_radius(PANEL_ROUNDING),
                );
                if analyzing {
                    ui.add(egui::Spinner::new().color(ACCENT_SOFT));
                }
                if btn.clicked() {
                    action = Some(DraftAction::Analyze);
                }
            });
        });

    action
}

fn feedback_column(ui: &mut egui::Ui, state: &UiState, overlay: &mut TooltipOverlay) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("AI Analysis Feedback").color(INDIGO));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    match &state.analysis {
                        AnalysisPhase::Analyzing => {
                            ui.label(RichText::new("Processing...").color(TEXT_SECONDARY).small());
                        }
                        AnalysisPhase::Displayed(AnalysisOutcome::Succeeded(analysis)) => {
                            ui.label(
                                RichText::new(format!("{} papers compared", analysis.papers.len()))
                                    .color(INDIGO)
                                    .small(),
                            );
                        }
                        _ => {}
                    }
                });
            });
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match &state.analysis {
                    AnalysisPhase::Idle => {
                        empty_state(ui);
                        overlay.hide();
                    }
                    AnalysisPhase::Analyzing => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.add(egui::Spinner::new().color(ACCENT_SOFT));
                            ui.label(RichText::new("Analyzing...").color(TEXT_SECONDARY));
                        });
                        overlay.hide();
                    }
                    AnalysisPhase::Displayed(AnalysisOutcome::Failed { reason }) => {
                        failure_card(ui, reason);
                        overlay.hide();
                    }
                    AnalysisPhase::Displayed(AnalysisOutcome::Succeeded(analysis)) => {
                        success_view(ui, state, analysis, overlay);
                    }
                });
        });
}

fn empty_state(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("Enter problem statement and draft").size(16.0).color(TEXT_PRIMARY));
        ui.label(
            RichText::new("Then click \"Analyze Draft\" to get AI feedback and paper comparisons")
                .color(TEXT_SECONDARY)
                .small(),
        );
    });
}

fn failure_card(ui: &mut egui::Ui, reason: &str) {
    egui::Frame::default()
        .fill(BG_SURFACE)
        .stroke(egui::Stroke::new(1.0, ERROR))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(RichText::new("Analysis failed").color(ERROR).strong());
            ui.label(RichText::new(reason).color(TEXT_PRIMARY));
            ui.label(
                RichText::new("Please make sure the backend server is running, then try again.")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
        });
}

fn success_view(
    ui: &mut egui::Ui,
    state: &UiState,
    analysis: &DraftAnalysis,
    overlay: &mut TooltipOverlay,
) {
    let now = ui.input(|i| i.time);
    let shown_score = state.displayed_score(analysis.score, now);

    // Score card
    egui::Frame::default()
        .fill(BG_SURFACE)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Research Quality Score").color(TEXT_PRIMARY).strong());
                    ui.label(
                        RichText::new(format!(
                            "{} issues found • {} papers compared",
                            analysis.issue_count(),
                            analysis.papers.len()
                        ))
                        .color(TEXT_SECONDARY)
                        .small(),
                    );
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new("/100").color(TEXT_SECONDARY).size(20.0));
                    ui.label(
                        RichText::new(shown_score.to_string())
                            .color(score_color(shown_score))
                            .size(36.0)
                            .strong()
                            .monospace(),
                    );
                });
            });
            ui.add(
                egui::ProgressBar::new(shown_score as f32 / 100.0)
                    .fill(score_color(shown_score))
                    .desired_height(6.0),
            );
        });

    ui.add_space(6.0);

    // Breakdown grid
    egui::Frame::default()
        .fill(BG_SURFACE)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(RichText::new("ANALYSIS BREAKDOWN").color(TEXT_SECONDARY).small());
            egui::Grid::new("breakdown_grid")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for (index, (name, value)) in analysis.breakdown.signals().iter().enumerate() {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(*name).color(TEXT_SECONDARY).small());
                            ui.label(
                                RichText::new(format!("{}/100", (value * 100.0).round() as u32))
                                    .color(ACCENT_SOFT)
                                    .strong(),
                            );
                        });
                        if index % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
        });

    ui.add_space(6.0);

    // Annotated draft — marked runs drive the tooltip overlay.
    annotated_draft(ui, state, analysis, overlay);

    // Sentence feedback
    if !analysis.sentences.is_empty() {
        ui.add_space(6.0);
        egui::Frame::default()
            .fill(BG_SURFACE)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!(
                        "SENTENCE FEEDBACK ({} issues)",
                        analysis.issue_count()
                    ))
                    .color(TEXT_SECONDARY)
                    .small(),
                );
                for feedback in analysis.sentences.iter().take(SENTENCES_SHOWN) {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("\"{}\"", feedback.sentence)).color(TEXT_PRIMARY),
                    );
                    if feedback.issues.is_empty() {
                        ui.label(RichText::new("No issues detected").color(SUCCESS).small());
                    } else {
                        for issue in &feedback.issues {
                            ui.label(
                                RichText::new(issue.reason_or_placeholder())
                                    .color(ERROR)
                                    .small(),
                            );
                        }
                    }
                }
            });
    }

    // Related papers
    if !analysis.papers.is_empty() {
        ui.add_space(6.0);
        egui::Frame::default()
            .fill(BG_SURFACE)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new("RELEVANT RESEARCH PAPERS")
                        .color(TEXT_SECONDARY)
                        .small(),
                );
                for paper in analysis.papers.iter().take(PAPERS_SHOWN) {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(paper.title_or_placeholder())
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    let mut meta = paper.authors_line(2);
                    if let Some(year) = paper.year {
                        meta.push_str(&format!(" • {}", year));
                    }
                    if let Some(citations) = paper.citations {
                        meta.push_str(&format!(" • {} citations", citations));
                    }
                    ui.label(RichText::new(meta).color(TEXT_SECONDARY).small());
                }
            });
    }

    // Static improvement suggestions
    ui.add_space(6.0);
    egui::Frame::default()
        .fill(BG_SURFACE)
        .stroke(egui::Stroke::new(1.0, INDIGO.linear_multiply(0.4)))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(RichText::new("Suggestions for Improvement").color(INDIGO).strong());
            ui.label(
                RichText::new(
                    "• Add specific data points or citations to strengthen claims\n\
                     • Connect sentences more explicitly to the research problem\n\
                     • Review similar papers for methodology inspiration",
                )
                .color(TEXT_PRIMARY)
                .small(),
            );
        });
}

fn annotated_draft(
    ui: &mut egui::Ui,
    state: &UiState,
    analysis: &DraftAnalysis,
    overlay: &mut TooltipOverlay,
) {
    let segments = annotate(&state.draft_text, &analysis.sentences);
    let any_marked = segments.iter().any(|s| s.is_marked());
    if state.draft_text.trim().is_empty() {
        overlay.hide();
        return;
    }

    let mut hovered_tip: Option<String> = None;

    egui::Frame::default()
        .fill(BG_SURFACE)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(RichText::new("ANNOTATED DRAFT").color(TEXT_SECONDARY).small());
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for segment in &segments {
                    if segment.is_marked() {
                        let text = RichText::new(&segment.text)
                            .color(TEXT_PRIMARY)
                            .background_color(MARK_BG)
                            .underline();
                        let response = ui
                            .label(text)
                            .on_hover_cursor(egui::CursorIcon::Help);
                        if response.hovered() {
                            hovered_tip = Some(tooltip_text(&segment.issues));
                        }
                    } else {
                        ui.label(RichText::new(&segment.text).color(TEXT_PRIMARY));
                    }
                }
            });
            if !any_marked && !analysis.sentences.is_empty() {
                ui.label(
                    RichText::new("No sentences were matched in the draft")
                        .color(TEXT_SECONDARY)
                        .small()
                        .italics(),
                );
            }
        });

    match hovered_tip {
        Some(tip) => {
            let pointer = ui
                .input(|i| i.pointer.hover_pos())
                .unwrap_or(egui::Pos2::ZERO);
            if overlay.is_visible() {
                overlay.update(pointer);
            }
            overlay.show(tip, pointer);
        }
        // Pointer left every marked segment this frame.
        None => overlay.hide(),
    }
}
