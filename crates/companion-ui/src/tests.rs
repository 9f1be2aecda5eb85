#[cfg(test)]
mod tests {
    use crate::overlay::{anchor_tooltip, TooltipOverlay};
    use crate::state::{Mode, UiState, EXAMPLE_PROBLEM};
    use crate::theme::score_color;
    use crate::theme::{ACCENT_SOFT, ERROR, SUCCESS, WARNING};
    use companion_core::store::SessionStore;
    use companion_core::workflow::AnalysisPhase;
    use companion_types::analysis::DraftAnalysis;
    use companion_types::event::{AnalysisOutcome, CompanionEvent};
    use egui::{Pos2, Rect, Vec2};

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_initial_state() {
        let state = UiState::new();
        assert_eq!(state.mode, Mode::LiveAssist);
        assert!(state.sidebar_open);
        assert!(!state.thinking);
        assert_eq!(state.draft_problem, EXAMPLE_PROBLEM);
        assert!(matches!(state.analysis, AnalysisPhase::Idle));
        assert!(!state.is_busy());
    }

    #[test]
    fn test_search_finished_appends_reply_and_clears_thinking() {
        let mut state = UiState::new();
        let mut store = SessionStore::seeded();
        let id = store.current().id.clone();
        state.thinking = true;

        let mutated = state.process_events(
            vec![CompanionEvent::SearchFinished {
                conversation_id: id.clone(),
                reply: "Found 2 research papers".to_string(),
            }],
            &mut store,
            0.0,
        );

        assert!(mutated);
        assert!(!state.thinking);
        assert_eq!(store.current().messages.len(), 2);
        assert_eq!(
            store.current().messages[1].content,
            "Found 2 research papers"
        );
    }

    #[test]
    fn test_search_finished_for_deleted_conversation_is_dropped() {
        let mut state = UiState::new();
        let mut store = SessionStore::seeded();
        state.thinking = true;

        let mutated = state.process_events(
            vec![CompanionEvent::SearchFinished {
                conversation_id: "deleted".to_string(),
                reply: "late reply".to_string(),
            }],
            &mut store,
            0.0,
        );

        assert!(!mutated);
        assert!(!state.thinking);
        assert_eq!(store.current().messages.len(), 1);
    }

    #[test]
    fn test_analysis_succeeded_enters_displayed_and_starts_ramp() {
        let mut state = UiState::new();
        let mut store = SessionStore::seeded();
        state.analysis = AnalysisPhase::Analyzing;

        let analysis = DraftAnalysis {
            score: 77,
            ..Default::default()
        };
        state.process_events(
            vec![CompanionEvent::AnalysisFinished {
                outcome: AnalysisOutcome::Succeeded(analysis),
            }],
            &mut store,
            10.0,
        );

        assert!(state.analysis.is_displayed());
        assert_eq!(state.displayed_score(77, 10.0), 0);
        assert_eq!(state.displayed_score(77, 10.6), 38);
        assert_eq!(state.displayed_score(77, 12.0), 77);
        assert!(state.score_animating(77, 10.0));
        assert!(!state.score_animating(77, 12.0));
    }

    #[test]
    fn test_analysis_failed_is_a_distinct_displayed_state() {
        let mut state = UiState::new();
        let mut store = SessionStore::seeded();
        state.analysis = AnalysisPhase::Analyzing;

        state.process_events(
            vec![CompanionEvent::AnalysisFinished {
                outcome: AnalysisOutcome::Failed {
                    reason: "Timeout after 15000ms".to_string(),
                },
            }],
            &mut store,
            0.0,
        );

        match &state.analysis {
            AnalysisPhase::Displayed(AnalysisOutcome::Failed { reason }) => {
                assert_eq!(reason, "Timeout after 15000ms");
            }
            other => panic!("Unexpected phase: {:?}", other),
        }
        assert!(state.status_text.contains("Analysis failed"));
    }

    #[test]
    fn test_busy_while_thinking_or_analyzing() {
        let mut state = UiState::new();
        state.thinking = true;
        assert!(state.is_busy());
        state.thinking = false;
        state.analysis = AnalysisPhase::Analyzing;
        assert!(state.is_busy());
    }

    // ─── Tooltip Overlay Tests ───────────────────────────────

    #[test]
    fn test_overlay_show_update_hide() {
        let mut overlay = TooltipOverlay::new();
        assert!(!overlay.is_visible());
        overlay.show("weak claim".to_string(), Pos2::new(40.0, 40.0));
        assert!(overlay.is_visible());
        overlay.update(Pos2::new(50.0, 50.0));
        assert!(overlay.is_visible());
        overlay.hide();
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_overlay_update_without_show_stays_hidden() {
        let mut overlay = TooltipOverlay::new();
        overlay.update(Pos2::new(50.0, 50.0));
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_anchor_offsets_below_right_of_pointer() {
        let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 800.0));
        let anchor = anchor_tooltip(Pos2::new(100.0, 100.0), Vec2::new(200.0, 80.0), viewport);
        assert_eq!(anchor, Pos2::new(115.0, 115.0));
    }

    #[test]
    fn test_anchor_flips_left_near_right_edge() {
        let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 800.0));
        let anchor = anchor_tooltip(Pos2::new(950.0, 100.0), Vec2::new(200.0, 80.0), viewport);
        assert_eq!(anchor.x, 950.0 - 200.0 - 15.0);
        assert_eq!(anchor.y, 115.0);
    }

    #[test]
    fn test_anchor_flips_up_near_bottom_edge() {
        let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 800.0));
        let anchor = anchor_tooltip(Pos2::new(100.0, 780.0), Vec2::new(200.0, 80.0), viewport);
        assert_eq!(anchor.y, 780.0 - 80.0 - 15.0);
    }

    #[test]
    fn test_anchor_clamped_inside_viewport() {
        let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 800.0));
        for pointer in [
            Pos2::new(0.0, 0.0),
            Pos2::new(999.0, 799.0),
            Pos2::new(5.0, 795.0),
        ] {
            let size = Vec2::new(200.0, 80.0);
            let anchor = anchor_tooltip(pointer, size, viewport);
            assert!(anchor.x >= 10.0);
            assert!(anchor.y >= 10.0);
            assert!(anchor.x + size.x <= viewport.max.x - 10.0 + f32::EPSILON);
            assert!(anchor.y + size.y <= viewport.max.y - 10.0 + f32::EPSILON);
        }
    }

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_score_color_bands() {
        assert_eq!(score_color(95), SUCCESS);
        assert_eq!(score_color(80), SUCCESS);
        assert_eq!(score_color(77), ACCENT_SOFT);
        assert_eq!(score_color(60), ACCENT_SOFT);
        assert_eq!(score_color(45), WARNING);
        assert_eq!(score_color(10), ERROR);
    }
}
