//! UI-level state that drives rendering.
//!
//! Chat history itself lives in the session store (single source of
//! truth); this struct holds only view concerns — mode, input buffers,
//! in-flight flags, and the current analysis phase. It is updated each
//! frame by draining the event bus.

use companion_core::store::SessionStore;
use companion_core::workflow::{ramp_value, AnalysisPhase};
use companion_types::event::{AnalysisOutcome, CompanionEvent};
use companion_types::message::Message;

/// Problem statement seeded into the draft panel.
pub const EXAMPLE_PROBLEM: &str = "Impact of bee population decline on food security";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    LiveAssist,
    DraftAnalysis,
}

pub struct UiState {
    pub mode: Mode,
    pub sidebar_open: bool,
    pub status_text: String,

    /// Live Assist input buffer.
    pub live_input: String,
    /// A paper search is in flight; send controls are disabled.
    pub thinking: bool,

    /// Draft Analysis inputs.
    pub draft_problem: String,
    pub draft_text: String,
    pub analysis: AnalysisPhase,
    /// Validation message shown when the analyze guard rejects.
    pub validation: Option<String>,
    /// `egui` time at which the score ramp started.
    score_anim_start: Option<f64>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            mode: Mode::LiveAssist,
            sidebar_open: true,
            status_text: "Ready".to_string(),
            live_input: String::new(),
            thinking: false,
            draft_problem: EXAMPLE_PROBLEM.to_string(),
            draft_text: String::new(),
            analysis: AnalysisPhase::Idle,
            validation: None,
            score_anim_start: None,
        }
    }

    /// Process events from the event bus. Completed searches append their
    /// prepared assistant reply to the store. Returns true when the store
    /// was mutated and should be persisted.
    pub fn process_events(
        &mut self,
        events: Vec<CompanionEvent>,
        store: &mut SessionStore,
        now: f64,
    ) -> bool {
        let mut store_mutated = false;
        for event in events {
            match event {
                CompanionEvent::SearchFinished {
                    conversation_id,
                    reply,
                } => {
                    self.thinking = false;
                    self.status_text = "Ready".to_string();
                    match store.append_message(&conversation_id, Message::assistant(reply)) {
                        Ok(()) => store_mutated = true,
                        // Conversation was deleted while the request was
                        // in flight; the reply has nowhere to go.
                        Err(e) => log::warn!("Dropping search reply: {}", e),
                    }
                }
                CompanionEvent::AnalysisFinished { outcome } => {
                    match &outcome {
                        AnalysisOutcome::Succeeded(analysis) => {
                            self.score_anim_start = Some(now);
                            self.status_text = format!("Score: {}/100", analysis.score);
                        }
                        AnalysisOutcome::Failed { reason } => {
                            self.status_text = format!("Analysis failed: {}", reason);
                        }
                    }
                    self.analysis = AnalysisPhase::Displayed(outcome);
                }
            }
        }
        store_mutated
    }

    /// Score currently shown by the cosmetic 0 → target ramp.
    pub fn displayed_score(&self, target: u32, now: f64) -> u32 {
        match self.score_anim_start {
            Some(start) => ramp_value(target, (now - start) * 1000.0),
            None => target,
        }
    }

    /// True while the ramp has not yet landed on the target.
    pub fn score_animating(&self, target: u32, now: f64) -> bool {
        self.displayed_score(target, now) < target
    }

    pub fn is_busy(&self) -> bool {
        self.thinking || self.analysis.is_analyzing()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
