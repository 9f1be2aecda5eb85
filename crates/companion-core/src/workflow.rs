//! Draft scoring workflow — state machine and score display ramp.

use companion_types::{event::AnalysisOutcome, CompanionError, Result};

/// Duration of the cosmetic 0 → score display ramp.
pub const SCORE_ANIM_MS: f64 = 1200.0;

/// Shown to the user when either input is empty; no request is issued.
pub const VALIDATION_MESSAGE: &str = "Please enter both problem statement and draft text";

/// Lifecycle of a draft analysis. A failed request surfaces as
/// `Displayed(Failed)` — it is never masked with fabricated results.
#[derive(Debug, Clone, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Analyzing,
    Displayed(AnalysisOutcome),
}

impl AnalysisPhase {
    pub fn is_analyzing(&self) -> bool {
        matches!(self, AnalysisPhase::Analyzing)
    }

    pub fn is_displayed(&self) -> bool {
        matches!(self, AnalysisPhase::Displayed(_))
    }
}

/// Guard for the `Idle → Analyzing` transition: both fields must be
/// non-empty after trimming.
pub fn validate_inputs(problem: &str, draft: &str) -> Result<()> {
    if problem.trim().is_empty() || draft.trim().is_empty() {
        return Err(CompanionError::Validation(VALIDATION_MESSAGE.to_string()));
    }
    Ok(())
}

/// Displayed score at `elapsed_ms` into the ramp. Purely cosmetic floor
/// interpolation; lands exactly on `target` at the end.
pub fn ramp_value(target: u32, elapsed_ms: f64) -> u32 {
    if elapsed_ms >= SCORE_ANIM_MS {
        return target;
    }
    let fraction = (elapsed_ms / SCORE_ANIM_MS).max(0.0);
    (f64::from(target) * fraction).floor() as u32
}
