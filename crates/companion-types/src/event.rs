use serde::{Deserialize, Serialize};

use crate::analysis::DraftAnalysis;

/// Outcome of a draft scoring request. Success and failure are distinct
/// states; a backend failure is never papered over with fabricated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnalysisOutcome {
    Succeeded(DraftAnalysis),
    Failed { reason: String },
}

/// Events emitted by async workflows and drained by the UI each frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CompanionEvent {
    /// A paper search finished; `reply` is the prepared assistant message
    /// (result list, "no papers" notice, or connectivity failure report).
    SearchFinished {
        conversation_id: String,
        reply: String,
    },

    /// A draft scoring request finished, one way or the other.
    AnalysisFinished { outcome: AnalysisOutcome },
}
