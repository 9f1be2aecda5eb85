use serde::{Deserialize, Serialize};

use crate::paper::Paper;

/// At most this many comparison papers are kept from a score response.
pub const MAX_COMPARED_PAPERS: usize = 5;

/// One issue the backend raised against a sentence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl Issue {
    pub fn reason_or_placeholder(&self) -> &str {
        self.reason.as_deref().unwrap_or("Issue detected")
    }

    pub fn suggestion_or_placeholder(&self) -> &str {
        self.suggestion.as_deref().unwrap_or("Review this sentence")
    }
}

/// Per-sentence feedback from the scoring backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceFeedback {
    #[serde(default)]
    pub sentence: String,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Normalized per-signal sub-scores, 0.0–1.0 each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub novelty: f32,
    pub alignment: f32,
    pub coherence: f32,
    pub relevance: f32,
}

impl ScoreBreakdown {
    /// Signals in display order.
    pub fn signals(&self) -> [(&'static str, f32); 4] {
        [
            ("Novelty", self.novelty),
            ("Alignment", self.alignment),
            ("Coherence", self.coherence),
            ("Relevance", self.relevance),
        ]
    }
}

/// A fully normalized draft analysis, ready for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftAnalysis {
    /// Overall quality score, 0–100.
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub sentences: Vec<SentenceFeedback>,
    pub papers: Vec<Paper>,
}

impl DraftAnalysis {
    /// Total issue count across all sentence records.
    pub fn issue_count(&self) -> usize {
        self.sentences.iter().map(|s| s.issues.len()).sum()
    }
}

// ─── Wire contract ───────────────────────────────────────────

/// Body for `POST /score`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRequest {
    pub problem: String,
    pub paragraph: String,
}

/// Breakdown as carried on the wire: 0–100 integers, all optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireBreakdown {
    #[serde(default)]
    pub novelty: Option<f64>,
    #[serde(default)]
    pub alignment: Option<f64>,
    #[serde(default)]
    pub coherence: Option<f64>,
    #[serde(default)]
    pub relevance: Option<f64>,
}

/// Response of `POST /score`. Optional fields are defensively defaulted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreResponse {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub breakdown: Option<WireBreakdown>,
    #[serde(default)]
    pub sentences: Vec<SentenceFeedback>,
    #[serde(default)]
    pub papers: Vec<Paper>,
}

impl ScoreResponse {
    /// Normalize a wire response: breakdown scaled to 0–1, score clamped
    /// to 0–100, papers capped at [`MAX_COMPARED_PAPERS`].
    pub fn into_analysis(self) -> DraftAnalysis {
        let wire = self.breakdown.unwrap_or_default();
        let norm = |v: Option<f64>| (v.unwrap_or(0.0) / 100.0).clamp(0.0, 1.0) as f32;
        let mut papers = self.papers;
        papers.truncate(MAX_COMPARED_PAPERS);
        DraftAnalysis {
            score: self.score.clamp(0.0, 100.0).round() as u32,
            breakdown: ScoreBreakdown {
                novelty: norm(wire.novelty),
                alignment: norm(wire.alignment),
                coherence: norm(wire.coherence),
                relevance: norm(wire.relevance),
            },
            sentences: self.sentences,
            papers,
        }
    }
}

/// Response of `GET /test-papers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PapersResponse {
    #[serde(default)]
    pub papers_count: Option<usize>,
    #[serde(default)]
    pub papers: Vec<Paper>,
}
