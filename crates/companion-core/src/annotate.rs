//! Annotation engine — maps backend sentence feedback onto the draft text.
//!
//! The draft is segmented into runs; runs covered by a matched sentence
//! carry that record's issue list. The UI renders the runs as styled
//! inline segments, so backend-controlled text never enters a markup
//! context and has no injection surface.

use companion_types::analysis::{Issue, SentenceFeedback};

/// One run of draft text. `issues` is empty for plain runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub issues: Vec<Issue>,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            issues: Vec::new(),
        }
    }

    pub fn is_marked(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Segment `text` against the given feedback records.
///
/// Each record's sentence is matched as a literal substring, first
/// occurrence only; a record whose first occurrence overlaps an already
/// claimed span falls through to its next occurrence. Records with an
/// empty sentence or no issues are skipped. Concatenating the returned
/// segments always reproduces `text` byte-for-byte; when nothing matches
/// the result is a single plain segment.
pub fn annotate(text: &str, records: &[SentenceFeedback]) -> Vec<Segment> {
    let mut spans: Vec<(usize, usize, &[Issue])> = Vec::new();

    for record in records {
        if record.sentence.is_empty() || record.issues.is_empty() {
            continue;
        }
        let mut from = 0;
        while let Some(offset) = text[from..].find(&record.sentence) {
            let start = from + offset;
            let end = start + record.sentence.len();
            if spans.iter().all(|(s, e, _)| end <= *s || start >= *e) {
                spans.push((start, end, &record.issues));
                break;
            }
            // Overlaps an earlier claim; try the next occurrence.
            from = end;
        }
    }

    spans.sort_by_key(|(start, _, _)| *start);

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, end, issues) in spans {
        if cursor < start {
            segments.push(Segment::plain(&text[cursor..start]));
        }
        segments.push(Segment {
            text: text[start..end].to_string(),
            issues: issues.to_vec(),
        });
        cursor = end;
    }
    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[cursor..]));
    }
    segments
}

/// Hover payload for a marked segment: every issue's reason and
/// suggestion, joined as plain text.
pub fn tooltip_text(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| {
            format!(
                "{}\nSuggestion: {}",
                issue.reason_or_placeholder(),
                issue.suggestion_or_placeholder()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
