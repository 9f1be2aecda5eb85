//! Assistant reply formatting for the live search workflow.
//!
//! Exactly one of these replies is appended per search, whether the
//! request succeeded, came back empty, or failed.

use companion_types::{analysis::PapersResponse, CompanionError};

const AUTHORS_SHOWN: usize = 3;
const ABSTRACT_CHARS: usize = 150;

/// Build the assistant reply for a completed search.
pub fn papers_reply(query: &str, response: &PapersResponse) -> String {
    if response.papers.is_empty() {
        return format!(
            "No papers found for \"{}\". Try being more specific or use different keywords.",
            query
        );
    }

    let count = response.papers_count.unwrap_or(response.papers.len());
    let list = response
        .papers
        .iter()
        .enumerate()
        .map(|(index, paper)| {
            let mut lines = vec![format!("{}. **{}**", index + 1, paper.title_or_placeholder())];
            if !paper.authors.is_empty() {
                lines.push(format!("   Authors: {}", paper.authors_line(AUTHORS_SHOWN)));
            }
            let mut meta = Vec::new();
            if let Some(year) = paper.year {
                meta.push(format!("Year: {}", year));
            }
            if let Some(citations) = paper.citations {
                meta.push(format!("Citations: {}", citations));
            }
            if !meta.is_empty() {
                lines.push(format!("   {}", meta.join(" • ")));
            }
            if let Some(snippet) = paper.abstract_snippet(ABSTRACT_CHARS) {
                lines.push(format!("   Abstract: {}", snippet));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Found {} research papers for: \"{}\"\n\n{}\n\nWhat aspect would you like to explore further?",
        count, query, list
    )
}

/// Build the assistant reply for a failed search, quoting the error.
pub fn search_failure_reply(error: &CompanionError) -> String {
    format!(
        "I couldn't connect to the research database. Please make sure the backend server is running.\n\nError: {}",
        error
    )
}
