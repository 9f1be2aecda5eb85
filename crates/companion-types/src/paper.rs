use serde::{Deserialize, Serialize};

/// A paper summary returned by the search backend.
/// Every field is optional on the wire; absence renders as a placeholder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paper {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub citations: Option<u64>,
    #[serde(default)]
    pub r#abstract: Option<String>,
}

impl Paper {
    pub fn title_or_placeholder(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// First `max` authors joined with commas, or a placeholder.
    pub fn authors_line(&self, max: usize) -> String {
        if self.authors.is_empty() {
            "Unknown authors".to_string()
        } else {
            self.authors
                .iter()
                .take(max)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Abstract truncated to `max_chars` on a char boundary, `...` when cut.
    pub fn abstract_snippet(&self, max_chars: usize) -> Option<String> {
        let text = self.r#abstract.as_deref()?;
        if text.chars().count() > max_chars {
            Some(format!("{}...", text.chars().take(max_chars).collect::<String>()))
        } else {
            Some(text.to_string())
        }
    }
}
