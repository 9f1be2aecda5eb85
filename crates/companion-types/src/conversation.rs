use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Greeting seeded into every fresh conversation.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your Research Assistant. You can:\n\
1. Ask me to find research papers on a topic\n\
2. Get feedback on your research writing\n\
3. Ask questions about research methodology\n\n\
How can I help you today?";

/// Default title until one is derived from the first user message.
pub const DEFAULT_TITLE: &str = "New Chat";

const TITLE_MAX_CHARS: usize = 50;
const TITLE_MIN_CHARS: usize = 3;

/// A persisted chat thread with its ordered message log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: String,
}

impl Conversation {
    /// Create a conversation seeded with the assistant greeting.
    pub fn seeded() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_string(),
            messages: vec![Message::assistant(WELCOME_MESSAGE)],
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// True while the log holds nothing beyond the seed greeting.
    pub fn is_fresh(&self) -> bool {
        self.messages.len() <= 1
    }
}

/// Derive a conversation title from the first user message.
/// Returns `None` for messages too short to make a useful title.
pub fn derive_title(first_message: &str) -> Option<String> {
    if first_message.chars().count() < TITLE_MIN_CHARS {
        return None;
    }
    let truncated: String = first_message.chars().take(TITLE_MAX_CHARS).collect();
    if first_message.chars().count() > TITLE_MAX_CHARS {
        Some(format!("{}...", truncated))
    } else {
        Some(truncated)
    }
}
