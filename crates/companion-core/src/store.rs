//! Session store — the collection of conversations and the current pointer.
//!
//! The store is the single source of truth for chat state: panels render
//! directly from it, and every mutation is followed by a persist in the app
//! layer. Restore tolerates missing or corrupt persisted data by falling
//! back to one freshly seeded conversation.

use companion_types::{
    conversation::{derive_title, Conversation},
    message::{Message, Role},
    CompanionError, Result,
};

/// Durable key holding the serialized conversation list.
pub const CHATS_KEY: &str = "researchChats";
/// Durable key holding the current conversation id.
pub const CURRENT_ID_KEY: &str = "currentChatId";

/// Invariants: the list is never empty, and the current id always resolves
/// to a conversation present in the list.
pub struct SessionStore {
    conversations: Vec<Conversation>,
    current_id: String,
}

impl SessionStore {
    /// A store with a single seeded conversation.
    pub fn seeded() -> Self {
        let conv = Conversation::seeded();
        let current_id = conv.id.clone();
        Self {
            conversations: vec![conv],
            current_id,
        }
    }

    /// Rebuild from persisted bytes. Fails soft: bad JSON, an empty list,
    /// or a dangling current id all degrade to a usable store instead of
    /// an error.
    pub fn from_persisted(chats: Option<&[u8]>, current_id: Option<&str>) -> Self {
        let conversations = chats
            .and_then(|bytes| match serde_json::from_slice::<Vec<Conversation>>(bytes) {
                Ok(list) => Some(list),
                Err(e) => {
                    log::warn!("Discarding corrupt persisted chats: {}", e);
                    None
                }
            })
            .filter(|list| !list.is_empty());

        match conversations {
            Some(list) => {
                let current = current_id
                    .filter(|id| list.iter().any(|c| c.id == *id))
                    .map(str::to_string)
                    .unwrap_or_else(|| list[0].id.clone());
                log::info!("Restored {} conversation(s)", list.len());
                Self {
                    conversations: list,
                    current_id: current,
                }
            }
            None => {
                log::info!("No usable persisted chats, seeding a fresh conversation");
                Self::seeded()
            }
        }
    }

    /// Serialize for durable storage: the JSON conversation list and the
    /// current id, written under [`CHATS_KEY`] and [`CURRENT_ID_KEY`].
    pub fn to_persisted(&self) -> Result<(Vec<u8>, String)> {
        let bytes = serde_json::to_vec(&self.conversations)?;
        Ok((bytes, self.current_id.clone()))
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    /// The current conversation. Total by invariant: the pointer never
    /// dangles and the list is never empty.
    pub fn current(&self) -> &Conversation {
        self.conversations
            .iter()
            .find(|c| c.id == self.current_id)
            .unwrap_or(&self.conversations[0])
    }

    /// Insert a fresh seeded conversation at the head and make it current.
    pub fn new_conversation(&mut self) -> &Conversation {
        let conv = Conversation::seeded();
        self.current_id = conv.id.clone();
        self.conversations.insert(0, conv);
        &self.conversations[0]
    }

    /// Point at an existing conversation.
    pub fn switch_to(&mut self, id: &str) -> Result<()> {
        if !self.conversations.iter().any(|c| c.id == id) {
            return Err(CompanionError::NotFound(id.to_string()));
        }
        self.current_id = id.to_string();
        Ok(())
    }

    /// Append a message to the named conversation's log. The first user
    /// message after the seed greeting also sets the title, once.
    pub fn append_message(&mut self, id: &str, message: Message) -> Result<()> {
        let conv = self
            .conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CompanionError::NotFound(id.to_string()))?;

        let was_fresh = conv.is_fresh();
        let derived = if was_fresh && message.role == Role::User {
            derive_title(&message.content)
        } else {
            None
        };
        conv.messages.push(message);
        if let Some(title) = derived {
            conv.title = title;
        }
        Ok(())
    }

    /// Remove a conversation. If it was current, the first remaining one
    /// becomes current; deleting the last conversation reseeds a fresh one.
    pub fn delete_conversation(&mut self, id: &str) -> Result<()> {
        let before = self.conversations.len();
        self.conversations.retain(|c| c.id != id);
        if self.conversations.len() == before {
            return Err(CompanionError::NotFound(id.to_string()));
        }

        if self.conversations.is_empty() {
            let conv = Conversation::seeded();
            self.current_id = conv.id.clone();
            self.conversations.push(conv);
        } else if self.current_id == id {
            self.current_id = self.conversations[0].id.clone();
        }
        Ok(())
    }
}
