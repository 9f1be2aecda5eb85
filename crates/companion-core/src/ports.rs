//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `companion-core` (pure Rust).
//! Implementations live in `companion-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use companion_types::{
    analysis::{PapersResponse, ScoreResponse},
    Result,
};

// ─── Backend Port ────────────────────────────────────────────

/// The external scoring/search backend. This client only consumes its
/// JSON contract; scoring and ranking logic is entirely remote.
#[async_trait(?Send)]
pub trait BackendPort {
    /// `POST /score` with the problem statement and draft paragraph.
    async fn score_draft(&self, problem: &str, paragraph: &str) -> Result<ScoreResponse>;

    /// `GET /test-papers?problem=<query>` — single attempt, no retry.
    async fn search_papers(&self, query: &str) -> Result<PapersResponse>;
}

// ─── Storage Port ────────────────────────────────────────────

/// Origin-scoped durable key-value storage.
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Set a value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
