//! WASM-target tests for companion-platform (Node.js runtime).
//!
//! Tests MemoryStorage and the persisted session-store plumbing under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! LocalStorage and HttpBackend need a browser window and are exercised
//! manually against a running backend.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use companion_core::ports::StoragePort;
use companion_core::store::{SessionStore, CHATS_KEY, CURRENT_ID_KEY};
use companion_platform::storage::MemoryStorage;
use companion_types::message::Message;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    let result = storage.get("nonexistent").await.unwrap();
    assert!(result.is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_set_and_get() {
    let storage = MemoryStorage::new();
    storage.set("key1", b"value1").await.unwrap();
    let result = storage.get("key1").await.unwrap();
    assert_eq!(result, Some(b"value1".to_vec()));
}

#[wasm_bindgen_test]
async fn memory_storage_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("key", b"v1").await.unwrap();
    storage.set("key", b"v2").await.unwrap();
    let result = storage.get("key").await.unwrap();
    assert_eq!(result, Some(b"v2".to_vec()));
}

#[wasm_bindgen_test]
async fn memory_storage_delete() {
    let storage = MemoryStorage::new();
    storage.set("key", b"val").await.unwrap();
    storage.delete("key").await.unwrap();
    let result = storage.get("key").await.unwrap();
    assert!(result.is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_delete_nonexistent() {
    let storage = MemoryStorage::new();
    storage.delete("nonexistent").await.unwrap();
}

#[wasm_bindgen_test]
async fn memory_storage_unicode_value() {
    let storage = MemoryStorage::new();
    let text = "你好世界 🌍 こんにちは";
    storage.set("unicode", text.as_bytes()).await.unwrap();
    let result = storage.get("unicode").await.unwrap().unwrap();
    assert_eq!(String::from_utf8(result).unwrap(), text);
}

// ─── Session persistence through StoragePort ─────────────

#[wasm_bindgen_test]
async fn session_store_roundtrip_through_storage() {
    let storage = MemoryStorage::new();

    let mut store = SessionStore::seeded();
    let id = store.current().id.clone();
    store
        .append_message(&id, Message::user("find papers on bee decline"))
        .unwrap();

    let (bytes, current) = store.to_persisted().unwrap();
    storage.set(CHATS_KEY, &bytes).await.unwrap();
    storage.set(CURRENT_ID_KEY, current.as_bytes()).await.unwrap();

    let chats = storage.get(CHATS_KEY).await.unwrap();
    let current_raw = storage.get(CURRENT_ID_KEY).await.unwrap();
    let current_id = current_raw.and_then(|b| String::from_utf8(b).ok());

    let restored = SessionStore::from_persisted(chats.as_deref(), current_id.as_deref());
    assert_eq!(restored.current_id(), id);
    assert_eq!(restored.current().messages.len(), 2);
}

#[wasm_bindgen_test]
async fn session_store_restore_from_empty_storage() {
    let storage = MemoryStorage::new();
    let chats = storage.get(CHATS_KEY).await.unwrap();
    let restored = SessionStore::from_persisted(chats.as_deref(), None);
    assert_eq!(restored.conversations().len(), 1);
}

#[wasm_bindgen_test]
async fn session_store_restore_from_corrupt_storage() {
    let storage = MemoryStorage::new();
    storage.set(CHATS_KEY, b"{definitely not json").await.unwrap();
    let chats = storage.get(CHATS_KEY).await.unwrap();
    let restored = SessionStore::from_persisted(chats.as_deref(), Some("dangling"));
    assert_eq!(restored.conversations().len(), 1);
    assert!(restored.current().is_fresh());
}
