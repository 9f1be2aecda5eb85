//! `window.localStorage` backend.
//! Origin-scoped and persistent across page reloads. Values are strings,
//! so only UTF-8 payloads (our JSON) can be stored.

use async_trait::async_trait;
use companion_core::ports::StoragePort;
use companion_types::{CompanionError, Result};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Grab the origin's localStorage. Fails when running outside a
    /// window context or when the browser has storage disabled.
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| CompanionError::Storage("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CompanionError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| CompanionError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .storage
            .get_item(key)
            .map_err(|e| CompanionError::Storage(format!("{:?}", e)))?;
        Ok(value.map(String::into_bytes))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| CompanionError::Storage(format!("Non-UTF-8 value: {}", e)))?;
        self.storage
            .set_item(key, text)
            .map_err(|e| CompanionError::Storage(format!("{:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| CompanionError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
