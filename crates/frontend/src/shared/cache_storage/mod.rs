//! Доступ к Cache Storage браузера.
//!
//! Компоненты работают через трейт [`CacheStore`]; в браузере используется
//! [`BrowserCacheStore`], в тестах - хранилище в памяти.

mod browser;
#[cfg(test)]
pub mod memory;

pub use browser::BrowserCacheStore;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Caches API is not available in this environment")]
    Unavailable,

    #[error("Error opening cache: {0}")]
    Open(String),

    #[error("Error matching cache entry: {0}")]
    Lookup(String),

    #[error("Error reading cached response body: {0}")]
    Body(String),

    #[error("Error deleting cache entry: {0}")]
    Delete(String),
}

/// Именованные хранилища Cache Storage с текстовыми записями
#[async_trait(?Send)]
pub trait CacheStore {
    /// Тело записи `key` в хранилище `cache_name`, `None` если записи нет
    async fn match_text(&self, cache_name: &str, key: &str) -> Result<Option<String>, CacheError>;

    /// Удалить запись; `true` если что-то было удалено
    async fn delete(&self, cache_name: &str, key: &str) -> Result<bool, CacheError>;
}
