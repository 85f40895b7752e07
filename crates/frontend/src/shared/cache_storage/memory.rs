use super::{CacheError, CacheStore};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Cache Storage в памяти. Клоны разделяют одно содержимое.
#[derive(Debug, Clone, Default)]
pub struct MemoryCacheStore {
    entries: Rc<RefCell<HashMap<(String, String), String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище, ведущее себя как окружение без Caches API
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.unavailable.set(true);
        store
    }

    pub fn put_text(&self, cache_name: &str, key: &str, body: &str) {
        self.entries
            .borrow_mut()
            .insert((cache_name.to_string(), key.to_string()), body.to_string());
    }

    pub fn get_text(&self, cache_name: &str, key: &str) -> Option<String> {
        self.entries
            .borrow()
            .get(&(cache_name.to_string(), key.to_string()))
            .cloned()
    }

    pub fn contains(&self, cache_name: &str, key: &str) -> bool {
        self.get_text(cache_name, key).is_some()
    }
}

#[async_trait(?Send)]
impl CacheStore for MemoryCacheStore {
    async fn match_text(&self, cache_name: &str, key: &str) -> Result<Option<String>, CacheError> {
        if self.unavailable.get() {
            return Err(CacheError::Unavailable);
        }
        Ok(self.get_text(cache_name, key))
    }

    async fn delete(&self, cache_name: &str, key: &str) -> Result<bool, CacheError> {
        if self.unavailable.get() {
            return Err(CacheError::Unavailable);
        }
        Ok(self
            .entries
            .borrow_mut()
            .remove(&(cache_name.to_string(), key.to_string()))
            .is_some())
    }
}
