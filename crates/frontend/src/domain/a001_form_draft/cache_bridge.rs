//! Чтение и удаление черновика формы в Cache Storage.
//!
//! Запись сюда не входит: сохраняет черновик service worker по сообщению
//! `SAVE_FORM_DATA`. Ошибки хранилища не выходят наружу, они логируются и
//! считаются отсутствием записи.

use crate::shared::cache_storage::CacheStore;
use contracts::domain::a001_form_draft::aggregate::FormState;

pub struct CacheBridge<S> {
    store: S,
    cache_name: String,
    key: String,
}

impl<S: CacheStore> CacheBridge<S> {
    pub fn new(store: S, cache_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            store,
            cache_name: cache_name.into(),
            key: key.into(),
        }
    }

    /// Прочитать черновик. Повреждённая запись удаляется.
    pub async fn read(&self) -> Option<FormState> {
        log::debug!("Checking cache '{}'...", self.cache_name);
        let body = match self.store.match_text(&self.cache_name, &self.key).await {
            Ok(Some(body)) => body,
            Ok(None) => {
                log::info!("No cached data found.");
                return None;
            }
            Err(e) => {
                log::error!("{}", e);
                return None;
            }
        };

        match FormState::from_json(&body) {
            Ok(state) => {
                log::info!("Cached data found: {:?}", state);
                Some(state)
            }
            Err(e) => {
                log::warn!("Cached entry \"{}\" is corrupt ({}), removing it", self.key, e);
                self.remove().await;
                None
            }
        }
    }

    /// Удалить черновик; `true` если запись была
    pub async fn remove(&self) -> bool {
        match self.store.delete(&self.cache_name, &self.key).await {
            Ok(true) => {
                log::info!("Object \"{}\" was successfully deleted.", self.key);
                true
            }
            Ok(false) => {
                log::info!("Object \"{}\" was not found in the cache.", self.key);
                false
            }
            Err(e) => {
                log::error!("{}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cache_storage::memory::MemoryCacheStore;
    use contracts::enums::select_option::SelectOption;
    use futures::executor::block_on;

    const CACHE: &str = "form-data-cache";
    const KEY: &str = "/browser/formData";

    fn bridge(store: &MemoryCacheStore) -> CacheBridge<MemoryCacheStore> {
        CacheBridge::new(store.clone(), CACHE, KEY)
    }

    #[test]
    fn test_read_existing_entry() {
        let store = MemoryCacheStore::new();
        store.put_text(CACHE, KEY, r#"{"name":"Alice","selectOption":"option2","agree":true}"#);

        let state = block_on(bridge(&store).read());
        assert_eq!(state, Some(FormState::new("Alice", SelectOption::Option2, true)));
        assert!(store.contains(CACHE, KEY));
    }

    #[test]
    fn test_read_missing_entry() {
        let store = MemoryCacheStore::new();
        assert_eq!(block_on(bridge(&store).read()), None);
    }

    #[test]
    fn test_corrupt_entry_is_absent_and_deleted() {
        let store = MemoryCacheStore::new();
        store.put_text(CACHE, KEY, "{not json");

        assert_eq!(block_on(bridge(&store).read()), None);
        assert!(!store.contains(CACHE, KEY));
    }

    #[test]
    fn test_remove_reports_deletion() {
        let store = MemoryCacheStore::new();
        store.put_text(CACHE, KEY, "{}");
        let bridge = bridge(&store);

        assert!(block_on(bridge.remove()));
        assert!(!block_on(bridge.remove()));
    }

    #[test]
    fn test_entry_in_other_cache_is_ignored() {
        let store = MemoryCacheStore::new();
        store.put_text("other-cache", KEY, r#"{"name":"Alice"}"#);
        assert_eq!(block_on(bridge(&store).read()), None);
        assert!(!block_on(bridge(&store).remove()));
    }

    #[test]
    fn test_unavailable_api_is_silent() {
        let store = MemoryCacheStore::unavailable();
        let bridge = bridge(&store);
        assert_eq!(block_on(bridge.read()), None);
        assert!(!block_on(bridge.remove()));
    }
}
