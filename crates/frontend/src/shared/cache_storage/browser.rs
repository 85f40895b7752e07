use super::{CacheError, CacheStore};
use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Cache, CacheStorage, Response};

/// `window.caches`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCacheStore;

impl BrowserCacheStore {
    fn storage() -> Result<CacheStorage, CacheError> {
        let window = web_sys::window().ok_or(CacheError::Unavailable)?;
        // 'caches' in window
        let present = js_sys::Reflect::has(&window, &JsValue::from_str("caches")).unwrap_or(false);
        if !present {
            return Err(CacheError::Unavailable);
        }
        window.caches().map_err(|_| CacheError::Unavailable)
    }

    async fn open(cache_name: &str) -> Result<Cache, CacheError> {
        let storage = Self::storage()?;
        let cache = JsFuture::from(storage.open(cache_name))
            .await
            .map_err(|e| CacheError::Open(format!("{e:?}")))?;
        cache
            .dyn_into::<Cache>()
            .map_err(|e| CacheError::Open(format!("{e:?}")))
    }
}

#[async_trait(?Send)]
impl CacheStore for BrowserCacheStore {
    async fn match_text(&self, cache_name: &str, key: &str) -> Result<Option<String>, CacheError> {
        let cache = Self::open(cache_name).await?;
        let matched = JsFuture::from(cache.match_with_str(key))
            .await
            .map_err(|e| CacheError::Lookup(format!("{e:?}")))?;
        if matched.is_undefined() || matched.is_null() {
            return Ok(None);
        }

        let response: Response = matched
            .dyn_into()
            .map_err(|e| CacheError::Lookup(format!("{e:?}")))?;
        let text_promise = response
            .text()
            .map_err(|e| CacheError::Body(format!("{e:?}")))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| CacheError::Body(format!("{e:?}")))?;
        text.as_string()
            .map(Some)
            .ok_or_else(|| CacheError::Body("bad text".to_string()))
    }

    async fn delete(&self, cache_name: &str, key: &str) -> Result<bool, CacheError> {
        let cache = Self::open(cache_name).await?;
        let deleted = JsFuture::from(cache.delete_with_str(key))
            .await
            .map_err(|e| CacheError::Delete(format!("{e:?}")))?;
        Ok(deleted.as_bool().unwrap_or(false))
    }
}
