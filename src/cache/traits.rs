use async_trait::async_trait;

/// Outcome of a cache lookup. `ExistsButNoValue` covers backend errors
/// where the key state cannot be determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    ExistsButNoValue,
}

impl<T> CacheResult<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, CacheResult::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            CacheResult::Found(value) => Some(value),
            _ => None,
        }
    }
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// Inserts a value with a TTL in seconds. A TTL of 0 means the
    /// backend default.
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    async fn remove(&self, key: &str);

    async fn invalidate_all(&self);
}
