//! Process-wide cache entry point with lazy connection and fail-open semantics.

use super::memory_cache::MemoryCache;
use super::redis_cache::RedisCache;
use super::service::{CacheError, CacheResult, CacheService};
use metrics::counter;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

/// Upper bound on connecting to the store and on each store round trip.
pub const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_secs(2);

/// Which store the facade connects to on first use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheTarget {
    /// No store; the facade is pass-through.
    Disabled,
    /// In-process [`MemoryCache`].
    Memory,
    /// Redis at the given URL.
    Redis(String),
}

/// Reported by [`CacheFacade::health_check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheHealth {
    /// Pass-through mode (not configured, failed to connect, or closed).
    Disabled,
    Healthy,
    Unreachable,
}

enum CacheSlot {
    Uninitialized,
    Ready(Arc<dyn CacheService>),
    PassThrough,
    Closed,
}

/// Optional key-value cache in front of expensive reads.
///
/// Values are stored as JSON. Every operation is fail-open: a missing store,
/// transport errors and undecodable entries are logged and reported as a miss
/// (or `false` for writes), never as an error. Losing the cache costs latency,
/// not correctness.
///
/// The store is connected on first use. If no store is configured, or the
/// connection attempt fails, the facade stays in pass-through mode for the rest
/// of the process. [`CacheFacade::close`] releases the connection for shutdown.
///
/// The connection attempt and every store call are bounded by a timeout (see
/// [`CacheFacade::with_timeout`]); a store that stops answering costs at most
/// that long per operation.
pub struct CacheFacade {
    target: CacheTarget,
    slot: RwLock<CacheSlot>,
    timeout: Duration,
}

impl CacheFacade {
    /// Creates a facade that connects to `target` lazily.
    pub fn new(target: CacheTarget) -> Self {
        Self {
            target,
            slot: RwLock::new(CacheSlot::Uninitialized),
            timeout: DEFAULT_CACHE_TIMEOUT,
        }
    }

    /// Overrides [`DEFAULT_CACHE_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Creates a facade over an already connected store.
    pub fn with_backend(backend: Arc<dyn CacheService>) -> Self {
        Self {
            target: CacheTarget::Disabled,
            slot: RwLock::new(CacheSlot::Ready(backend)),
            timeout: DEFAULT_CACHE_TIMEOUT,
        }
    }

    /// Creates a facade in pass-through mode.
    pub fn disabled() -> Self {
        Self {
            target: CacheTarget::Disabled,
            slot: RwLock::new(CacheSlot::PassThrough),
            timeout: DEFAULT_CACHE_TIMEOUT,
        }
    }

    /// Returns the cached value for `key`, or `None` on miss, expiry, pass-through,
    /// store error or decode error.
    pub async fn get_cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let backend = self.backend().await?;

        match self.bounded(backend.get(key)).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => {
                    debug!("Cache HIT: {}", key);
                    counter!("cache_hits_total").increment(1);
                    Some(value)
                }
                Err(e) => {
                    warn!("Cache entry {} could not be decoded: {}", key, e);
                    counter!("cache_errors_total", "op" => "decode").increment(1);
                    None
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                counter!("cache_misses_total").increment(1);
                None
            }
            Err(e) => {
                error!("Cache GET failed for {}: {}", key, e);
                counter!("cache_errors_total", "op" => "get").increment(1);
                None
            }
        }
    }

    /// Stores `value` under `key` for `ttl_seconds`. Returns whether the store
    /// accepted it.
    ///
    /// A TTL of zero means "not present" and invalidates the key instead.
    pub async fn set_cached<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl_seconds: u64,
    ) -> bool {
        if ttl_seconds == 0 {
            return self.invalidate(key).await;
        }

        let Some(backend) = self.backend().await else {
            return false;
        };

        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Cache entry {} could not be encoded: {}", key, e);
                counter!("cache_errors_total", "op" => "encode").increment(1);
                return false;
            }
        };

        match self.bounded(backend.set(key, &raw, ttl_seconds)).await {
            Ok(()) => {
                debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
                true
            }
            Err(e) => {
                warn!("Cache SET failed for {}: {}", key, e);
                counter!("cache_errors_total", "op" => "set").increment(1);
                false
            }
        }
    }

    /// Removes `key`. Returns whether the delete reached the store.
    pub async fn invalidate(&self, key: &str) -> bool {
        let Some(backend) = self.backend().await else {
            return false;
        };

        match self.bounded(backend.delete(key)).await {
            Ok(()) => {
                debug!("Cache INVALIDATE: {}", key);
                true
            }
            Err(e) => {
                warn!("Cache DEL failed for {}: {}", key, e);
                counter!("cache_errors_total", "op" => "delete").increment(1);
                false
            }
        }
    }

    /// Reports store health, connecting first if needed.
    pub async fn health_check(&self) -> CacheHealth {
        let Some(backend) = self.backend().await else {
            return CacheHealth::Disabled;
        };

        match timeout(self.timeout, backend.health_check()).await {
            Ok(true) => CacheHealth::Healthy,
            Ok(false) | Err(_) => CacheHealth::Unreachable,
        }
    }

    /// Drops the store connection. The facade is pass-through afterwards.
    pub async fn close(&self) {
        let mut slot = self.slot.write().await;
        if matches!(*slot, CacheSlot::Ready(_)) {
            info!("Cache connection closed");
        }
        *slot = CacheSlot::Closed;
    }

    /// Returns the connected store, initializing it at most once.
    async fn backend(&self) -> Option<Arc<dyn CacheService>> {
        {
            let slot = self.slot.read().await;
            match &*slot {
                CacheSlot::Ready(backend) => return Some(backend.clone()),
                CacheSlot::PassThrough | CacheSlot::Closed => return None,
                CacheSlot::Uninitialized => {}
            }
        }

        let mut slot = self.slot.write().await;
        if matches!(*slot, CacheSlot::Uninitialized) {
            *slot = self.connect().await;
        }

        match &*slot {
            CacheSlot::Ready(backend) => Some(backend.clone()),
            _ => None,
        }
    }

    async fn connect(&self) -> CacheSlot {
        match &self.target {
            CacheTarget::Disabled => {
                info!("Cache disabled (pass-through)");
                CacheSlot::PassThrough
            }
            CacheTarget::Memory => {
                info!("Cache enabled (in-memory)");
                CacheSlot::Ready(Arc::new(MemoryCache::new()))
            }
            CacheTarget::Redis(url) => {
                match timeout(self.timeout, RedisCache::connect(url)).await {
                    Ok(Ok(redis)) => {
                        info!("Cache enabled (Redis)");
                        CacheSlot::Ready(Arc::new(redis))
                    }
                    Ok(Err(e)) => {
                        warn!("{}. Cache running in pass-through mode.", e);
                        CacheSlot::PassThrough
                    }
                    Err(_) => {
                        warn!(
                            "Redis did not answer within {:?}. Cache running in pass-through mode.",
                            self.timeout
                        );
                        CacheSlot::PassThrough
                    }
                }
            }
        }
    }

    async fn bounded<T>(&self, op: impl Future<Output = CacheResult<T>>) -> CacheResult<T> {
        match timeout(self.timeout, op).await {
            Ok(result) => result,
            Err(_) => Err(CacheError::OperationError(format!(
                "timed out after {:?}",
                self.timeout
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::service::MockCacheService;
    use serde_json::{Value, json};
    use std::time::Instant;
    use tokio::net::TcpListener;

    fn memory_facade() -> CacheFacade {
        CacheFacade::with_backend(Arc::new(MemoryCache::new()))
    }

    fn failing_backend() -> MockCacheService {
        let mut mock = MockCacheService::new();
        mock.expect_get()
            .returning(|_| Err(CacheError::OperationError("connection reset".to_string())));
        mock.expect_set()
            .returning(|_, _, _| Err(CacheError::OperationError("connection reset".to_string())));
        mock.expect_delete()
            .returning(|_| Err(CacheError::OperationError("connection reset".to_string())));
        mock.expect_health_check().returning(|| false);
        mock
    }

    #[tokio::test]
    async fn test_round_trip() {
        let cache = memory_facade();

        assert!(cache.set_cached("k", &json!({ "a": 1 }), 30).await);

        let cached: Option<Value> = cache.get_cached("k").await;
        assert_eq!(cached, Some(json!({ "a": 1 })));
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = memory_facade();
        assert!(cache.set_cached("k", &json!({ "a": 1 }), 1).await);

        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert_eq!(cache.get_cached::<Value>("k").await, None);
    }

    #[tokio::test]
    async fn test_pass_through_always_misses() {
        let cache = CacheFacade::disabled();

        assert!(!cache.set_cached("k", &json!({ "a": 1 }), 30).await);
        assert_eq!(cache.get_cached::<Value>("k").await, None);
        assert!(!cache.invalidate("k").await);
        assert_eq!(cache.health_check().await, CacheHealth::Disabled);
    }

    #[tokio::test]
    async fn test_disabled_target_is_pass_through() {
        let cache = CacheFacade::new(CacheTarget::Disabled);

        assert!(!cache.set_cached("k", &1, 30).await);
        assert_eq!(cache.get_cached::<i32>("k").await, None);
    }

    #[tokio::test]
    async fn test_lazy_memory_target_keeps_one_store() {
        let cache = CacheFacade::new(CacheTarget::Memory);

        assert!(cache.set_cached("k", &"value", 30).await);
        assert_eq!(
            cache.get_cached::<String>("k").await,
            Some("value".to_string())
        );
        assert_eq!(cache.health_check().await, CacheHealth::Healthy);
    }

    #[tokio::test]
    async fn test_unparseable_redis_url_falls_back_to_pass_through() {
        let cache = CacheFacade::new(CacheTarget::Redis("not a url".to_string()));

        assert!(!cache.set_cached("k", &1, 30).await);
        assert_eq!(cache.get_cached::<i32>("k").await, None);
        assert_eq!(cache.health_check().await, CacheHealth::Disabled);
    }

    /// Accepts connections and holds them open without ever replying.
    async fn silent_listener() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        format!("redis://{}", addr)
    }

    #[tokio::test]
    async fn test_unresponsive_redis_falls_back_within_timeout() {
        let url = silent_listener().await;
        let cache = CacheFacade::new(CacheTarget::Redis(url))
            .with_timeout(Duration::from_millis(200));

        let started = Instant::now();
        assert_eq!(cache.get_cached::<i32>("k").await, None);
        assert!(started.elapsed() < Duration::from_secs(2));

        let started = Instant::now();
        assert!(!cache.set_cached("k", &1, 30).await);
        assert_eq!(cache.health_check().await, CacheHealth::Disabled);
        assert!(started.elapsed() < Duration::from_millis(100));
    }

    /// Store whose calls never complete.
    struct StalledStore;

    #[async_trait::async_trait]
    impl CacheService for StalledStore {
        async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
            std::future::pending().await
        }

        async fn set(&self, _key: &str, _value: &str, _ttl_seconds: u64) -> CacheResult<()> {
            std::future::pending().await
        }

        async fn delete(&self, _key: &str) -> CacheResult<()> {
            std::future::pending().await
        }

        async fn health_check(&self) -> bool {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_stalled_store_calls_time_out() {
        let cache = CacheFacade::with_backend(Arc::new(StalledStore))
            .with_timeout(Duration::from_millis(50));

        assert_eq!(cache.get_cached::<i32>("k").await, None);
        assert!(!cache.set_cached("k", &1, 30).await);
        assert!(!cache.invalidate("k").await);
        assert_eq!(cache.health_check().await, CacheHealth::Unreachable);
    }

    #[tokio::test]
    async fn test_zero_ttl_invalidates() {
        let cache = memory_facade();
        assert!(cache.set_cached("k", &json!({ "a": 1 }), 30).await);

        assert!(cache.set_cached::<Option<Value>>("k", &None, 0).await);

        assert_eq!(cache.get_cached::<Value>("k").await, None);
    }

    #[tokio::test]
    async fn test_invalidate_removes_entry() {
        let cache = memory_facade();
        assert!(cache.set_cached("k", &42, 30).await);

        assert!(cache.invalidate("k").await);

        assert_eq!(cache.get_cached::<i32>("k").await, None);
    }

    #[tokio::test]
    async fn test_decode_failure_is_a_miss() {
        let backend = Arc::new(MemoryCache::new());
        backend.set("k", "not json", 30).await.unwrap();
        let cache = CacheFacade::with_backend(backend);

        assert_eq!(cache.get_cached::<Value>("k").await, None);
    }

    #[tokio::test]
    async fn test_type_mismatch_is_a_miss() {
        let cache = memory_facade();
        assert!(cache.set_cached("k", &json!({ "a": 1 }), 30).await);

        assert_eq!(cache.get_cached::<Vec<i32>>("k").await, None);
    }

    #[tokio::test]
    async fn test_store_errors_are_swallowed() {
        let cache = CacheFacade::with_backend(Arc::new(failing_backend()));

        assert_eq!(cache.get_cached::<Value>("k").await, None);
        assert!(!cache.set_cached("k", &1, 30).await);
        assert!(!cache.invalidate("k").await);
        assert_eq!(cache.health_check().await, CacheHealth::Unreachable);
    }

    #[tokio::test]
    async fn test_close_switches_to_pass_through() {
        let cache = memory_facade();
        assert!(cache.set_cached("k", &1, 30).await);

        cache.close().await;

        assert_eq!(cache.get_cached::<i32>("k").await, None);
        assert!(!cache.set_cached("k", &1, 30).await);
        assert_eq!(cache.health_check().await, CacheHealth::Disabled);
    }
}
