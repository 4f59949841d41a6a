//! Caching layer for expensive read paths.
//!
//! Callers go through [`CacheFacade`], which owns the connection lifecycle and
//! never fails. Stores implement [`CacheService`]:
//! - [`RedisCache`] - Production Redis-backed store
//! - [`MemoryCache`] - In-process store for tests and single-node setups

mod facade;
mod memory_cache;
mod redis_cache;
mod service;

pub use facade::{CacheFacade, CacheHealth, CacheTarget};
pub use memory_cache::MemoryCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
