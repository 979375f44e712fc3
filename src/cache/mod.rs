//! Resource Cache
//!
//! Explicit, session-owned storage for generated geometry, LOD bundles and
//! materials with idle expiry and size-bounded eviction.

mod resource_cache;
mod store;

pub use resource_cache::{CacheKind, CacheStats, CacheValue, ResourceCache};
