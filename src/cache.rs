//! Response cache port
//!
//! The client consults an attached cache before touching the network and
//! populates it after a miss. The store itself is the caller's: anything
//! implementing [`Cache`] works, from an in-process map to a shared
//! key-value service.

use std::time::Duration;

use async_trait::async_trait;

/// Get/set/expire capability consulted by the client.
///
/// Keys are fully-encoded request paths (for example
/// `/devices/?codename=lavender`), values raw response bodies. The client
/// writes with [`set`](Cache::set) and applies the TTL with a separate
/// [`expire`](Cache::expire) call; a task cancelled between the two leaves
/// an entry without a TTL, so implementations that cannot tolerate
/// immortal entries should clear any previous TTL inside `set`.
///
/// All methods are infallible: a backend problem during [`get`](Cache::get)
/// surfaces as a miss, and failed writes are dropped silently. Eviction is
/// entirely the implementation's business.
///
/// ```
/// use std::collections::HashMap;
/// use std::sync::Mutex;
/// use std::time::Duration;
///
/// use async_trait::async_trait;
/// use orangefox_api::cache::Cache;
///
/// /// Process-local store that never evicts; fine for short-lived tools.
/// #[derive(Default)]
/// struct MapCache {
///     entries: Mutex<HashMap<String, String>>,
/// }
///
/// #[async_trait]
/// impl Cache for MapCache {
///     async fn get(&self, key: &str) -> Option<String> {
///         self.entries.lock().ok()?.get(key).cloned()
///     }
///
///     async fn set(&self, key: &str, value: &str) {
///         if let Ok(mut entries) = self.entries.lock() {
///             entries.insert(key.to_string(), value.to_string());
///         }
///     }
///
///     async fn expire(&self, _key: &str, _ttl: Duration) {}
/// }
/// ```
#[async_trait]
pub trait Cache: Send + Sync {
    /// Look up a previously stored body. `None` means miss.
    async fn get(&self, key: &str) -> Option<String>;

    /// Store a raw body under `key`.
    async fn set(&self, key: &str, value: &str);

    /// Apply a time-to-live to the entry under `key`.
    async fn expire(&self, key: &str, ttl: Duration);
}
