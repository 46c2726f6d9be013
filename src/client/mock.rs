//! Transport and cache test doubles
//!
//! Configure canned responses via builder methods, then assert on the
//! requests and cache operations the client performed. Unmatched paths
//! answer 404, which is also how the real service reports "no such
//! resource".

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::cache::Cache;
use crate::transport::{RawResponse, Transport};

/// Scripted transport returning canned status/body pairs per path.
///
/// Clones share state, so a test can hand one clone to the client and
/// keep the other for assertions.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, RawResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
    closed: Arc<Mutex<bool>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a response for `path`.
    pub fn with_response(self, path: &str, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().insert(
            path.to_string(),
            RawResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// Every URL fetched, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of fetches performed.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Whether `close` was called.
    pub fn closed(&self) -> bool {
        *self.closed.lock().unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> crate::error::Result<RawResponse> {
        self.requests.lock().unwrap().push(url.to_string());

        let response = self.responses.lock().unwrap().get(url).cloned();
        Ok(response.unwrap_or(RawResponse {
            status: 404,
            body: String::new(),
        }))
    }

    async fn close(&self) {
        *self.closed.lock().unwrap() = true;
    }
}

/// One recorded mutation of a [`MemoryCache`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheOp {
    Set { key: String, value: String },
    Expire { key: String, ttl: Duration },
}

/// In-memory cache recording every mutation for assertions.
///
/// TTLs are recorded but never enforced; tests drive expiry by priming
/// or clearing entries themselves.
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<String, String>>>,
    ops: Arc<Mutex<Vec<CacheOp>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry, as if a previous request had stored it.
    /// Priming is not recorded as an operation.
    pub fn prime(self, key: &str, value: &str) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Every `set` and `expire` the client performed, in call order.
    pub fn ops(&self) -> Vec<CacheOp> {
        self.ops.lock().unwrap().clone()
    }

    /// Current stored value for `key`.
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.ops.lock().unwrap().push(CacheOp::Set {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    async fn expire(&self, key: &str, ttl: Duration) {
        self.ops.lock().unwrap().push(CacheOp::Expire {
            key: key.to_string(),
            ttl,
        });
    }
}
