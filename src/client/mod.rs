//! Catalog client
//!
//! One async engine drives every endpoint: build the filter set, encode
//! the path, consult the cache, fall back to the transport, decode. The
//! [`blocking`] module wraps the same engine for callers without a
//! runtime.

pub mod blocking;
#[cfg(test)]
pub mod mock;

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::cache::Cache;
use crate::error::{Error, Result};
use crate::filters::{
    DeviceFilters, DeviceLookup, MaintainerFilters, MaintainerLookup, ReleaseFilters,
    ReleaseLookup, UpdateFilters,
};
use crate::models::{Device, Devices, Maintainer, Maintainers, Oems, Release, Releases, Updates};
use crate::query::{FilterSet, encode, normalize};
use crate::transport::{HttpTransport, RawResponse, Transport, TransportMode};

/// Public catalog endpoint, current major version.
pub const DEFAULT_HOST: &str = "https://api.orangefox.download/v3";

/// How long fetched responses stay valid in an attached cache.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Cached stand-in for a 404 response body.
pub(crate) const NOT_FOUND_MARKER: &str = "null";

/// Asynchronous client for the OrangeFox release catalog.
///
/// Cheap to share behind an [`Arc`]; one instance reuses its transport
/// connections across calls. Listing operations return their empty
/// collection when nothing matches, lookup operations return `None`.
///
/// ```no_run
/// use orangefox_api::OrangeFoxClient;
/// use orangefox_api::filters::DeviceFilters;
///
/// # async fn run() -> orangefox_api::Result<()> {
/// let client = OrangeFoxClient::new()?;
/// let devices = client
///     .devices(Some(&DeviceFilters::new().oem_name("Xiaomi")))
///     .await?;
/// for device in &devices {
///     println!("{}  {}", device.codename, device.full_name);
/// }
/// client.close().await;
/// # Ok(())
/// # }
/// ```
pub struct OrangeFoxClient<T: Transport = HttpTransport> {
    transport: T,
    host: String,
    cache: Option<Arc<dyn Cache>>,
    cache_ttl: Duration,
}

impl OrangeFoxClient {
    /// Create a client against the public catalog, without a cache.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T: Transport> OrangeFoxClient<T> {
    /// List devices matching `filters`.
    pub async fn devices(&self, filters: Option<&DeviceFilters>) -> Result<Devices> {
        let path = encode_filters("/devices/", filters.map(DeviceFilters::entries));
        Ok(self.fetch_resource(&path).await?.unwrap_or_default())
    }

    /// Look up a single device, `None` when nothing matches.
    pub async fn device(&self, lookup: &DeviceLookup) -> Result<Option<Device>> {
        let path = encode_filters("/devices/get/", Some(lookup.entries()));
        self.fetch_resource(&path).await
    }

    /// List every OEM with devices in the catalog.
    pub async fn oems(&self) -> Result<Oems> {
        let path = encode_filters("/oems/", None);
        Ok(self.fetch_resource(&path).await?.unwrap_or_default())
    }

    /// List maintainers matching `filters`.
    pub async fn maintainers(&self, filters: Option<&MaintainerFilters>) -> Result<Maintainers> {
        let path = encode_filters("/users/maintainers/", filters.map(MaintainerFilters::entries));
        Ok(self.fetch_resource(&path).await?.unwrap_or_default())
    }

    /// Look up a single maintainer, `None` when nothing matches.
    pub async fn maintainer(&self, lookup: &MaintainerLookup) -> Result<Option<Maintainer>> {
        let path = encode_filters("/users/maintainers/get/", Some(lookup.entries()));
        self.fetch_resource(&path).await
    }

    /// List releases matching `filters`.
    pub async fn releases(&self, filters: Option<&ReleaseFilters>) -> Result<Releases> {
        let path = encode_filters("/releases/", filters.map(ReleaseFilters::entries));
        Ok(self.fetch_resource(&path).await?.unwrap_or_default())
    }

    /// Look up a single release, `None` when nothing matches.
    pub async fn release(&self, lookup: &ReleaseLookup) -> Result<Option<Release>> {
        let path = encode_filters("/releases/get/", Some(lookup.entries()));
        self.fetch_resource(&path).await
    }

    /// List releases published after the release `last_known_id`.
    pub async fn updates(
        &self,
        last_known_id: &str,
        filters: Option<&UpdateFilters>,
    ) -> Result<Updates> {
        let base = format!("/updates/{last_known_id}/");
        let path = encode_filters(&base, filters.map(UpdateFilters::entries));
        Ok(self.fetch_resource(&path).await?.unwrap_or_default())
    }

    /// Check that the service is alive. Never cached; any answer other
    /// than a 200 `PONG` counts as down rather than as an error.
    pub async fn ping(&self) -> Result<bool> {
        let url = format!("{}/ping", self.host);
        log::debug!("GET {url}");

        let response = self.transport.get(&url).await?;
        Ok(response.status == 200 && response.body == "PONG")
    }

    /// Release the transport's connection state.
    pub async fn close(self) {
        self.transport.close().await;
    }

    /// Fetch `path`, going through the cache when one is attached.
    ///
    /// A cached empty string counts as a miss. On a miss the raw body is
    /// stored first and the TTL applied second; 404 responses are stored
    /// as [`NOT_FOUND_MARKER`] so negative results are cached too.
    async fn fetch_resource<M: DeserializeOwned>(&self, path: &str) -> Result<Option<M>> {
        let Some(cache) = self.cache.as_ref() else {
            let raw = self.fetch_raw(path).await?;
            return decode_payload(raw.as_deref());
        };

        match cache.get(path).await {
            Some(cached) if !cached.is_empty() => {
                log::debug!("Cache hit: {path}");
                decode_payload(Some(&cached))
            }
            _ => {
                log::debug!("Cache miss: {path}");
                let raw = self.fetch_raw(path).await?;
                cache
                    .set(path, raw.as_deref().unwrap_or(NOT_FOUND_MARKER))
                    .await;
                cache.expire(path, self.cache_ttl).await;
                decode_payload(raw.as_deref())
            }
        }
    }

    /// Issue the GET and map the status, `None` meaning "no such
    /// resource".
    async fn fetch_raw(&self, path: &str) -> Result<Option<String>> {
        let url = format!("{}{}", self.host, path);
        log::debug!("GET {url}");

        let response = self.transport.get(&url).await?;
        interpret_status(response)
    }
}

/// Map a raw response onto body, absence, or error.
fn interpret_status(response: RawResponse) -> Result<Option<String>> {
    match response.status {
        200 => Ok(Some(response.body)),
        402 => Err(Error::Validation),
        404 => Ok(None),
        status => Err(Error::UnexpectedStatus {
            status,
            body: response.body,
        }),
    }
}

/// Decode a raw body into a record; empty text and the not-found marker
/// both mean absent.
fn decode_payload<M: DeserializeOwned>(raw: Option<&str>) -> Result<Option<M>> {
    match raw {
        Some(text) if !text.is_empty() && text != NOT_FOUND_MARKER => {
            Ok(Some(serde_json::from_str(text)?))
        }
        _ => Ok(None),
    }
}

/// Normalize and encode one operation's filters onto its base path.
fn encode_filters(path: &str, entries: Option<FilterSet>) -> String {
    encode(path, &normalize(entries.unwrap_or_default()))
}

/// Configuration for [`OrangeFoxClient`].
///
/// ```no_run
/// use std::time::Duration;
/// use orangefox_api::OrangeFoxClient;
///
/// # fn run() -> orangefox_api::Result<()> {
/// let client = OrangeFoxClient::builder()
///     .host("https://api.orangefox.download/v3")
///     .cache_ttl(Duration::from_secs(300))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    host: String,
    cache: Option<Arc<dyn Cache>>,
    cache_ttl: Duration,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            cache: None,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Point the client at a different host. Trailing slashes are
    /// trimmed; endpoint paths supply their own.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        let host = host.into();
        self.host = host.trim_end_matches('/').to_string();
        self
    }

    /// Attach a response cache.
    pub fn cache(mut self, cache: Arc<dyn Cache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Override how long cached responses stay valid.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Build against the default HTTP transport.
    pub fn build(self) -> Result<OrangeFoxClient> {
        let transport = HttpTransport::new(TransportMode::Async)?;
        Ok(self.build_with_transport(transport))
    }

    /// Build against a caller-supplied transport.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> OrangeFoxClient<T> {
        OrangeFoxClient {
            transport,
            host: self.host,
            cache: self.cache,
            cache_ttl: self.cache_ttl,
        }
    }
}
