//! Blocking catalog client
//!
//! Wraps the async engine and drives each call to completion on a
//! private current-thread runtime, so callers without an async runtime
//! of their own get the same behavior from plain function calls. The
//! façade bodies live in [`super`]; nothing is duplicated here beyond
//! the `block_on` shims.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::cache::Cache;
use crate::error::{Error, Result};
use crate::filters::{
    DeviceFilters, DeviceLookup, MaintainerFilters, MaintainerLookup, ReleaseFilters,
    ReleaseLookup, UpdateFilters,
};
use crate::models::{Device, Devices, Maintainer, Maintainers, Oems, Release, Releases, Updates};
use crate::transport::{HttpTransport, Transport, TransportMode};

/// Blocking client for the OrangeFox release catalog.
///
/// Every operation runs to completion on the caller's thread. The
/// transport's connection state is released when the client is dropped.
///
/// ```no_run
/// use orangefox_api::blocking::OrangeFoxClient;
/// use orangefox_api::filters::DeviceFilters;
///
/// # fn run() -> orangefox_api::Result<()> {
/// let client = OrangeFoxClient::new()?;
/// let devices = client.devices(Some(&DeviceFilters::new().oem_name("Xiaomi")))?;
/// for device in &devices {
///     println!("{}  {}", device.codename, device.full_name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct OrangeFoxClient<T: Transport = HttpTransport> {
    inner: super::OrangeFoxClient<T>,
    runtime: Runtime,
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
    pub fn devices(&self, filters: Option<&DeviceFilters>) -> Result<Devices> {
        self.runtime.block_on(self.inner.devices(filters))
    }

    /// Look up a single device, `None` when nothing matches.
    pub fn device(&self, lookup: &DeviceLookup) -> Result<Option<Device>> {
        self.runtime.block_on(self.inner.device(lookup))
    }

    /// List every OEM with devices in the catalog.
    pub fn oems(&self) -> Result<Oems> {
        self.runtime.block_on(self.inner.oems())
    }

    /// List maintainers matching `filters`.
    pub fn maintainers(&self, filters: Option<&MaintainerFilters>) -> Result<Maintainers> {
        self.runtime.block_on(self.inner.maintainers(filters))
    }

    /// Look up a single maintainer, `None` when nothing matches.
    pub fn maintainer(&self, lookup: &MaintainerLookup) -> Result<Option<Maintainer>> {
        self.runtime.block_on(self.inner.maintainer(lookup))
    }

    /// List releases matching `filters`.
    pub fn releases(&self, filters: Option<&ReleaseFilters>) -> Result<Releases> {
        self.runtime.block_on(self.inner.releases(filters))
    }

    /// Look up a single release, `None` when nothing matches.
    pub fn release(&self, lookup: &ReleaseLookup) -> Result<Option<Release>> {
        self.runtime.block_on(self.inner.release(lookup))
    }

    /// List releases published after the release `last_known_id`.
    pub fn updates(&self, last_known_id: &str, filters: Option<&UpdateFilters>) -> Result<Updates> {
        self.runtime
            .block_on(self.inner.updates(last_known_id, filters))
    }

    /// Check that the service is alive. Never cached.
    pub fn ping(&self) -> Result<bool> {
        self.runtime.block_on(self.inner.ping())
    }
}

/// Configuration for the blocking [`OrangeFoxClient`].
///
/// Same knobs as the async builder, plus TLS-certificate verification
/// toggling on the default transport.
pub struct ClientBuilder {
    inner: super::ClientBuilder,
    verify_tls: bool,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            inner: super::ClientBuilder::new(),
            verify_tls: true,
        }
    }

    /// Point the client at a different host. Trailing slashes are
    /// trimmed; endpoint paths supply their own.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.inner = self.inner.host(host);
        self
    }

    /// Attach a response cache.
    pub fn cache(mut self, cache: Arc<dyn Cache>) -> Self {
        self.inner = self.inner.cache(cache);
        self
    }

    /// Override how long cached responses stay valid.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.inner = self.inner.cache_ttl(ttl);
        self
    }

    /// Skip TLS certificate verification. Only turn this off against
    /// hosts you control.
    pub fn verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    /// Build against the default HTTP transport.
    pub fn build(self) -> Result<OrangeFoxClient> {
        let transport = HttpTransport::with_options(TransportMode::Blocking, self.verify_tls)?;
        self.build_with_transport(transport)
    }

    /// Build against a caller-supplied transport.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Result<OrangeFoxClient<T>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(OrangeFoxClient {
            inner: self.inner.build_with_transport(transport),
            runtime,
        })
    }
}
