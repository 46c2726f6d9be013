//! Per-operation filter builders
//!
//! One builder per catalog operation, each emitting its entries in the
//! order the service's reference clients send them. All fields are
//! optional; unset fields never reach the wire.
//!
//! # Example
//! ```
//! use orangefox_api::filters::DeviceFilters;
//! use orangefox_api::types::DeviceSort;
//!
//! let filters = DeviceFilters::new()
//!     .oem_name("Xiaomi")
//!     .supported(true)
//!     .sort(DeviceSort::DateDesc)
//!     .limit(10);
//! ```

use crate::query::{FilterSet, OneOrMany, push_filter};
use crate::types::{DeviceSort, MaintainerSort, ReleaseSort, ReleaseType};

/// Filters for the devices listing.
#[derive(Debug, Clone, Default)]
pub struct DeviceFilters {
    /// Catalog ids to match (`_id` on the wire)
    pub id: Option<OneOrMany<String>>,
    /// OEM names, e.g. `Xiaomi`
    pub oem_name: Option<OneOrMany<String>>,
    /// Device codenames, e.g. `lavender`
    pub codename: Option<OneOrMany<String>>,
    /// Marketing names, e.g. `Redmi Note 7`
    pub model_name: Option<OneOrMany<String>>,
    /// Whether the device is currently supported
    pub supported: Option<bool>,
    /// Ids of the maintainers looking after the device
    pub maintainer_id: Option<OneOrMany<String>>,
    /// Only devices that have a release of this channel
    pub release_type: Option<ReleaseType>,
    /// Result ordering
    pub sort: Option<DeviceSort>,
    /// Number of leading results to skip
    pub skip: Option<u64>,
    /// Maximum number of results
    pub limit: Option<u64>,
}

impl DeviceFilters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match specific catalog ids.
    pub fn id(mut self, id: impl Into<OneOrMany<String>>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Restrict to one OEM or several.
    pub fn oem_name(mut self, oem_name: impl Into<OneOrMany<String>>) -> Self {
        self.oem_name = Some(oem_name.into());
        self
    }

    /// Restrict to the given codenames.
    pub fn codename(mut self, codename: impl Into<OneOrMany<String>>) -> Self {
        self.codename = Some(codename.into());
        self
    }

    /// Restrict to the given marketing names.
    pub fn model_name(mut self, model_name: impl Into<OneOrMany<String>>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    /// Keep only supported (or only retired) devices.
    pub fn supported(mut self, supported: bool) -> Self {
        self.supported = Some(supported);
        self
    }

    /// Restrict to devices cared for by these maintainers.
    pub fn maintainer_id(mut self, maintainer_id: impl Into<OneOrMany<String>>) -> Self {
        self.maintainer_id = Some(maintainer_id.into());
        self
    }

    /// Keep only devices with a release of the given channel.
    pub fn release_type(mut self, release_type: ReleaseType) -> Self {
        self.release_type = Some(release_type);
        self
    }

    /// Order the results.
    pub fn sort(mut self, sort: DeviceSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Skip the first `skip` results.
    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Cap the number of results.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn entries(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        push_filter(&mut filters, "id", &self.id);
        push_filter(&mut filters, "oem_name", &self.oem_name);
        push_filter(&mut filters, "codename", &self.codename);
        push_filter(&mut filters, "model_name", &self.model_name);
        push_filter(&mut filters, "supported", &self.supported);
        push_filter(&mut filters, "maintainer_id", &self.maintainer_id);
        push_filter(&mut filters, "release_type", &self.release_type);
        push_filter(&mut filters, "sort", &self.sort);
        push_filter(&mut filters, "skip", &self.skip);
        push_filter(&mut filters, "limit", &self.limit);
        filters
    }
}

/// Criteria for looking up a single device.
#[derive(Debug, Clone, Default)]
pub struct DeviceLookup {
    /// Catalog id of the device (`_id` on the wire)
    pub id: Option<String>,
    /// Device codename
    pub codename: Option<String>,
}

impl DeviceLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up by catalog id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Look up by codename.
    pub fn codename(mut self, codename: impl Into<String>) -> Self {
        self.codename = Some(codename.into());
        self
    }

    pub(crate) fn entries(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        push_filter(&mut filters, "id", &self.id);
        push_filter(&mut filters, "codename", &self.codename);
        filters
    }
}

/// Filters for the maintainers listing.
///
/// `sort` is emitted second, right after `id`; that is the order this
/// endpoint expects.
#[derive(Debug, Clone, Default)]
pub struct MaintainerFilters {
    /// Catalog ids to match (`_id` on the wire)
    pub id: Option<OneOrMany<String>>,
    /// Result ordering
    pub sort: Option<MaintainerSort>,
    /// Display names
    pub name: Option<OneOrMany<String>>,
    /// Account usernames
    pub username: Option<OneOrMany<String>>,
    /// Number of leading results to skip
    pub skip: Option<u64>,
    /// Maximum number of results
    pub limit: Option<u64>,
}

impl MaintainerFilters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match specific catalog ids.
    pub fn id(mut self, id: impl Into<OneOrMany<String>>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Order the results.
    pub fn sort(mut self, sort: MaintainerSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Restrict to the given display names.
    pub fn name(mut self, name: impl Into<OneOrMany<String>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restrict to the given usernames.
    pub fn username(mut self, username: impl Into<OneOrMany<String>>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Skip the first `skip` results.
    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Cap the number of results.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn entries(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        push_filter(&mut filters, "id", &self.id);
        push_filter(&mut filters, "sort", &self.sort);
        push_filter(&mut filters, "name", &self.name);
        push_filter(&mut filters, "username", &self.username);
        push_filter(&mut filters, "skip", &self.skip);
        push_filter(&mut filters, "limit", &self.limit);
        filters
    }
}

/// Criteria for looking up a single maintainer.
#[derive(Debug, Clone, Default)]
pub struct MaintainerLookup {
    /// Catalog id of the maintainer (`_id` on the wire)
    pub id: Option<String>,
    /// Account username
    pub username: Option<String>,
}

impl MaintainerLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up by catalog id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Look up by username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub(crate) fn entries(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        push_filter(&mut filters, "id", &self.id);
        push_filter(&mut filters, "username", &self.username);
        filters
    }
}

/// Filters for the releases listing.
#[derive(Debug, Clone, Default)]
pub struct ReleaseFilters {
    /// Catalog ids to match (`_id` on the wire)
    pub id: Option<OneOrMany<String>>,
    /// Devices the releases belong to
    pub device_id: Option<OneOrMany<String>>,
    /// Device codenames
    pub codename: Option<OneOrMany<String>>,
    /// Recovery versions, e.g. `R11.1`
    pub version: Option<OneOrMany<String>>,
    /// Release channel (`type` on the wire)
    pub release_type: Option<ReleaseType>,
    /// Artifact filenames
    pub filename: Option<OneOrMany<String>>,
    /// Result ordering
    pub sort: Option<ReleaseSort>,
    /// Number of leading results to skip
    pub skip: Option<u64>,
    /// Maximum number of results
    pub limit: Option<u64>,
}

impl ReleaseFilters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match specific catalog ids.
    pub fn id(mut self, id: impl Into<OneOrMany<String>>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Restrict to releases of these devices.
    pub fn device_id(mut self, device_id: impl Into<OneOrMany<String>>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// Restrict to releases of these codenames.
    pub fn codename(mut self, codename: impl Into<OneOrMany<String>>) -> Self {
        self.codename = Some(codename.into());
        self
    }

    /// Restrict to the given versions.
    pub fn version(mut self, version: impl Into<OneOrMany<String>>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Keep only releases of the given channel.
    pub fn release_type(mut self, release_type: ReleaseType) -> Self {
        self.release_type = Some(release_type);
        self
    }

    /// Restrict to the given artifact filenames.
    pub fn filename(mut self, filename: impl Into<OneOrMany<String>>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Order the results.
    pub fn sort(mut self, sort: ReleaseSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Skip the first `skip` results.
    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Cap the number of results.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn entries(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        push_filter(&mut filters, "id", &self.id);
        push_filter(&mut filters, "device_id", &self.device_id);
        push_filter(&mut filters, "codename", &self.codename);
        push_filter(&mut filters, "version", &self.version);
        push_filter(&mut filters, "type", &self.release_type);
        push_filter(&mut filters, "filename", &self.filename);
        push_filter(&mut filters, "sort", &self.sort);
        push_filter(&mut filters, "skip", &self.skip);
        push_filter(&mut filters, "limit", &self.limit);
        filters
    }
}

/// Criteria for looking up a single release.
#[derive(Debug, Clone, Default)]
pub struct ReleaseLookup {
    /// Catalog ids of the release (`_id` on the wire)
    pub id: Option<OneOrMany<String>>,
    /// Artifact filename
    pub filename: Option<OneOrMany<String>>,
}

impl ReleaseLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up by catalog id.
    pub fn id(mut self, id: impl Into<OneOrMany<String>>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Look up by artifact filename.
    pub fn filename(mut self, filename: impl Into<OneOrMany<String>>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub(crate) fn entries(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        push_filter(&mut filters, "id", &self.id);
        push_filter(&mut filters, "filename", &self.filename);
        filters
    }
}

/// Filters for the incremental updates listing.
///
/// The anchor release id is part of the path, not of the filter set; see
/// [`OrangeFoxClient::updates`](crate::OrangeFoxClient::updates).
#[derive(Debug, Clone, Default)]
pub struct UpdateFilters {
    /// Devices to report updates for
    pub device_id: Option<OneOrMany<String>>,
    /// Release channels to consider
    pub release_type: Option<OneOrMany<ReleaseType>>,
    /// Number of leading results to skip
    pub skip: Option<u64>,
    /// Maximum number of results
    pub limit: Option<u64>,
}

impl UpdateFilters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to updates of these devices.
    pub fn device_id(mut self, device_id: impl Into<OneOrMany<String>>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// Keep only updates of the given channels.
    pub fn release_type(mut self, release_type: impl Into<OneOrMany<ReleaseType>>) -> Self {
        self.release_type = Some(release_type.into());
        self
    }

    /// Skip the first `skip` results.
    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Cap the number of results.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn entries(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        push_filter(&mut filters, "device_id", &self.device_id);
        push_filter(&mut filters, "release_type", &self.release_type);
        push_filter(&mut filters, "skip", &self.skip);
        push_filter(&mut filters, "limit", &self.limit);
        filters
    }
}
