//! Device records

use serde::{Deserialize, Serialize};

use super::ShortMaintainer;

/// Device summary as returned by the devices listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortDevice {
    /// Catalog id
    #[serde(rename = "_id")]
    pub id: String,

    /// Codename, e.g. `lavender`
    pub codename: String,

    /// OEM name, e.g. `Xiaomi`
    pub oem_name: String,

    /// Marketing name, e.g. `Redmi Note 7`
    pub model_name: String,

    /// OEM and marketing name combined
    pub full_name: String,

    /// Whether the device currently receives builds
    pub supported: bool,
}

/// Full device record from the device lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Catalog id
    #[serde(rename = "_id")]
    pub id: String,

    /// Codename, e.g. `lavender`
    pub codename: String,

    /// OEM name, e.g. `Xiaomi`
    pub oem_name: String,

    /// Marketing name, e.g. `Redmi Note 7`
    pub model_name: String,

    /// OEM and marketing name combined
    pub full_name: String,

    /// Whether the device currently receives builds
    pub supported: bool,

    /// Who looks after the device
    pub maintainer: ShortMaintainer,

    /// Whether the device uses A/B partitioning
    pub ab_device: bool,

    /// Free-form notes shown on the download page
    pub notes: Option<String>,
}

/// Devices listing: summary records plus the total match count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Devices {
    /// Matching devices, in catalog order
    pub data: Vec<ShortDevice>,

    /// Total number of matches, independent of `skip`/`limit`
    pub count: u64,
}

impl Devices {
    /// Iterate over the matched devices.
    pub fn iter(&self) -> std::slice::Iter<'_, ShortDevice> {
        self.data.iter()
    }

    /// Number of devices in this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl IntoIterator for Devices {
    type Item = ShortDevice;
    type IntoIter = std::vec::IntoIter<ShortDevice>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Devices {
    type Item = &'a ShortDevice;
    type IntoIter = std::slice::Iter<'a, ShortDevice>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
