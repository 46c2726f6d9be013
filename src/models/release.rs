//! Release records

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Release summary as returned by the releases and updates listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortRelease {
    /// Catalog id
    #[serde(rename = "_id")]
    pub id: String,

    /// Catalog id of the device this build belongs to
    pub device_id: String,

    /// Publication time (unix seconds on the wire)
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    /// Total artifact size in bytes
    pub size: u64,

    /// MD5 checksum of the artifact
    pub md5: String,

    /// Recovery version, e.g. `R11.1`
    pub version: String,

    /// Release channel, `stable` or `beta`
    #[serde(rename = "type")]
    pub release_type: String,
}

/// Standalone recovery image shipped alongside the installer zip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryImg {
    /// Image size in bytes
    pub size: u64,

    /// MD5 checksum of the image
    pub md5: String,
}

/// Full release record from the release lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Catalog id
    #[serde(rename = "_id")]
    pub id: String,

    /// Catalog id of the device this build belongs to
    pub device_id: String,

    /// Publication time (unix seconds on the wire)
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    /// Total artifact size in bytes
    pub size: u64,

    /// MD5 checksum of the artifact
    pub md5: String,

    /// Recovery version, e.g. `R11.1`
    pub version: String,

    /// Release channel, `stable` or `beta`
    #[serde(rename = "type")]
    pub release_type: String,

    /// Flashable recovery image shipped with the zip
    pub recovery_img: RecoveryImg,

    /// Changelog entries, newest first
    pub changelog: Vec<String>,

    /// Known bugs, if the maintainer listed any
    pub bugs: Option<Vec<String>>,

    /// Free-form release notes
    pub notes: Option<String>,

    /// Download mirrors by name
    pub mirrors: BTreeMap<String, Url>,
}

/// Releases listing: summary records plus the total match count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Releases {
    /// Matching releases, in catalog order
    pub data: Vec<ShortRelease>,

    /// Total number of matches, independent of `skip`/`limit`
    pub count: u64,
}

impl Releases {
    /// Iterate over the matched releases.
    pub fn iter(&self) -> std::slice::Iter<'_, ShortRelease> {
        self.data.iter()
    }

    /// Number of releases in this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl IntoIterator for Releases {
    type Item = ShortRelease;
    type IntoIter = std::vec::IntoIter<ShortRelease>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Releases {
    type Item = &'a ShortRelease;
    type IntoIter = std::slice::Iter<'a, ShortRelease>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Incremental updates listing, shaped like [`Releases`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Updates {
    /// Releases newer than the anchor, in catalog order
    pub data: Vec<ShortRelease>,

    /// Total number of newer releases
    pub count: u64,
}

impl Updates {
    /// Iterate over the newer releases.
    pub fn iter(&self) -> std::slice::Iter<'_, ShortRelease> {
        self.data.iter()
    }

    /// Number of releases in this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl IntoIterator for Updates {
    type Item = ShortRelease;
    type IntoIter = std::vec::IntoIter<ShortRelease>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Updates {
    type Item = &'a ShortRelease;
    type IntoIter = std::slice::Iter<'a, ShortRelease>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const RELEASE_PAYLOAD: &str = r#"{
        "_id": "60012b4e7d2c3a0001a1b2c3",
        "device_id": "5f6e0e3a9f2b4b7c9d8e1a2b",
        "date": 1619827200,
        "size": 41943040,
        "md5": "9e107d9d372bb6826bd81d3542a419d6",
        "version": "R11.1",
        "type": "stable",
        "recovery_img": {
            "size": 34603008,
            "md5": "e4d909c290d0fb1ca068ffaddf22cbd0"
        },
        "changelog": ["Updated kernel", "Fixed fastbootd"],
        "bugs": null,
        "notes": "Clean flash recommended",
        "mirrors": {
            "DL": "https://dl.orangefox.download/5f6e0e3a/R11.1",
            "SF": "https://sourceforge.net/projects/orangefox/files/R11.1"
        }
    }"#;

    #[test]
    fn test_release_decodes_date_and_mirrors() {
        let release: Release = serde_json::from_str(RELEASE_PAYLOAD).unwrap();

        assert_eq!(release.version, "R11.1");
        assert_eq!(release.release_type, "stable");
        assert_eq!(release.date, Utc.timestamp_opt(1619827200, 0).unwrap());
        assert_eq!(release.changelog.len(), 2);
        assert!(release.bugs.is_none());
        assert_eq!(
            release.mirrors["DL"].as_str(),
            "https://dl.orangefox.download/5f6e0e3a/R11.1"
        );
    }

    #[test]
    fn test_release_serializes_date_back_to_seconds() {
        let release: Release = serde_json::from_str(RELEASE_PAYLOAD).unwrap();
        let value = serde_json::to_value(&release).unwrap();

        assert_eq!(value["date"], serde_json::json!(1619827200));
        assert_eq!(value["_id"], serde_json::json!("60012b4e7d2c3a0001a1b2c3"));
    }

    #[test]
    fn test_updates_listing_decodes() {
        let payload = r#"{
            "data": [{
                "_id": "r2",
                "device_id": "d1",
                "date": 1620000000,
                "size": 1024,
                "md5": "abc",
                "version": "R11.1_1",
                "type": "beta"
            }],
            "count": 1
        }"#;

        let updates: Updates = serde_json::from_str(payload).unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates.iter().next().unwrap().version, "R11.1_1");
    }
}
