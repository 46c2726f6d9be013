//! Maintainer records

use serde::{Deserialize, Serialize};
use url::Url;

/// Maintainer summary as returned by the maintainers listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortMaintainer {
    /// Catalog id
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    pub name: String,

    /// Account username
    pub username: String,
}

/// Telegram account linked to a maintainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Telegram {
    /// Numeric Telegram user id
    pub id: i64,

    /// Telegram username, if public
    pub username: Option<String>,

    /// Profile link, if public
    pub url: Option<Url>,
}

/// GitLab account linked to a maintainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitLab {
    /// Numeric GitLab user id
    pub id: i64,
}

/// Full maintainer record from the maintainer lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maintainer {
    /// Catalog id
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    pub name: String,

    /// Account username
    pub username: String,

    /// Linked Telegram account, if any
    pub telegram: Option<Telegram>,

    /// Linked GitLab account, if any
    pub gitlab: Option<GitLab>,
}

/// Maintainers listing: summary records plus the total match count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Maintainers {
    /// Matching maintainers, in catalog order
    pub data: Vec<ShortMaintainer>,

    /// Total number of matches, independent of `skip`/`limit`
    pub count: u64,
}

impl Maintainers {
    /// Iterate over the matched maintainers.
    pub fn iter(&self) -> std::slice::Iter<'_, ShortMaintainer> {
        self.data.iter()
    }

    /// Number of maintainers in this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl IntoIterator for Maintainers {
    type Item = ShortMaintainer;
    type IntoIter = std::vec::IntoIter<ShortMaintainer>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Maintainers {
    type Item = &'a ShortMaintainer;
    type IntoIter = std::slice::Iter<'a, ShortMaintainer>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintainer_with_linked_accounts() {
        let payload = r#"{
            "_id": "4a1b2c3d4e5f60718293a4b5",
            "name": "Alex",
            "username": "alexdev",
            "telegram": {
                "id": 123456789,
                "username": "alexdev",
                "url": "https://t.me/alexdev"
            },
            "gitlab": {"id": 4242}
        }"#;

        let maintainer: Maintainer = serde_json::from_str(payload).unwrap();
        let telegram = maintainer.telegram.unwrap();
        assert_eq!(telegram.id, 123456789);
        assert_eq!(telegram.url.unwrap().as_str(), "https://t.me/alexdev");
        assert_eq!(maintainer.gitlab.unwrap().id, 4242);
    }

    #[test]
    fn test_maintainer_without_linked_accounts() {
        let payload = r#"{"_id": "m1", "name": "Alex", "username": "alexdev"}"#;

        let maintainer: Maintainer = serde_json::from_str(payload).unwrap();
        assert!(maintainer.telegram.is_none());
        assert!(maintainer.gitlab.is_none());
    }

    #[test]
    fn test_invalid_profile_url_is_rejected() {
        let payload = r#"{
            "_id": "m1",
            "name": "Alex",
            "username": "alexdev",
            "telegram": {"id": 1, "username": null, "url": "not a url"}
        }"#;

        assert!(serde_json::from_str::<Maintainer>(payload).is_err());
    }
}
