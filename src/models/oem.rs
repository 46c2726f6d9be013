//! OEM records

use serde::{Deserialize, Serialize};

/// OEM listing: plain vendor names plus the total count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Oems {
    /// Vendor names, in catalog order
    pub data: Vec<String>,

    /// Total number of vendors
    pub count: u64,
}

impl Oems {
    /// Iterate over the vendor names.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.data.iter()
    }

    /// Number of vendors in this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl IntoIterator for Oems {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Oems {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oems_listing_decodes() {
        let payload = r#"{"data": ["Xiaomi", "OnePlus", "Realme"], "count": 3}"#;

        let oems: Oems = serde_json::from_str(payload).unwrap();
        assert_eq!(oems.count, 3);
        assert_eq!(
            oems.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["Xiaomi", "OnePlus", "Realme"]
        );
    }
}
