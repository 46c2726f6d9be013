//! Enumerations accepted by the catalog filters
//!
//! Each enum maps one-to-one onto the keyword strings the service expects;
//! [`as_str`](ReleaseType::as_str) is the wire value.

use std::fmt;

/// Release channel of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Stable,
    Beta,
}

impl ReleaseType {
    /// Wire value sent to the service.
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseType::Stable => "stable",
            ReleaseType::Beta => "beta",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order for the devices listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceSort {
    DeviceNameAsc,
    DeviceNameDesc,
    CodenameAsc,
    CodenameDesc,
    DateAsc,
    DateDesc,
}

impl DeviceSort {
    /// Wire value sent to the service.
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceSort::DeviceNameAsc => "device_name_asc",
            DeviceSort::DeviceNameDesc => "device_name_desc",
            DeviceSort::CodenameAsc => "codename_asc",
            DeviceSort::CodenameDesc => "codename_desc",
            DeviceSort::DateAsc => "date_asc",
            DeviceSort::DateDesc => "date_desc",
        }
    }
}

impl fmt::Display for DeviceSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order for the maintainers listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaintainerSort {
    NameAsc,
    NameDesc,
    NicknameAsc,
    NicknameDesc,
    DateAsc,
    DateDesc,
}

impl MaintainerSort {
    /// Wire value sent to the service.
    pub fn as_str(self) -> &'static str {
        match self {
            MaintainerSort::NameAsc => "name_asc",
            MaintainerSort::NameDesc => "name_desc",
            MaintainerSort::NicknameAsc => "nickname_asc",
            MaintainerSort::NicknameDesc => "nickname_desc",
            MaintainerSort::DateAsc => "date_asc",
            MaintainerSort::DateDesc => "date_desc",
        }
    }
}

impl fmt::Display for MaintainerSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order for the releases listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseSort {
    SizeAsc,
    SizeDesc,
    FilenameAsc,
    FilenameDesc,
    DateAsc,
    DateDesc,
}

impl ReleaseSort {
    /// Wire value sent to the service.
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseSort::SizeAsc => "size_asc",
            ReleaseSort::SizeDesc => "size_desc",
            ReleaseSort::FilenameAsc => "filename_asc",
            ReleaseSort::FilenameDesc => "filename_desc",
            ReleaseSort::DateAsc => "date_asc",
            ReleaseSort::DateDesc => "date_desc",
        }
    }
}

impl fmt::Display for ReleaseSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_type_wire_values() {
        assert_eq!(ReleaseType::Stable.as_str(), "stable");
        assert_eq!(ReleaseType::Beta.as_str(), "beta");
    }

    #[test]
    fn test_device_sort_wire_values() {
        assert_eq!(DeviceSort::DeviceNameAsc.as_str(), "device_name_asc");
        assert_eq!(DeviceSort::CodenameDesc.as_str(), "codename_desc");
        assert_eq!(DeviceSort::DateAsc.as_str(), "date_asc");
    }

    #[test]
    fn test_maintainer_sort_wire_values() {
        assert_eq!(MaintainerSort::NicknameAsc.as_str(), "nickname_asc");
        assert_eq!(MaintainerSort::NameDesc.as_str(), "name_desc");
    }

    #[test]
    fn test_release_sort_wire_values() {
        assert_eq!(ReleaseSort::SizeDesc.as_str(), "size_desc");
        assert_eq!(ReleaseSort::FilenameAsc.as_str(), "filename_asc");
    }

    #[test]
    fn test_display_matches_wire_value() {
        assert_eq!(ReleaseType::Beta.to_string(), "beta");
        assert_eq!(DeviceSort::DateDesc.to_string(), "date_desc");
    }
}
