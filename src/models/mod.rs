//! Response records returned by the catalog service
//!
//! Listing endpoints answer with a `(data, count)` pair of summary
//! records; the `get` endpoints answer with a detail record extending the
//! summary. The catalog stores ids under `_id`, which every record maps
//! back to a plain `id` field.

mod device;
mod maintainer;
mod oem;
mod release;

pub use device::{Device, Devices, ShortDevice};
pub use maintainer::{GitLab, Maintainer, Maintainers, ShortMaintainer, Telegram};
pub use oem::Oems;
pub use release::{RecoveryImg, Release, Releases, ShortRelease, Updates};
