//! Blocking walkthrough: the same queries as `async_catalog`, without a
//! runtime of your own.
//!
//! Run with `cargo run --example blocking_catalog`.

use anyhow::Result;
use orangefox_api::blocking::OrangeFoxClient;
use orangefox_api::filters::{DeviceFilters, ReleaseFilters, ReleaseLookup};

fn main() -> Result<()> {
    env_logger::init();

    let client = OrangeFoxClient::new()?;

    let devices = client.devices(Some(&DeviceFilters::new().oem_name("Xiaomi")))?;
    for device in &devices {
        println!("{}  {}", device.id, device.full_name);
    }

    let releases = client.releases(Some(&ReleaseFilters::new().limit(1)))?;
    if let Some(latest) = releases.iter().next() {
        let release = client.release(&ReleaseLookup::new().id(latest.id.clone()))?;
        if let Some(release) = release {
            println!("{} ({} bytes, md5 {})", release.version, release.size, release.md5);
        }
    }

    Ok(())
}
