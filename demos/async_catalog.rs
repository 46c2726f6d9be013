//! Async walkthrough: list Xiaomi devices, then inspect the latest
//! stable release.
//!
//! Run with `cargo run --example async_catalog`.

use anyhow::Result;
use orangefox_api::OrangeFoxClient;
use orangefox_api::filters::{DeviceFilters, ReleaseFilters, ReleaseLookup};
use orangefox_api::types::{ReleaseSort, ReleaseType};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let client = OrangeFoxClient::new()?;

    let devices = client
        .devices(Some(&DeviceFilters::new().oem_name("Xiaomi")))
        .await?;
    println!("{} Xiaomi devices in the catalog:", devices.count);
    for device in &devices {
        println!("  {}  {}", device.id, device.full_name);
    }

    let releases = client
        .releases(Some(
            &ReleaseFilters::new()
                .release_type(ReleaseType::Stable)
                .sort(ReleaseSort::DateDesc)
                .limit(1),
        ))
        .await?;

    if let Some(latest) = releases.iter().next() {
        let release = client
            .release(&ReleaseLookup::new().id(latest.id.clone()))
            .await?;
        if let Some(release) = release {
            println!("latest stable: {} released {}", release.version, release.date);
            for (name, url) in &release.mirrors {
                println!("  mirror {name}: {url}");
            }
        }
    }

    client.close().await;
    Ok(())
}
