//! Client library for the OrangeFox Recovery release catalog.
//!
//! Covers the read-only catalog endpoints (devices, OEMs, maintainers,
//! releases, incremental updates) in two flavors: the async
//! [`OrangeFoxClient`] and a [`blocking`] counterpart that drives the
//! same engine to completion on the caller's thread.
//!
//! Responses can optionally be cached behind any [`cache::Cache`]
//! implementation the caller supplies; the client stores raw response
//! bodies keyed by request path and applies a TTL after every fresh
//! write. Negative results (404) are cached too.
//!
//! # Example
//! ```no_run
//! use orangefox_api::OrangeFoxClient;
//! use orangefox_api::filters::ReleaseFilters;
//! use orangefox_api::types::{ReleaseSort, ReleaseType};
//!
//! # async fn run() -> orangefox_api::Result<()> {
//! let client = OrangeFoxClient::new()?;
//!
//! let releases = client
//!     .releases(Some(
//!         &ReleaseFilters::new()
//!             .release_type(ReleaseType::Stable)
//!             .sort(ReleaseSort::DateDesc)
//!             .limit(1),
//!     ))
//!     .await?;
//!
//! if let Some(latest) = releases.iter().next() {
//!     println!("latest stable: {} ({} bytes)", latest.version, latest.size);
//! }
//!
//! client.close().await;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod error;
pub mod filters;
pub mod models;
mod query;
pub mod transport;
pub mod types;

pub use client::blocking;
pub use client::{ClientBuilder, DEFAULT_CACHE_TTL, DEFAULT_HOST, OrangeFoxClient};
pub use error::{Error, Result};
pub use query::OneOrMany;
