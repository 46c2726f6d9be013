//! HTTP transport behind the catalog client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::error::{Error, Result};

/// How this library introduces itself to the service's access logs.
const USER_AGENT: &str = "OrangeFoxAPI-rslib";

/// Whole-request budget for a single catalog call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Status and body of one response, whatever the status was.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

/// Which client variant a transport serves. Shows up as the suffix of the
/// `lib-version` request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Async,
    Blocking,
}

impl TransportMode {
    fn as_str(self) -> &'static str {
        match self {
            TransportMode::Async => "async",
            TransportMode::Blocking => "blocking",
        }
    }
}

/// Abstract fetch capability the client runs on.
///
/// Implementations issue a plain GET and report status and body without
/// interpreting either; error mapping happens in the client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and hand back whatever came over the wire.
    async fn get(&self, url: &str) -> Result<RawResponse>;

    /// Release any long-lived connection state. The default does nothing.
    async fn close(&self) {}
}

/// Default transport: a pooled reqwest client with rustls TLS.
///
/// Every request carries the `User-Agent`, `lib-version` and
/// `rust-version` headers the service expects from its client libraries.
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Build a transport with certificate verification on.
    pub fn new(mode: TransportMode) -> Result<Self> {
        Self::with_options(mode, true)
    }

    /// Build a transport, optionally skipping TLS certificate
    /// verification. Only turn `verify_tls` off against hosts you control.
    pub fn with_options(mode: TransportMode, verify_tls: bool) -> Result<Self> {
        let lib_version = format!("{}-{}", env!("CARGO_PKG_VERSION"), mode.as_str());

        let mut headers = HeaderMap::new();
        headers.insert(
            "lib-version",
            HeaderValue::from_str(&lib_version).map_err(|e| Error::Client(e.to_string()))?,
        );
        headers.insert(
            "rust-version",
            HeaderValue::from_static(env!("CARGO_PKG_RUST_VERSION")),
        );

        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(!verify_tls)
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_suffixes() {
        assert_eq!(TransportMode::Async.as_str(), "async");
        assert_eq!(TransportMode::Blocking.as_str(), "blocking");
    }

    #[test]
    fn test_transports_build_in_both_modes() {
        assert!(HttpTransport::new(TransportMode::Async).is_ok());
        assert!(HttpTransport::with_options(TransportMode::Blocking, false).is_ok());
    }
}
