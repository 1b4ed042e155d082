//! Public address resolution.
//!
//! Asks a "what is my IP" service for the caller's externally visible IPv4
//! address. A single call makes a single request; retries are applied by the
//! caller through [`crate::retry::Backoff`].

use std::net::{IpAddr, Ipv4Addr};

use thiserror::Error;

use crate::transport::{HttpClient, HttpError, HttpRequest};

/// Default service returning the caller's address as plain text.
pub const DEFAULT_PUBLIC_IP_URL: &str = "http://checkip.amazonaws.com/";

/// Error resolving the public address.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The request could not be completed.
    #[error("public IP request failed: {0}")]
    Http(#[from] HttpError),

    /// The service answered with a non-2xx status.
    #[error("public IP service returned {status}")]
    Status {
        /// Status code returned by the service
        status: http::StatusCode,
    },

    /// The body was not a textual IP address.
    #[error("public IP service returned an unparsable body: {0:?}")]
    InvalidBody(String),

    /// The service reported an IPv6 address; only A records are managed.
    #[error("public IP service returned a non-IPv4 address: {0}")]
    NotIpv4(IpAddr),
}

/// Source of the caller's current public IPv4 address.
pub trait AddressResolver: Send + Sync {
    /// Performs one resolution attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] on transport failure, non-2xx status or an
    /// unparsable body.
    fn resolve(&self) -> impl std::future::Future<Output = Result<Ipv4Addr, ResolveError>> + Send;
}

/// Resolver that issues a plain HTTP GET and parses the trimmed body.
#[derive(Debug, Clone)]
pub struct HttpAddressResolver<H> {
    client: H,
    url: url::Url,
}

impl<H> HttpAddressResolver<H> {
    /// Creates a resolver querying `url` through `client`.
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self { client, url }
    }
}

impl<H: HttpClient> AddressResolver for HttpAddressResolver<H> {
    async fn resolve(&self) -> Result<Ipv4Addr, ResolveError> {
        let response = self
            .client
            .request(HttpRequest::get(self.url.clone()))
            .await?;

        if !response.is_success() {
            return Err(ResolveError::Status {
                status: response.status,
            });
        }

        let text = response.body_text().ok_or_else(|| {
            ResolveError::InvalidBody(String::from_utf8_lossy(&response.body).into_owned())
        })?;

        parse_address(text)
    }
}

/// Parses a service answer such as `"203.0.113.7\n"`.
fn parse_address(text: &str) -> Result<Ipv4Addr, ResolveError> {
    let trimmed = text.trim();
    match trimmed.parse::<IpAddr>() {
        Ok(IpAddr::V4(address)) => Ok(address),
        Ok(other @ IpAddr::V6(_)) => Err(ResolveError::NotIpv4(other)),
        Err(_) => Err(ResolveError::InvalidBody(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResponse;
    use crate::transport::mock::MockClient;
    use std::sync::Arc;

    fn resolver(client: Arc<MockClient>) -> HttpAddressResolver<Arc<MockClient>> {
        HttpAddressResolver::new(client, url::Url::parse(DEFAULT_PUBLIC_IP_URL).unwrap())
    }

    #[tokio::test]
    async fn parses_trimmed_body() {
        let client = Arc::new(MockClient::ok("203.0.113.7\n"));

        let address = resolver(client.clone()).resolve().await.unwrap();

        assert_eq!(address, Ipv4Addr::new(203, 0, 113, 7));
        let requests = client.captured_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::GET);
        assert_eq!(requests[0].url.as_str(), DEFAULT_PUBLIC_IP_URL);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let client = Arc::new(MockClient::status(http::StatusCode::SERVICE_UNAVAILABLE));

        let result = resolver(client).resolve().await;

        assert!(matches!(
            result,
            Err(ResolveError::Status { status }) if status == http::StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[tokio::test]
    async fn garbage_body_is_an_error() {
        let client = Arc::new(MockClient::ok("<html>rate limited</html>"));

        let result = resolver(client).resolve().await;

        assert!(matches!(result, Err(ResolveError::InvalidBody(_))));
    }

    #[tokio::test]
    async fn non_utf8_body_is_invalid() {
        let client = Arc::new(MockClient::new(vec![Ok(HttpResponse::new(
            http::StatusCode::OK,
            vec![0xFF, b'1', b'.'],
        ))]));

        let result = resolver(client).resolve().await;

        assert!(matches!(result, Err(ResolveError::InvalidBody(_))));
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let client = Arc::new(MockClient::always_failing());

        let result = resolver(client).resolve().await;

        assert!(matches!(result, Err(ResolveError::Http(HttpError::Timeout))));
    }

    #[test]
    fn ipv6_answer_is_rejected() {
        let result = parse_address("2001:db8::1");

        assert!(matches!(result, Err(ResolveError::NotIpv4(_))));
    }

    #[test]
    fn empty_answer_is_invalid() {
        assert!(matches!(
            parse_address("  \n"),
            Err(ResolveError::InvalidBody(body)) if body.is_empty()
        ));
    }
}
