//! The client seam and its reqwest implementation.

use super::{HttpError, HttpRequest, HttpResponse};

/// Sends one request and buffers the answer.
///
/// The resolver and the notifier are generic over this so tests can script
/// answers without a network.
pub trait HttpClient: Send + Sync {
    /// Performs a single exchange. Retries belong to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response was received. A non-2xx status
    /// is a response, not an error.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}

impl<C: HttpClient> HttpClient for std::sync::Arc<C> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

/// [`HttpClient`] backed by `reqwest`.
///
/// Attempt deadlines come from the retry policy; the wrapped client only
/// carries its own timeout when built with [`ReqwestClient::from_client`].
///
/// # Example
///
/// ```no_run
/// use route53_ddns::transport::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("http://checkip.amazonaws.com/")?;
/// let response = client.request(HttpRequest::get(url)).await?;
/// println!("{:?}", response.body_text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a preconfigured reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method.clone(), req.url.as_str());

        if let Some(content_type) = req.content_type() {
            builder = builder.header(http::header::CONTENT_TYPE, content_type);
        }
        if let Some(text) = req.text {
            builder = builder.body(text);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
