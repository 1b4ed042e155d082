//! Requests and responses exchanged with the public-IP service and the
//! health-check collector.

/// Content type of every request body sent by this crate.
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// A GET, or a POST carrying a plain-text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: http::Method,
    pub url: url::Url,
    /// Plain-text body; only set on POST
    pub text: Option<String>,
}

impl HttpRequest {
    #[must_use]
    pub const fn get(url: url::Url) -> Self {
        Self {
            method: http::Method::GET,
            url,
            text: None,
        }
    }

    /// Creates a POST sending `text` as `text/plain`.
    #[must_use]
    pub fn post_text(url: url::Url, text: impl Into<String>) -> Self {
        Self {
            method: http::Method::POST,
            url,
            text: Some(text.into()),
        }
    }

    /// Content type to announce, if the request has a body.
    #[must_use]
    pub fn content_type(&self) -> Option<&'static str> {
        self.text.as_ref().map(|_| TEXT_PLAIN)
    }
}

/// Status and fully buffered body of an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: http::StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: http::StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as UTF-8, or `None` if it is not valid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}
