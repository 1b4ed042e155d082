//! Scripted HTTP client shared by unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that replays a configured sequence of responses.
///
/// Once the script is exhausted every further call times out.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::new(http::StatusCode::OK, body))])
    }

    pub fn status(status: http::StatusCode) -> Self {
        Self::new(vec![Ok(HttpResponse::new(status, ""))])
    }

    pub fn failing_then_ok(failures: usize, body: &str) -> Self {
        let mut responses: Vec<_> = (0..failures).map(|_| Err(HttpError::Timeout)).collect();
        responses.push(Ok(HttpResponse::new(http::StatusCode::OK, body)));
        Self::new(responses)
    }

    pub fn always_failing() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(HttpError::Timeout)
        } else {
            responses.remove(0)
        }
    }
}
