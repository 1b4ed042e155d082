//! HTTP transport shared by the address resolver and the health-check notifier.
//!
//! Two shapes of exchange are needed: a GET whose text body is read back,
//! and a GET or `text/plain` POST whose status is all that matters.

mod client;
mod error;
mod message;

#[cfg(test)]
pub(crate) mod mock;


pub use client::{HttpClient, ReqwestClient};
pub use error::HttpError;
pub use message::{HttpRequest, HttpResponse, TEXT_PLAIN};
