//! HTTP transport seam for the NetBox client.
//!
//! The client builds plain [`HttpRequest`] values and hands them to a
//! [`Transport`]. The production transport is a blocking `reqwest` client;
//! tests substitute canned responses without a live service.

use crate::errors::BoxError;
use reqwest::blocking::Client;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// HTTP methods used against the NetBox API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A fully-built outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Request method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Header name/value pairs, sent in order
    pub headers: Vec<(&'static str, String)>,
    /// JSON body, if any
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a request without headers or body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header.
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Sets the body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A complete response. The body has been read in full and the underlying
/// connection released by the time this value exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

/// Executes requests. One call is one round trip; implementations must not
/// retry.
pub trait Transport {
    /// Sends `request` and returns the complete response.
    ///
    /// # Errors
    ///
    /// Returns an error only when no HTTP response was obtained (connection
    /// failure, timeout, unreadable body). Non-success statuses are returned
    /// as ordinary responses.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError>;
}

/// Blocking `reqwest` transport with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport whose every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, BoxError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Patch => self.client.patch(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        // `text` consumes the response, so the connection goes back to the
        // pool (or is closed) before we return on either path.
        let body = response.text()?;

        debug!("{} {} -> {}", request.method, request.url, status);
        Ok(HttpResponse { status, body })
    }
}
