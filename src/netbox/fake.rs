//! Scripted transport for unit tests.

use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::errors::BoxError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

/// Replays queued responses in order and records every request it receives.
///
/// Running out of responses is reported as a transport error so a test that
/// issues an unexpected extra request fails loudly.
#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, String>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.respond_raw(status, &body.to_string())
    }

    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        self.requests.borrow_mut().push(request.clone());
        match self.responses.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(Box::new(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                message,
            ))),
            None => Err(Box::new(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no scripted response for {} {}", request.method, request.url),
            ))),
        }
    }
}
