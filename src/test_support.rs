/// In-memory transport for unit tests
///
/// Routes each request through a handler closure and records every request
/// it sees, so tests can assert on headers, paths and page numbers.
use crate::client::{HttpRequest, HttpResponse, Transport};
use crate::error::ApiResult;
use serde_json::Value;
use std::cell::RefCell;

type Handler = Box<dyn Fn(&HttpRequest) -> ApiResult<HttpResponse>>;

pub struct StubTransport {
    handler: Handler,
    seen: RefCell<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> ApiResult<HttpResponse> + 'static,
    {
        Self { handler: Box::new(handler), seen: RefCell::new(Vec::new()) }
    }

    /// Stub that answers every request with the same JSON body
    pub fn always(status: u16, body: Value) -> Self {
        let text = body.to_string();
        Self::new(move |_| Ok(HttpResponse { status, body: text.clone() }))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl Transport for StubTransport {
    fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        self.seen.borrow_mut().push(request.clone());
        (self.handler)(request)
    }
}

pub fn json_response(status: u16, body: Value) -> ApiResult<HttpResponse> {
    Ok(HttpResponse { status, body: body.to_string() })
}

/// Path of the request relative to the stub base URL
pub fn path_of(request: &HttpRequest) -> &str {
    request.url.strip_prefix(STUB_BASE_URL).unwrap_or(&request.url)
}

pub const STUB_BASE_URL: &str = "http://stub.local/api";
