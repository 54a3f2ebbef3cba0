/// Authenticated HTTP client for the attendance API
///
/// This module handles:
/// - The transport seam (`Transport`) and its ureq implementation
/// - Per-request `X-App-Signature` headers
/// - The session bearer token, set once after login
/// - Mapping non-2xx answers to `ApiError::Http`
use crate::error::{ApiError, ApiResult};
use crate::signature::Signer;
use log::{debug, warn};
use serde_json::Value;
use std::cell::OnceCell;
use std::time::Duration;

pub const SIGNATURE_HEADER: &str = "X-App-Signature";
pub const AUTHORIZATION_HEADER: &str = "Authorization";

const USER_AGENT: &str = concat!("tnjr-attendance/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A fully prepared request, headers already resolved
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

/// Raw response: any status, body as text
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one request and returns whatever the server answered
///
/// Implementations return `Err` only for transport failures; non-2xx statuses
/// come back as a normal `HttpResponse`.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse>;
}

/// Blocking transport over a single pooled `ureq::Agent`
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).user_agent(USER_AGENT).build();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        let mut req = self.agent.request(request.method.as_str(), &request.url);
        for (name, value) in &request.headers {
            req = req.set(name, value);
        }
        for (name, value) in &request.query {
            req = req.query(name, value);
        }

        let result = match &request.body {
            Some(body) => req.send_string(body),
            None => req.call(),
        };

        match result {
            Ok(resp) => {
                let status = resp.status();
                let body = resp.into_string().map_err(|e| ApiError::Transport(e.to_string()))?;
                Ok(HttpResponse { status, body })
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Ok(HttpResponse { status, body })
            }
            Err(ureq::Error::Transport(t)) => Err(ApiError::Transport(t.to_string())),
        }
    }
}

/// Client bound to one base URL, one signer and one session
pub struct ApiClient<T: Transport = UreqTransport> {
    transport: T,
    base_url: String,
    signer: Signer,
    token: OnceCell<String>,
}

impl ApiClient<UreqTransport> {
    /// Build a client backed by a real HTTP agent
    pub fn connect(base_url: &str, secret: &str, timeout: Duration) -> Self {
        ApiClient::new(UreqTransport::new(timeout), base_url, Signer::new(secret))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: &str, signer: Signer) -> Self {
        Self { transport, base_url: base_url.trim_end_matches('/').to_string(), signer, token: OnceCell::new() }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Bearer token of this session, if logged in
    pub fn token(&self) -> Option<&str> {
        self.token.get().map(|t| t.as_str())
    }

    /// Store the session token. A session is authenticated at most once.
    pub fn set_token(&self, token: String) -> ApiResult<()> {
        self.token.set(token).map_err(|_| ApiError::Auth("session is already authenticated".to_string()))
    }

    pub fn get(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Value> {
        self.request(Method::Get, path, None, query, &[])
    }

    pub fn post(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.request(Method::Post, path, Some(body), &[], &[])
    }

    /// Send one signed request and parse the JSON answer
    ///
    /// `headers` may override `Accept`/`Content-Type` but never the signature
    /// or bearer header.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &[(&str, String)],
        headers: &[(&str, &str)],
    ) -> ApiResult<Value> {
        let body = match body {
            Some(value) => Some(serde_json::to_string(value).map_err(|e| ApiError::Decode(e.to_string()))?),
            None => None,
        };

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers: self.build_headers(body.is_some(), headers),
            query: query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            body,
        };

        debug!("{} {}", method.as_str(), request.url);
        let response = self.transport.send(&request)?;
        debug!("{} {} -> {}", method.as_str(), path, response.status);

        if !(200..300).contains(&response.status) {
            return Err(ApiError::Http { status: response.status, body: response.body });
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn build_headers(&self, has_body: bool, overrides: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if has_body {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        for (name, value) in overrides {
            if name.eq_ignore_ascii_case(SIGNATURE_HEADER) || name.eq_ignore_ascii_case(AUTHORIZATION_HEADER) {
                warn!("ignoring caller-supplied {} header", name);
                continue;
            }
            set_header(&mut headers, name, value);
        }

        set_header(&mut headers, SIGNATURE_HEADER, &self.signer.sign_now().to_string());
        if let Some(token) = self.token() {
            set_header(&mut headers, AUTHORIZATION_HEADER, &format!("Bearer {}", token));
        }
        headers
    }
}

/// Insert or replace a header, matching names case-insensitively
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value.to_string()));
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
