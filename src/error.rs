/// Error taxonomy for calls against the attendance API
///
/// Malformed record fields are never an error: the model layer degrades them
/// to defaults. Everything here aborts the current run.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, broken body stream
    #[error("transport error: {0}")]
    Transport(String),

    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Login returned 2xx but the payload broke the contract
    #[error("authentication error: {0}")]
    Auth(String),

    /// 2xx response whose body is not JSON
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user after "Login failed: " or "Failed to fetch attendance data: ".
    ///
    /// HTTP errors surface the raw server body verbatim.
    pub fn user_detail(&self) -> String {
        match self {
            ApiError::Http { body, status } if body.trim().is_empty() => format!("HTTP {}", status),
            ApiError::Http { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_detail_is_raw_body() {
        let err = ApiError::Http { status: 401, body: "{\"message\":\"Invalid credentials\"}".to_string() };
        assert_eq!(err.user_detail(), "{\"message\":\"Invalid credentials\"}");
    }

    #[test]
    fn test_http_detail_empty_body_falls_back_to_status() {
        let err = ApiError::Http { status: 502, body: "  ".to_string() };
        assert_eq!(err.user_detail(), "HTTP 502");
    }

    #[test]
    fn test_auth_detail_mentions_token() {
        let err = ApiError::Auth("no token returned".to_string());
        assert_eq!(err.user_detail(), "authentication error: no token returned");
    }
}
