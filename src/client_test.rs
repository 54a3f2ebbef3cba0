/// Tests for the authenticated client
#[cfg(test)]
mod tests {
    use crate::client::*;
    use crate::error::ApiError;
    use crate::signature::{Signer, hex_digest};
    use crate::test_support::{STUB_BASE_URL, StubTransport, json_response};
    use serde_json::json;

    const KEY: &str = "test-secret";

    fn client_with(transport: StubTransport) -> ApiClient<StubTransport> {
        ApiClient::new(transport, STUB_BASE_URL, Signer::new(KEY))
    }

    #[test]
    fn test_every_request_carries_a_valid_signature() {
        let client = client_with(StubTransport::always(200, json!({"ok": true})));
        client.get("/student/dashboard/attendance/stats", &[]).unwrap();
        client.get("/student/dashboard/attendance/stats", &[]).unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 2);
        for request in &requests {
            let sig = request.header(SIGNATURE_HEADER).expect("signature header");
            let (ts, digest) = sig.split_once('.').unwrap();
            assert_eq!(digest, hex_digest(KEY.as_bytes(), ts.as_bytes()));
        }
    }

    #[test]
    fn test_no_authorization_before_login() {
        let client = client_with(StubTransport::always(200, json!({})));
        client.get("/anything", &[]).unwrap();
        assert!(client.transport().requests()[0].header(AUTHORIZATION_HEADER).is_none());
    }

    #[test]
    fn test_bearer_attached_after_token_set() {
        let client = client_with(StubTransport::always(200, json!({})));
        client.set_token("abc".to_string()).unwrap();
        client.get("/anything", &[]).unwrap();
        assert_eq!(client.transport().requests()[0].header(AUTHORIZATION_HEADER), Some("Bearer abc"));
    }

    #[test]
    fn test_token_is_set_once() {
        let client = client_with(StubTransport::always(200, json!({})));
        client.set_token("first".to_string()).unwrap();
        assert!(matches!(client.set_token("second".to_string()), Err(ApiError::Auth(_))));
        assert_eq!(client.token(), Some("first"));
    }

    #[test]
    fn test_content_type_only_with_body() {
        let client = client_with(StubTransport::always(200, json!({})));
        client.get("/a", &[]).unwrap();
        client.post("/b", &json!({"x": 1})).unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests[0].header("Accept"), Some("application/json"));
        assert!(requests[0].header("Content-Type").is_none());
        assert_eq!(requests[1].header("content-type"), Some("application/json"));
        assert_eq!(requests[1].body.as_deref(), Some("{\"x\":1}"));
        assert_eq!(requests[1].method, Method::Post);
    }

    #[test]
    fn test_caller_headers_cannot_replace_signature_or_bearer() {
        let client = client_with(StubTransport::always(200, json!({})));
        client.set_token("real".to_string()).unwrap();
        client
            .request(
                Method::Get,
                "/a",
                None,
                &[],
                &[("Accept", "text/plain"), ("x-app-signature", "forged"), ("authorization", "Bearer fake")],
            )
            .unwrap();

        let request = &client.transport().requests()[0];
        assert_eq!(request.header("Accept"), Some("text/plain"));
        assert_ne!(request.header(SIGNATURE_HEADER), Some("forged"));
        assert_eq!(request.header(AUTHORIZATION_HEADER), Some("Bearer real"));
        assert_eq!(request.headers.iter().filter(|(k, _)| k.eq_ignore_ascii_case("x-app-signature")).count(), 1);
    }

    #[test]
    fn test_url_and_query() {
        let client = ApiClient::new(StubTransport::always(200, json!({})), "http://host/api/", Signer::new(KEY));
        client.get("/records", &[("page", "2".to_string()), ("limit", "50".to_string())]).unwrap();

        let request = &client.transport().requests()[0];
        assert_eq!(request.url, "http://host/api/records");
        assert_eq!(request.query_param("page"), Some("2"));
        assert_eq!(request.query_param("limit"), Some("50"));
    }

    #[test]
    fn test_non_2xx_is_http_error_with_raw_body() {
        let client = client_with(StubTransport::new(|_| {
            Ok(HttpResponse { status: 401, body: "Invalid credentials".to_string() })
        }));
        match client.get("/a", &[]) {
            Err(ApiError::Http { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "Invalid credentials");
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[test]
    fn test_transport_error_is_not_retried() {
        let client = client_with(StubTransport::new(|_| Err(ApiError::Transport("timed out".to_string()))));
        assert!(matches!(client.get("/a", &[]), Err(ApiError::Transport(_))));
        assert_eq!(client.transport().request_count(), 1);
    }

    #[test]
    fn test_non_json_success_body_is_decode_error() {
        let client =
            client_with(StubTransport::new(|_| Ok(HttpResponse { status: 200, body: "<html>".to_string() })));
        assert!(matches!(client.get("/a", &[]), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_empty_success_body_is_null() {
        let client = client_with(StubTransport::new(|_| Ok(HttpResponse { status: 204, body: String::new() })));
        assert_eq!(client.get("/a", &[]).unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn test_parsed_json_returned() {
        let client = client_with(StubTransport::new(|_| json_response(200, json!({"overall": {"percentage": 80}}))));
        let value = client.get("/stats", &[]).unwrap();
        assert_eq!(value["overall"]["percentage"], 80);
    }
}
