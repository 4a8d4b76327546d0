/// Integration tests for the definitions client
/// These tests verify request construction and decoding against a mock transport

use async_trait::async_trait;
use defs_client::domain::request::{ApiRequest, HttpMethod};
use defs_client::{
    ApiError, CallOptions, DefinitionsClient, DeleteStatus, HttpTransport, TransportError,
};
use std::sync::{Arc, Mutex};

/// Transport double that records every request and replays a canned response.
struct MockTransport {
    response: Option<Vec<u8>>,
    fail: bool,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    fn returning(body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            response: Some(body.to_vec()),
            fail: false,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn empty() -> Arc<Self> {
        Arc::new(Self {
            response: None,
            fail: false,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: None,
            fail: true,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was made")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn call(&self, request: ApiRequest) -> Result<Option<Vec<u8>>, TransportError> {
        self.requests.lock().unwrap().push(request);
        if self.fail {
            return Err(TransportError::ConnectionFailed(
                "mock connection refused".to_string(),
            ));
        }
        Ok(self.response.clone())
    }
}

#[tokio::test]
async fn test_list_definitions_decodes_mapping() {
    let transport = MockTransport::returning(
        br#"{"reportDefMap": {"def_1": "/defs/def_1", "def_2": "/defs/def_2"}}"#,
    );
    let client = DefinitionsClient::new(transport.clone());

    let map = client
        .list_definitions(&CallOptions::new())
        .await
        .unwrap()
        .expect("expected a mapping");

    assert_eq!(map.report_def_map.len(), 2);
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.path, "/defs");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_list_definitions_empty_response_is_no_value() {
    let transport = MockTransport::empty();
    let client = DefinitionsClient::new(transport);

    let result = client.list_definitions(&CallOptions::new()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_omitted_options_send_no_headers() {
    let transport = MockTransport::empty();
    let client = DefinitionsClient::new(transport.clone());

    client.list_definitions(&CallOptions::new()).await.unwrap();

    assert!(transport.last_request().headers.is_empty());
}

#[tokio::test]
async fn test_supplied_options_are_forwarded_verbatim() {
    let transport = MockTransport::empty();
    let client = DefinitionsClient::new(transport.clone());

    let options = CallOptions::new()
        .authorization("Bearer opaque-credential")
        .accept("application/vnd.report-defs+json");
    client.head_definitions(&options).await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Head);
    assert_eq!(
        request.headers,
        vec![
            (
                "Authorization".to_string(),
                "Bearer opaque-credential".to_string()
            ),
            (
                "Accept".to_string(),
                "application/vnd.report-defs+json".to_string()
            ),
        ]
    );
}

#[tokio::test]
async fn test_get_definition_encodes_path_parameter() {
    let transport = MockTransport::empty();
    let client = DefinitionsClient::new(transport.clone());

    client
        .get_definition("weekly report/v2", &CallOptions::new())
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.path, "/defs/weekly%20report%2Fv2");
    assert!(!request.path.contains(' '));
}

#[tokio::test]
async fn test_create_definition_passes_body_through_unmodified() {
    let transport = MockTransport::returning(br#"{"defId": "def_9"}"#);
    let client = DefinitionsClient::new(transport.clone());

    let payload = br#"{"defDescription": "quarterly totals"}"#.to_vec();
    let entity = client
        .create_definition(Some(payload.clone()), &CallOptions::new())
        .await
        .unwrap()
        .expect("expected an entity");

    // The result is whatever the transport returned, unrelated to the payload.
    assert_eq!(entity.def_id.as_deref(), Some("def_9"));
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.path, "/defs");
    assert_eq!(request.body.as_deref(), Some(payload.as_slice()));
}

#[tokio::test]
async fn test_delete_definition_issues_delete_with_no_body() {
    let transport = MockTransport::returning(br#"{"deleteStatus": "SUCCESS"}"#);
    let client = DefinitionsClient::new(transport.clone());

    let response = client
        .delete_definition("abc", &CallOptions::new())
        .await
        .unwrap()
        .expect("expected an acknowledgment");

    assert_eq!(response.delete_status, Some(DeleteStatus::Success));
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.path, "/defs/abc");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_delete_definition_empty_response_is_no_value() {
    // An empty success acknowledgment still surfaces as None; the client
    // does not infer an outcome from an absent body.
    let transport = MockTransport::empty();
    let client = DefinitionsClient::new(transport);

    let response = client
        .delete_definition("abc", &CallOptions::new())
        .await
        .unwrap();
    assert!(response.is_none());
}

#[tokio::test]
async fn test_put_definition_design_issues_put_with_body() {
    let transport = MockTransport::returning(br#"{"defId": "abc"}"#);
    let client = DefinitionsClient::new(transport.clone());

    let design = b"<report-design/>".to_vec();
    let entity = client
        .put_definition_design("abc", Some(design.clone()), &CallOptions::new())
        .await
        .unwrap()
        .expect("expected an entity");

    assert_eq!(entity.def_id.as_deref(), Some("abc"));
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.path, "/defs/abc/rptdesign");
    assert_eq!(request.body.as_deref(), Some(design.as_slice()));
}

#[tokio::test]
async fn test_head_definition_ignores_any_body() {
    let transport = MockTransport::returning(b"ignored");
    let client = DefinitionsClient::new(transport.clone());

    client
        .head_definition("abc", &CallOptions::new())
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Head);
    assert_eq!(request.path, "/defs/abc");
}

#[tokio::test]
async fn test_transport_error_passes_through() {
    let transport = MockTransport::failing();
    let client = DefinitionsClient::new(transport);

    let err = client
        .get_definition("abc", &CallOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_malformed_body_surfaces_decode_error() {
    let transport = MockTransport::returning(b"not json");
    let client = DefinitionsClient::new(transport);

    let err = client
        .list_definitions(&CallOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_client_is_stateless_across_calls() {
    let transport = MockTransport::empty();
    let client = DefinitionsClient::new(transport.clone());

    client.list_definitions(&CallOptions::new()).await.unwrap();
    let with_auth = CallOptions::new().authorization("token");
    client.list_definitions(&with_auth).await.unwrap();
    client.list_definitions(&CallOptions::new()).await.unwrap();

    // Options from one call never leak into the next.
    assert!(transport.last_request().headers.is_empty());
}
