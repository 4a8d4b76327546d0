/// HTTP transport adapter
/// Implements HttpTransport using reqwest

use crate::config::ClientConfig;
use crate::domain::request::{ApiRequest, HttpMethod};
use crate::domain::transport::{HttpTransport, TransportError};
use async_trait::async_trait;

/// Implementation backed by a pooled reqwest client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TransportError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Head => reqwest::Method::HEAD,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn call(&self, request: ApiRequest) -> Result<Option<Vec<u8>>, TransportError> {
        // The path arrives already percent-encoded.
        let url = format!("{}{}", self.base_url, request.path);

        tracing::debug!("Sending {} request to: {}", request.method.as_str(), url);

        let mut builder = self.client.request(to_reqwest_method(request.method), &url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::ConnectionFailed(e.to_string()))?;

        // Status interpretation lives here, not in the client.
        if !response.status().is_success() {
            return Err(TransportError::RequestFailed(format!(
                "HTTP request failed with status: {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::ReceiveFailed(e.to_string()))?;

        if bytes.is_empty() {
            Ok(None)
        } else {
            Ok(Some(bytes.to_vec()))
        }
    }
}
