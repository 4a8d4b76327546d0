//! Transport port - the seam between the client and the HTTP stack
//!
//! The transport owns connection management, network errors, and status-code
//! handling. The client never interprets status codes or retries.

use crate::domain::request::ApiRequest;
use async_trait::async_trait;
use thiserror::Error;

/// Performs one request/response exchange.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute a single request. `Ok(None)` means the transport produced no
    /// response body; that is a first-class outcome, not an error.
    async fn call(&self, request: ApiRequest) -> Result<Option<Vec<u8>>, TransportError>;
}

/// Transport errors
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("receive failed: {0}")]
    ReceiveFailed(String),
}
