//! DefinitionsClient - translates logical operations into transport calls
//!
//! Every operation follows the same shape: render the path template, collect
//! the optional headers, attach a body for POST/PUT, make one transport call
//! and decode the result. The client holds no state beyond the injected
//! transport; calls are independent and idempotent with respect to the
//! client itself.

use crate::domain::entities::{DefinitionDeleteResponse, DefinitionEntity, DefinitionMap};
use crate::domain::path::{PathTemplate, TemplateError};
use crate::domain::request::{ApiRequest, CallOptions, HttpMethod};
use crate::domain::transport::{HttpTransport, TransportError};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;

const DEFS: &str = "/defs";
const DEF_BY_ID: &str = "/defs/{def_id}";
const DEF_DESIGN: &str = "/defs/{def_id}/rptdesign";

/// Client for the report definitions resource.
pub struct DefinitionsClient<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> Clone for DefinitionsClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: HttpTransport> DefinitionsClient<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Retrieve the mapping of definition IDs to URIs.
    pub async fn list_definitions(
        &self,
        options: &CallOptions,
    ) -> Result<Option<DefinitionMap>, ApiError> {
        let request = build_request(HttpMethod::Get, DEFS, &[], options, None)?;
        self.dispatch(request).await
    }

    /// Probe the definitions catalog without retrieving a body.
    pub async fn head_definitions(&self, options: &CallOptions) -> Result<(), ApiError> {
        let request = build_request(HttpMethod::Head, DEFS, &[], options, None)?;
        self.transport.call(request).await?;
        Ok(())
    }

    /// Create a definition. The body is forwarded to the transport unexamined.
    pub async fn create_definition(
        &self,
        body: Option<Vec<u8>>,
        options: &CallOptions,
    ) -> Result<Option<DefinitionEntity>, ApiError> {
        let request = build_request(HttpMethod::Post, DEFS, &[], options, body)?;
        self.dispatch(request).await
    }

    /// Retrieve the metadata entity for one definition.
    pub async fn get_definition(
        &self,
        def_id: &str,
        options: &CallOptions,
    ) -> Result<Option<DefinitionEntity>, ApiError> {
        let request = build_request(
            HttpMethod::Get,
            DEF_BY_ID,
            &[("def_id", def_id)],
            options,
            None,
        )?;
        self.dispatch(request).await
    }

    /// Probe one definition without retrieving a body.
    pub async fn head_definition(
        &self,
        def_id: &str,
        options: &CallOptions,
    ) -> Result<(), ApiError> {
        let request = build_request(
            HttpMethod::Head,
            DEF_BY_ID,
            &[("def_id", def_id)],
            options,
            None,
        )?;
        self.transport.call(request).await?;
        Ok(())
    }

    /// Delete a definition.
    pub async fn delete_definition(
        &self,
        def_id: &str,
        options: &CallOptions,
    ) -> Result<Option<DefinitionDeleteResponse>, ApiError> {
        let request = build_request(
            HttpMethod::Delete,
            DEF_BY_ID,
            &[("def_id", def_id)],
            options,
            None,
        )?;
        self.dispatch(request).await
    }

    /// Upload the report design for a definition. The body is forwarded
    /// unexamined.
    pub async fn put_definition_design(
        &self,
        def_id: &str,
        body: Option<Vec<u8>>,
        options: &CallOptions,
    ) -> Result<Option<DefinitionEntity>, ApiError> {
        let request = build_request(
            HttpMethod::Put,
            DEF_DESIGN,
            &[("def_id", def_id)],
            options,
            body,
        )?;
        self.dispatch(request).await
    }

    /// One transport round trip plus decoding. An absent or empty response
    /// body yields `Ok(None)` for every operation, including delete and put -
    /// the client never infers success or failure beyond what the transport
    /// reports.
    async fn dispatch<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<R>, ApiError> {
        tracing::debug!("Dispatching {} {}", request.method.as_str(), request.path);
        match self.transport.call(request).await? {
            Some(bytes) if !bytes.is_empty() => {
                let decoded = serde_json::from_slice(&bytes)?;
                Ok(Some(decoded))
            }
            _ => Ok(None),
        }
    }
}

fn build_request(
    method: HttpMethod,
    template: &'static str,
    path_params: &[(&str, &str)],
    options: &CallOptions,
    body: Option<Vec<u8>>,
) -> Result<ApiRequest, ApiError> {
    let path = PathTemplate::new(template).render(path_params)?;
    Ok(ApiRequest {
        method,
        path,
        query: Vec::new(),
        headers: options.to_headers(),
        body,
    })
}

/// Client errors - transport and decode failures pass through untranslated.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("path template error: {0}")]
    Template(#[from] TemplateError),
}
