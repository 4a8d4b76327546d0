//! Request descriptors - built fresh for every call, never cached

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One fully assembled request handed to the transport.
///
/// Query parameters are always empty for this API but stay in the shape so
/// the transport contract carries them.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// Optional per-call parameters, each independently present or absent.
///
/// An absent value is omitted from the request entirely - it never becomes
/// an empty-string header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    pub authorization: Option<String>,
    pub accept: Option<String>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opaque credential forwarded verbatim as the `Authorization` header.
    pub fn authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }

    /// Content-negotiation string forwarded verbatim as the `Accept` header.
    pub fn accept(mut self, value: impl Into<String>) -> Self {
        self.accept = Some(value.into());
        self
    }

    pub fn to_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::new();
        if let Some(authorization) = &self.authorization {
            headers.push(("Authorization".to_string(), authorization.clone()));
        }
        if let Some(accept) = &self.accept {
            headers.push(("Accept".to_string(), accept.clone()));
        }
        headers
    }
}
