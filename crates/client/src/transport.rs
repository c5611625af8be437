//! Transport seam between the client and the REST backend.
//!
//! The concrete HTTP stack (base URL, auth header, timeouts) lives behind
//! [`ApiTransport`]. The client only builds requests and reads the JSON that
//! comes back.

use serde_json::Value;
use thiserror::Error;

/// HTTP method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Method {
    /// Returns the method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path starting with `/`, e.g. `/companies/1/journals`.
    pub path: String,
    /// Query parameters in insertion order.
    pub query: Vec<(String, String)>,
    /// JSON body.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without query or body.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Creates a PUT request.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// Creates a PATCH request.
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the value of a query parameter.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Failures below the API envelope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// The backend could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The backend answered with a non-success status.
    ///
    /// `body` holds the response JSON when there was one, usually an error envelope.
    #[error("HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if it was JSON.
        body: Option<Value>,
    },
}

/// Sends API requests and returns the response JSON.
///
/// Implementations attach the base URL and credentials. Successful responses
/// return the raw envelope `{success, data, error}`.
pub trait ApiTransport: Send + Sync {
    /// Sends one request.
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<Value, TransportError>> + Send;
}

impl<T: ApiTransport> ApiTransport for std::sync::Arc<T> {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<Value, TransportError>> + Send {
        (**self).send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_keeps_query_order() {
        let request = ApiRequest::get("/companies/1/journals")
            .with_query("startDate", "2024-01-01")
            .with_query("endDate", "2024-01-31");

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.query[0].0, "startDate");
        assert_eq!(request.query_param("endDate"), Some("2024-01-31"));
        assert_eq!(request.query_param("accountId"), None);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_with_body() {
        let request = ApiRequest::post("/companies").with_body(json!({ "name": "Acme" }));
        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(request.body, Some(json!({ "name": "Acme" })));
    }
}
