//! Response handle returned by every endpoint call.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::http::HttpResponse;
use crate::status::HttpStatus;

/// A response that supports status assertion and one-shot body extraction.
///
/// `status_code` consumes and returns the handle so assertions chain:
/// `response.status_code(HttpStatus::Ok)?.extract::<User>()?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedResponse {
    inner: HttpResponse,
}

impl ValidatedResponse {
    pub fn new(inner: HttpResponse) -> Self {
        Self { inner }
    }

    pub fn status(&self) -> u16 {
        self.inner.status
    }

    pub fn body(&self) -> &str {
        &self.inner.body
    }

    /// First header with `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner
            .headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Assert the status equals `expected`.
    pub fn status_code(self, expected: HttpStatus) -> ApiResult<Self> {
        if self.inner.status == expected.code() {
            return Ok(self);
        }
        Err(ApiError::UnexpectedStatus {
            expected: expected.code(),
            actual: self.inner.status,
            body: self.inner.body,
        })
    }

    /// Deserialize the body as a single `T`.
    pub fn extract<T: DeserializeOwned>(self) -> ApiResult<T> {
        serde_json::from_str(&self.inner.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Deserialize the body as a JSON array of `T`, in server order.
    pub fn extract_all<T: DeserializeOwned>(self) -> ApiResult<Vec<T>> {
        self.extract()
    }

    /// Parse the body as untyped JSON for field-level assertions.
    pub fn json(&self) -> ApiResult<serde_json::Value> {
        serde_json::from_str(&self.inner.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn into_inner(self) -> HttpResponse {
        self.inner
    }
}

impl From<HttpResponse> for ValidatedResponse {
    fn from(inner: HttpResponse) -> Self {
        Self::new(inner)
    }
}
