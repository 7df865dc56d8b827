//! The single I/O seam of the client.
//!
//! # Design
//! `WebEndpoint` hands every request to a `Transport` and gets plain data
//! back. `UreqTransport` performs a blocking round-trip; tests substitute a
//! transport that records requests and replays canned responses. A status
//! code is never an error at this layer: the endpoint decides which status
//! it expects.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::RequestSpec;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP request and returns the response as data.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
///
/// ureq's automatic status-code-as-error behavior is disabled so 4xx/5xx
/// responses come back as data and reach the status assertion.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new(spec: &RequestSpec) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(spec.timeout_duration())
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        debug!(method = request.method.as_str(), url = %request.path, "sending request");

        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;

        let result = match method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&path);
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post | HttpMethod::Put => {
                let mut builder = if method == HttpMethod::Post {
                    self.agent.post(&path)
                } else {
                    self.agent.put(&path)
                };
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(|e| ApiError::TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::TransportError(e.to_string()))?;

        debug!(status, url = %path, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
