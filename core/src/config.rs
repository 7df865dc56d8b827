//! Request specification shared by every call an endpoint makes.
//!
//! A `RequestSpec` is immutable once built. Endpoints clone it at
//! construction, so one spec can back any number of endpoints on any thread.

use std::env;
use std::time::Duration;

use crate::error::{ApiError, ApiResult};

pub const BASE_URL_ENV: &str = "PLACEHOLDER_BASE_URL";
pub const TIMEOUT_ENV: &str = "PLACEHOLDER_TIMEOUT_SECS";
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Base URL, default headers and timeout for a target service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    base_url: String,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl RequestSpec {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            timeout: None,
        }
    }

    /// Build from `PLACEHOLDER_BASE_URL` and `PLACEHOLDER_TIMEOUT_SECS`.
    pub fn from_env() -> ApiResult<Self> {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = env::var(TIMEOUT_ENV).ok();
        Self::from_parts(&base_url, timeout.as_deref())
    }

    fn from_parts(base_url: &str, timeout_secs: Option<&str>) -> ApiResult<Self> {
        if base_url.trim().is_empty() {
            return Err(ApiError::Config(format!("{BASE_URL_ENV} is empty")));
        }
        let mut spec = Self::new(base_url.trim());
        if let Some(raw) = timeout_secs {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ApiError::Config(format!("{TIMEOUT_ENV} must be whole seconds, got {raw:?}")))?;
            spec = spec.timeout(Duration::from_secs(secs));
        }
        Ok(spec)
    }

    /// Add a header sent with every request. A later value for the same
    /// (case-insensitive) name replaces the earlier one.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_ascii_lowercase(), value.to_string()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
    }

    /// Join the base URL with an already expanded resource path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
