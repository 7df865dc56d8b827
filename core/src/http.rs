//! HTTP transport types as plain data.
//!
//! # Design
//! Endpoints describe each call as an `HttpRequest` value and receive an
//! `HttpResponse` value back from a `Transport`. Keeping both sides as owned
//! data means the request a test expects can be compared field by field, and
//! a recorded response can be replayed without a network.

/// HTTP method for a request. Only the verbs the endpoints issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `path` is the full URL: the `RequestSpec` base URL followed by the
/// expanded resource path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
