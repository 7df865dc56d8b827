//! Low-level verb methods shared by all resource endpoints.
//!
//! # Design
//! `WebEndpoint` turns a path template, its parameters and an optional body
//! into one `HttpRequest`, runs it through the transport and wraps the result
//! in a `ValidatedResponse`. It never asserts a status itself; that is left
//! to the caller so the same verbs serve strict and flexible operations.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

use crate::config::RequestSpec;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpMethod, HttpRequest};
use crate::response::ValidatedResponse;
use crate::transport::Transport;

/// Characters escaped in a path segment: controls, space, the query and
/// fragment delimiters, `/` and `%` itself.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Substitute `{name}` slots in `template` with `params`, in order.
///
/// Each parameter is percent-encoded as a single path segment; its shape is
/// not otherwise checked.
pub fn expand_path(template: &str, params: &[&str]) -> ApiResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut remaining = params.iter();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open..];
        let close = after
            .find('}')
            .ok_or_else(|| ApiError::PathTemplate(format!("unterminated placeholder in {template:?}")))?;
        let slot = &after[..=close];
        let value = remaining.next().ok_or_else(|| {
            ApiError::PathTemplate(format!("no value for {slot} in {template:?}"))
        })?;
        out.extend(utf8_percent_encode(value, PATH_SEGMENT));
        rest = &after[close + 1..];
    }
    out.push_str(rest);

    if remaining.next().is_some() {
        return Err(ApiError::PathTemplate(format!(
            "{} parameters given for {template:?}",
            params.len()
        )));
    }
    Ok(out)
}

/// Verb methods bound to one `RequestSpec` and one transport.
#[derive(Debug, Clone)]
pub struct WebEndpoint<T> {
    spec: RequestSpec,
    transport: T,
}

impl<T: Transport> WebEndpoint<T> {
    pub fn new(spec: RequestSpec, transport: T) -> Self {
        Self { spec, transport }
    }

    pub fn spec(&self) -> &RequestSpec {
        &self.spec
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn get(&self, template: &str, params: &[&str]) -> ApiResult<ValidatedResponse> {
        let request = self.build(HttpMethod::Get, template, params, None)?;
        self.send(request)
    }

    pub fn post<B: Serialize + ?Sized>(&self, template: &str, body: &B) -> ApiResult<ValidatedResponse> {
        let request = self.build(HttpMethod::Post, template, &[], Some(to_json(body)?))?;
        self.send(request)
    }

    pub fn put<B: Serialize + ?Sized>(
        &self,
        template: &str,
        body: &B,
        params: &[&str],
    ) -> ApiResult<ValidatedResponse> {
        let request = self.build(HttpMethod::Put, template, params, Some(to_json(body)?))?;
        self.send(request)
    }

    fn build(
        &self,
        method: HttpMethod,
        template: &str,
        params: &[&str],
        body: Option<String>,
    ) -> ApiResult<HttpRequest> {
        let path = expand_path(template, params)?;
        let mut headers = self.spec.headers().to_vec();
        let has_content_type = headers.iter().any(|(n, _)| n.eq_ignore_ascii_case("content-type"));
        if body.is_some() && !has_content_type {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        Ok(HttpRequest {
            method,
            path: self.spec.url(&path),
            headers,
            body,
        })
    }

    fn send(&self, request: HttpRequest) -> ApiResult<ValidatedResponse> {
        self.transport.execute(request).map(ValidatedResponse::new)
    }
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))
}
