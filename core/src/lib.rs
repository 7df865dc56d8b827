//! Typed test-automation client for the users/comments placeholder API.
//!
//! # Overview
//! Each resource endpoint wraps POST/PUT/GET against a fixed resource path,
//! attaches the shared `RequestSpec`, asserts the expected HTTP status and
//! optionally deserializes the body into the resource DTO.
//!
//! # Design
//! - `Endpoint<R>` is generic over the `Resource`; users and comments differ
//!   only in their paths, DTO and identifier type.
//! - `WebEndpoint` owns path templating and request building; the network
//!   round-trip sits behind the `Transport` trait (`UreqTransport` by
//!   default), so tests can record requests and replay responses.
//! - Fully synchronous. Endpoints hold immutable configuration only.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod resource;
pub mod response;
pub mod status;
pub mod transport;
pub mod types;
pub mod web;

pub use config::RequestSpec;
pub use endpoint::{CommentEndpoint, Endpoint, UserEndpoint};
pub use error::{ApiError, ApiResult};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use resource::Resource;
pub use response::ValidatedResponse;
pub use status::HttpStatus;
pub use transport::{Transport, UreqTransport};
pub use types::{Comment, User};
pub use web::{expand_path, WebEndpoint};
