//! Typed create/update/get/list operations for one resource type.
//!
//! # Design
//! Every operation has a flexible form (`*_with_status`) that asserts a
//! caller-chosen status and hands back the `ValidatedResponse`, and a strict
//! form that asserts the conventional success status and then deserializes
//! the body. The strict form is built on the flexible one, so a status
//! mismatch always surfaces before any parsing is attempted.

use std::marker::PhantomData;

use tracing::info;

use crate::config::RequestSpec;
use crate::error::ApiResult;
use crate::resource::Resource;
use crate::response::ValidatedResponse;
use crate::status::HttpStatus;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Comment, User};
use crate::web::WebEndpoint;

pub type UserEndpoint<T = UreqTransport> = Endpoint<User, T>;
pub type CommentEndpoint<T = UreqTransport> = Endpoint<Comment, T>;

/// Endpoint for resource `R`, issuing requests through transport `T`.
///
/// Holds only immutable configuration; each call performs exactly one
/// HTTP round-trip.
#[derive(Debug, Clone)]
pub struct Endpoint<R, T = UreqTransport> {
    web: WebEndpoint<T>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Endpoint<R, UreqTransport> {
    pub fn new(spec: RequestSpec) -> Self {
        let transport = UreqTransport::new(&spec);
        Self::with_transport(spec, transport)
    }

    /// Endpoint configured from the `PLACEHOLDER_*` environment variables.
    pub fn from_env() -> ApiResult<Self> {
        Ok(Self::new(RequestSpec::from_env()?))
    }
}

impl<R: Resource, T: Transport> Endpoint<R, T> {
    pub fn with_transport(spec: RequestSpec, transport: T) -> Self {
        Self {
            web: WebEndpoint::new(spec, transport),
            _resource: PhantomData,
        }
    }

    pub fn spec(&self) -> &RequestSpec {
        self.web.spec()
    }

    pub fn transport(&self) -> &T {
        self.web.transport()
    }

    /// POST a new record; expects 201 and returns the stored record.
    pub fn create(&self, dto: &R) -> ApiResult<R> {
        self.create_with_status(dto, HttpStatus::Created)?.extract()
    }

    pub fn create_with_status(&self, dto: &R, expected: HttpStatus) -> ApiResult<ValidatedResponse> {
        info!("Create new {}", R::NAME);
        self.web.post(R::COLLECTION_PATH, dto)?.status_code(expected)
    }

    /// PUT `dto` over the record `id`; expects 200 and returns the result.
    pub fn update(&self, id: &R::Id, dto: &R) -> ApiResult<R> {
        self.update_with_status(dto, id, HttpStatus::Ok)?.extract()
    }

    pub fn update_with_status(
        &self,
        dto: &R,
        id: &R::Id,
        expected: HttpStatus,
    ) -> ApiResult<ValidatedResponse> {
        info!("Update {} by id [{}]", R::NAME, id);
        let id = id.to_string();
        self.web.put(R::ITEM_PATH, dto, &[&id])?.status_code(expected)
    }

    pub fn get_by_id(&self, id: &R::Id) -> ApiResult<R> {
        self.get_by_id_with_status(id, HttpStatus::Ok)?.extract()
    }

    pub fn get_by_id_with_status(&self, id: &R::Id, expected: HttpStatus) -> ApiResult<ValidatedResponse> {
        info!("Get {} by id [{}]", R::NAME, id);
        let id = id.to_string();
        self.web.get(R::ITEM_PATH, &[&id])?.status_code(expected)
    }

    /// Every record in the collection, in the order the server lists them.
    pub fn get_all(&self) -> ApiResult<Vec<R>> {
        self.get_all_with_status(HttpStatus::Ok)?.extract_all()
    }

    pub fn get_all_with_status(&self, expected: HttpStatus) -> ApiResult<ValidatedResponse> {
        info!("Get all {}s", R::NAME);
        self.web.get(R::COLLECTION_PATH, &[])?.status_code(expected)
    }
}
