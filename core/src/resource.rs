//! Binding between a DTO and the paths it lives under.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A resource type served by the API.
///
/// `ITEM_PATH` carries exactly one `{placeholder}` that is filled with the
/// identifier. The identifier type follows the upstream service per resource
/// and is deliberately not unified across resources.
pub trait Resource: Serialize + DeserializeOwned {
    type Id: Display;

    /// Singular label used in log messages, e.g. `"User"`.
    const NAME: &'static str;
    const COLLECTION_PATH: &'static str;
    const ITEM_PATH: &'static str;

    /// Server-assigned identifier, absent on records not yet created.
    fn id(&self) -> Option<&Self::Id>;
}
