//! Resource DTOs for the placeholder API.
//!
//! # Design
//! One record type per resource serves as both request body and response
//! body. `id` is `None` when creating and is left out of the JSON so the
//! server assigns it. The mock-server crate defines its own copies of these
//! shapes; the integration tests catch schema drift between the two.

use serde::{Deserialize, Deserializer, Serialize};

use crate::resource::Resource;

/// A user. Identified by a string id.
///
/// Upstream services disagree on the JSON type of a user id, so both
/// `"id":"7"` and `"id":7` are read into the same string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "string_or_number"
    )]
    pub id: Option<String>,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(name: &str, username: &str, email: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        RawId::Unsigned(n) => n.to_string(),
        RawId::Signed(n) => n.to_string(),
    }))
}

impl Resource for User {
    type Id = String;

    const NAME: &'static str = "User";
    const COLLECTION_PATH: &'static str = "/users";
    const ITEM_PATH: &'static str = "/users/{userID}";

    fn id(&self) -> Option<&String> {
        self.id.as_ref()
    }
}

/// A comment on a post. Identified by an integer id.
///
/// `name` is the comment headline and `email` identifies its author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "postId", default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl Comment {
    pub fn new(name: &str, email: &str, body: &str) -> Self {
        Self {
            id: None,
            post_id: None,
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        }
    }

    pub fn on_post(mut self, post_id: u64) -> Self {
        self.post_id = Some(post_id);
        self
    }
}

impl Resource for Comment {
    type Id = u64;

    const NAME: &'static str = "Comment";
    const COLLECTION_PATH: &'static str = "/comments";
    const ITEM_PATH: &'static str = "/comments/{commentID}";

    fn id(&self) -> Option<&u64> {
        self.id.as_ref()
    }
}
