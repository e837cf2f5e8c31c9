// JSON codec between typed domain events and the opaque events the store keeps.
//
// Responsibilities
// - Encode a domain event into payload bytes and attach its tags plus a `type` tag.
// - Decode payload bytes back into the domain event enumeration.

use crate::shared::core::primitives::{Event, Tag};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const TYPE_TAG: &str = "type";

pub fn type_tag(name: &str) -> Tag {
    Tag::new(TYPE_TAG, name)
}

/// A typed event that knows its name and the tags it is indexed under.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync {
    fn name(&self) -> &'static str;
    fn tags(&self) -> Vec<Tag>;
}

#[derive(Debug, Error)]
pub enum SerializerError {
    #[error("failed to encode event: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode event: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn serialize<E: DomainEvent>(&self, event: &E) -> Result<Event, SerializerError> {
        let payload = serde_json::to_vec(event).map_err(SerializerError::Encode)?;
        let tags = event
            .tags()
            .into_iter()
            .chain(std::iter::once(type_tag(event.name())));
        Ok(Event::new(payload, tags))
    }

    pub fn deserialize<E: DomainEvent>(&self, event: &Event) -> Result<E, SerializerError> {
        serde_json::from_slice(event.payload()).map_err(SerializerError::Decode)
    }
}
