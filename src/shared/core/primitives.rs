// Value types shared by every event store implementation.
//
// Purpose
// - Describe what gets stored (Event, SequencedEvent) and how callers select it (Criterion, Criteria).
// - Describe the optimistic concurrency guard attached to an append (ConsistencyCondition).
//
// Boundaries
// - Pure values. No input or output, no locking.
// - Constructors that can be handed invalid input return EventStoreError::InvalidArgument.

use crate::shared::core::errors::EventStoreError;
use std::collections::BTreeSet;
use std::fmt;

/// Key/value label attached to an event for indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    key: String,
    value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key(), self.value())
    }
}

/// Opaque payload plus the tags it is indexed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    payload: Vec<u8>,
    tags: BTreeSet<Tag>,
}

impl Event {
    pub fn new(payload: impl Into<Vec<u8>>, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            payload: payload.into(),
            tags: tags.into_iter().collect(),
        }
    }

    pub fn untagged(payload: impl Into<Vec<u8>>) -> Self {
        Self::new(payload, std::iter::empty())
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// An empty criteria set never matches.
    pub fn matches(&self, criteria: &Criteria) -> bool {
        criteria.iter().any(|criterion| criterion.matches(self))
    }
}

/// An event bound to the position the log assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedEvent {
    position: u64,
    event: Event,
}

impl SequencedEvent {
    pub fn new(position: u64, event: Event) -> Self {
        Self { position, event }
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn event(&self) -> &Event {
        &self.event
    }
}

/// Conjunction over a non-empty set of tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Criterion {
    tags: BTreeSet<Tag>,
}

impl Criterion {
    pub fn all_of(tags: impl IntoIterator<Item = Tag>) -> Result<Self, EventStoreError> {
        let tags: BTreeSet<Tag> = tags.into_iter().collect();
        if tags.is_empty() {
            return Err(EventStoreError::InvalidArgument(
                "a criterion needs at least one tag".into(),
            ));
        }
        Ok(Self { tags })
    }

    /// Adds one more required tag.
    pub fn and(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.tags.is_subset(event.tags())
    }
}

impl From<Tag> for Criterion {
    fn from(tag: Tag) -> Self {
        Self {
            tags: BTreeSet::from([tag]),
        }
    }
}

/// Disjunction over criteria. Zero criteria match nothing, which is not the
/// same thing as passing no criteria to a read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    criteria: BTreeSet<Criterion>,
}

impl Criteria {
    pub fn any_of(criteria: impl IntoIterator<Item = Criterion>) -> Self {
        Self {
            criteria: criteria.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }
}

impl FromIterator<Criterion> for Criteria {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self::any_of(iter)
    }
}

/// "No event at or after `boundary` matches `criteria`."
///
/// A boundary of -1 covers the whole log. A boundary taken from a read marker
/// covers only what was appended after that read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyCondition {
    boundary: i64,
    criteria: Criteria,
}

impl ConsistencyCondition {
    pub fn new(boundary: i64, criteria: Criteria) -> Result<Self, EventStoreError> {
        if boundary < -1 {
            return Err(EventStoreError::InvalidArgument(format!(
                "consistency boundary must be -1 or greater, got {boundary}"
            )));
        }
        Ok(Self { boundary, criteria })
    }

    pub fn from_start(criteria: Criteria) -> Self {
        Self {
            boundary: -1,
            criteria,
        }
    }

    pub fn after_marker(marker: u64, criteria: Criteria) -> Self {
        Self {
            boundary: i64::try_from(marker).unwrap_or(i64::MAX),
            criteria,
        }
    }

    pub fn boundary(&self) -> i64 {
        self.boundary
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// First position the condition applies to.
    pub fn first_checked_position(&self) -> u64 {
        u64::try_from(self.boundary.max(0)).unwrap_or(0)
    }
}
