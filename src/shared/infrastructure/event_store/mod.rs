// Event store port: an append-only log with tag-based consistency conditions.
//
// Purpose
// - Let command handling code read a filtered view of the log together with a consistency marker,
//   and append new events guarded by a condition built from that marker.
//
// Boundaries
// - Adapters implement the EventStore trait. The in memory adapter lives in `in_memory`.

use crate::shared::core::primitives::{ConsistencyCondition, Criteria, Event, SequencedEvent};
use async_trait::async_trait;
use std::fmt;

pub use crate::shared::core::errors::EventStoreError;

pub mod in_memory;
mod tag_index;

/// Events produced by a read, plus the log length observed when the read was issued.
///
/// The marker is the boundary to hand to a later `ConsistencyCondition`.
pub struct MarkedEvents {
    marker: u64,
    events: Box<dyn Iterator<Item = SequencedEvent> + Send>,
}

impl MarkedEvents {
    pub fn new(marker: u64, events: impl Iterator<Item = SequencedEvent> + Send + 'static) -> Self {
        Self {
            marker,
            events: Box::new(events),
        }
    }

    pub fn marker(&self) -> u64 {
        self.marker
    }
}

impl Iterator for MarkedEvents {
    type Item = SequencedEvent;

    fn next(&mut self) -> Option<SequencedEvent> {
        self.events.next()
    }
}

impl fmt::Debug for MarkedEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkedEvents")
            .field("marker", &self.marker)
            .finish_non_exhaustive()
    }
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Appends the batch atomically and returns the position of its last event.
    async fn append(
        &self,
        events: Vec<Event>,
        condition: Option<ConsistencyCondition>,
    ) -> Result<u64, EventStoreError>;

    /// Events at or after `from` matching `criteria`; `None` matches every event.
    async fn read(&self, from: u64, criteria: Option<Criteria>) -> MarkedEvents;
}
