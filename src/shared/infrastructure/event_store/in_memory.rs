// In memory implementation of the EventStore port.
//
// Purpose
// - Serve as the process-lifetime event log for the application and for tests.
//
// Responsibilities
// - Assign gapless, strictly increasing positions to appended events.
// - Evaluate the consistency condition and commit the batch without another append
//   interleaving. The condition is checked under an upgradable lock so readers keep going;
//   only the commit itself takes the write lock.
// - Capture a read as the marker plus shared handles to the matching events, so iterating
//   it never touches the lock again.

use crate::shared::core::primitives::{ConsistencyCondition, Criteria, Event, SequencedEvent};
use crate::shared::infrastructure::event_store::tag_index::TagIndex;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, MarkedEvents};
use async_trait::async_trait;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug, Default)]
struct LogState {
    events: Vec<Arc<SequencedEvent>>,
    index: TagIndex,
}

impl LogState {
    fn len(&self) -> u64 {
        self.events.len() as u64
    }

    fn conflict(&self, condition: &ConsistencyCondition) -> Option<u64> {
        self.index.next_match(
            condition.criteria(),
            condition.first_checked_position(),
            self.len(),
        )
    }

    fn sequence(&self, events: Vec<Event>) -> Vec<Arc<SequencedEvent>> {
        let first = self.len();
        (first..)
            .zip(events)
            .map(|(position, event)| Arc::new(SequencedEvent::new(position, event)))
            .collect()
    }

    fn commit(&mut self, sequenced: Vec<Arc<SequencedEvent>>) -> u64 {
        for event in sequenced {
            self.index.record(event.position(), event.event().tags());
            self.events.push(event);
        }
        self.len() - 1
    }

    fn slice(&self, from: u64, until: u64) -> &[Arc<SequencedEvent>] {
        let until = usize::try_from(until).unwrap_or(usize::MAX).min(self.events.len());
        let from = usize::try_from(from).unwrap_or(usize::MAX).min(until);
        &self.events[from..until]
    }

    fn snapshot(&self, from: u64, criteria: Option<&Criteria>) -> Vec<Arc<SequencedEvent>> {
        let marker = self.len();
        match criteria {
            None => self.slice(from, marker).to_vec(),
            Some(criteria) => self
                .index
                .matching(criteria, from, marker)
                .into_iter()
                .filter_map(|position| usize::try_from(position).ok())
                .filter_map(|position| self.events.get(position).cloned())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    state: Arc<RwLock<LogState>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events stored so far.
    pub fn len(&self) -> u64 {
        self.state.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(
        &self,
        events: Vec<Event>,
        condition: Option<ConsistencyCondition>,
    ) -> Result<u64, EventStoreError> {
        if events.is_empty() {
            return Err(EventStoreError::InvalidArgument(
                "cannot append an empty batch".into(),
            ));
        }
        let count = events.len();
        let state = self.state.upgradable_read();
        if let Some(condition) = &condition {
            if let Some(position) = state.conflict(condition) {
                debug!(
                    boundary = condition.boundary(),
                    position, "consistency condition violated"
                );
                return Err(EventStoreError::InvalidConsistencyCondition {
                    boundary: condition.boundary(),
                    position,
                });
            }
        }
        let sequenced = state.sequence(events);
        let last = RwLockUpgradableReadGuard::upgrade(state).commit(sequenced);
        debug!(first = last + 1 - count as u64, last, count, "appended events");
        Ok(last)
    }

    async fn read(&self, from: u64, criteria: Option<Criteria>) -> MarkedEvents {
        let (marker, events) = {
            let state = self.state.read();
            (state.len(), state.snapshot(from, criteria.as_ref()))
        };
        trace!(from, marker, matched = events.len(), "reading events");
        MarkedEvents::new(
            marker,
            SnapshotCursor {
                events: events.into_iter(),
            },
        )
    }
}

/// Events captured when the read was issued. Later appends stay invisible.
struct SnapshotCursor {
    events: std::vec::IntoIter<Arc<SequencedEvent>>,
}

impl Iterator for SnapshotCursor {
    type Item = SequencedEvent;

    fn next(&mut self) -> Option<SequencedEvent> {
        self.events.next().map(Arc::unwrap_or_clone)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.events.size_hint()
    }
}
