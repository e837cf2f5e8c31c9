// Command handling on top of the event store, with the consistency boundary derived per command.
//
// Purpose
// - Describe a command handler as criteria + initial state + evolve + decide.
// - Let `LocalCommandBus` run the read, fold, decide, append cycle for any such handler.
//
// Boundaries
// - Handlers are pure: no input or output. The bus owns all event store access.

use crate::shared::core::primitives::Criteria;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::serializer::{DomainEvent, SerializerError};
use std::fmt::Display;
use thiserror::Error;

pub mod local;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] EventStoreError),

    #[error(transparent)]
    Serialization(#[from] SerializerError),

    #[error("command rejected: {0}")]
    Rejected(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl CommandError {
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            CommandError::Store(EventStoreError::InvalidConsistencyCondition { .. })
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision<E, R> {
    Accepted { events: Vec<E> },
    Rejected { reason: R },
}

pub trait DcbCommandHandler: Send + Sync {
    type Command: Send + Sync;
    type State: Send;
    type Event: DomainEvent;
    type Rejection: Display + Send;

    /// Events the decision depends on. Also the scope of the consistency condition.
    fn criteria(&self, command: &Self::Command) -> Criteria;

    /// State before any event was folded in, scoped to the command's subject.
    fn initial_state(&self, command: &Self::Command) -> Self::State;

    /// Unknown state/event combinations are programming errors and must fail.
    fn evolve(&self, state: Self::State, event: Self::Event) -> Result<Self::State, CommandError>;

    fn decide(
        &self,
        command: &Self::Command,
        state: &Self::State,
    ) -> Decision<Self::Event, Self::Rejection>;
}
