use crate::modules::faculty::core::events::FacultyEvent;
use crate::shared::infrastructure::command_bus::CommandError;
use crate::shared::infrastructure::serializer::DomainEvent;
use std::fmt::Debug;

/// Error for an event the state machine has no transition for.
pub fn cannot_evolve(state: &impl Debug, event: &FacultyEvent) -> CommandError {
    CommandError::Unexpected(format!("cannot evolve {state:?} with {}", event.name()))
}
