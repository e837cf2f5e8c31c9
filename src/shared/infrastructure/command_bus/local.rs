use crate::shared::core::primitives::{ConsistencyCondition, Event};
use crate::shared::infrastructure::command_bus::{CommandError, DcbCommandHandler, Decision};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::serializer::JsonSerializer;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs commands in process against one event store.
///
/// Every dispatch reads the events selected by the handler's criteria, folds
/// them into state, asks the handler to decide and appends the outcome guarded
/// by the marker of that read. Conflicts are returned to the caller as is.
pub struct LocalCommandBus<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
    serializer: JsonSerializer,
}

impl<TEventStore> LocalCommandBus<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self {
            event_store,
            serializer: JsonSerializer,
        }
    }

    pub fn event_store(&self) -> &Arc<TEventStore> {
        &self.event_store
    }

    pub async fn dispatch<THandler>(
        &self,
        handler: &THandler,
        command: THandler::Command,
    ) -> Result<u64, CommandError>
    where
        THandler: DcbCommandHandler,
    {
        let criteria = handler.criteria(&command);
        let source = self.event_store.read(0, Some(criteria.clone())).await;
        let marker = source.marker();

        let mut state = handler.initial_state(&command);
        for sequenced in source {
            let event = self.serializer.deserialize(sequenced.event())?;
            state = handler.evolve(state, event)?;
        }

        match handler.decide(&command, &state) {
            Decision::Accepted { events } => {
                let events = events
                    .iter()
                    .map(|event| self.serializer.serialize(event))
                    .collect::<Result<Vec<Event>, _>>()?;
                let condition = ConsistencyCondition::after_marker(marker, criteria);
                match self.event_store.append(events, Some(condition)).await {
                    Ok(position) => {
                        info!(marker, position, "command accepted");
                        Ok(position)
                    }
                    Err(error) => {
                        debug!(marker, %error, "command lost a consistency race");
                        Err(error.into())
                    }
                }
            }
            Decision::Rejected { reason } => {
                warn!(%reason, "command rejected");
                Err(CommandError::Rejected(reason.to_string()))
            }
        }
    }
}
