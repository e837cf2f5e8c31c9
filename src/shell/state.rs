use crate::modules::faculty::use_cases::subscribe_student::handler::SubscribeStudentHandler;
use crate::shared::infrastructure::command_bus::local::LocalCommandBus;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub event_store: Arc<InMemoryEventStore>,
    pub command_bus: Arc<LocalCommandBus<InMemoryEventStore>>,
    pub subscribe_student: SubscribeStudentHandler,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let event_store = Arc::new(InMemoryEventStore::new());
        let command_bus = Arc::new(LocalCommandBus::new(event_store.clone()));
        Self {
            event_store,
            command_bus,
            subscribe_student: SubscribeStudentHandler::new(config.max_courses_per_student),
        }
    }
}
