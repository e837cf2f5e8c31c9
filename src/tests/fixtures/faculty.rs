// Shared test fixture that drives the faculty use cases through a command bus
// backed by a fresh in memory event store.

use crate::modules::faculty::core::events::FacultyEvent;
use crate::modules::faculty::use_cases::create_course::command::CreateCourse;
use crate::modules::faculty::use_cases::create_course::handler::CreateCourseHandler;
use crate::modules::faculty::use_cases::enroll_student::command::EnrollStudent;
use crate::modules::faculty::use_cases::enroll_student::handler::EnrollStudentHandler;
use crate::modules::faculty::use_cases::subscribe_student::command::SubscribeStudent;
use crate::modules::faculty::use_cases::subscribe_student::handler::SubscribeStudentHandler;
use crate::shared::core::primitives::Criteria;
use crate::shared::infrastructure::command_bus::local::LocalCommandBus;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::serializer::JsonSerializer;
use std::sync::Arc;
use uuid::Uuid;

pub struct Fixtures {
    pub event_store: Arc<InMemoryEventStore>,
    pub bus: Arc<LocalCommandBus<InMemoryEventStore>>,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixtures {
    pub fn new() -> Self {
        let event_store = Arc::new(InMemoryEventStore::new());
        let bus = Arc::new(LocalCommandBus::new(event_store.clone()));
        Self { event_store, bus }
    }

    pub async fn create_course(&self, capacity: u32) -> String {
        let course_id = Uuid::now_v7().to_string();
        self.bus
            .dispatch(
                &CreateCourseHandler,
                CreateCourse {
                    course_id: course_id.clone(),
                    name: format!("Course {course_id}"),
                    capacity,
                },
            )
            .await
            .expect("expected the course to be created");
        course_id
    }

    pub async fn enroll_student(&self) -> String {
        let student_id = Uuid::now_v7().to_string();
        self.bus
            .dispatch(
                &EnrollStudentHandler,
                EnrollStudent {
                    student_id: student_id.clone(),
                    name: format!("Student {student_id}"),
                },
            )
            .await
            .expect("expected the student to be enrolled");
        student_id
    }

    pub async fn subscribe(&self, student_id: &str, course_id: &str) {
        self.bus
            .dispatch(
                &SubscribeStudentHandler::default(),
                SubscribeStudent {
                    student_id: student_id.into(),
                    course_id: course_id.into(),
                },
            )
            .await
            .expect("expected the student to be subscribed");
    }

    /// Decoded events matching `criteria`, in log order.
    pub async fn events(&self, criteria: Criteria) -> Vec<FacultyEvent> {
        self.event_store
            .read(0, Some(criteria))
            .await
            .map(|sequenced| {
                JsonSerializer
                    .deserialize(sequenced.event())
                    .expect("expected a faculty event")
            })
            .collect()
    }
}
