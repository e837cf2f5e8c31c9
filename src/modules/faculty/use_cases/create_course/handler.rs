// Creating a course: a course id may be used once, and a course needs room for at least one student.

use crate::modules::faculty::core::decide_error::DecideError;
use crate::modules::faculty::core::events::FacultyEvent;
use crate::modules::faculty::core::evolve::cannot_evolve;
use crate::modules::faculty::core::tags::{course_id_tag, of_type};
use crate::modules::faculty::use_cases::create_course::command::CreateCourse;
use crate::shared::core::primitives::Criteria;
use crate::shared::infrastructure::command_bus::{CommandError, DcbCommandHandler, Decision};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateCourseState {
    NoCourse,
    Created,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreateCourseHandler;

impl DcbCommandHandler for CreateCourseHandler {
    type Command = CreateCourse;
    type State = CreateCourseState;
    type Event = FacultyEvent;
    type Rejection = DecideError;

    fn criteria(&self, command: &CreateCourse) -> Criteria {
        Criteria::any_of([of_type(
            FacultyEvent::COURSE_CREATED,
            course_id_tag(&command.course_id),
        )])
    }

    fn initial_state(&self, _command: &CreateCourse) -> CreateCourseState {
        CreateCourseState::NoCourse
    }

    fn evolve(
        &self,
        state: CreateCourseState,
        event: FacultyEvent,
    ) -> Result<CreateCourseState, CommandError> {
        match (&state, &event) {
            (CreateCourseState::NoCourse, FacultyEvent::CourseCreated { .. }) => {
                Ok(CreateCourseState::Created)
            }
            _ => Err(cannot_evolve(&state, &event)),
        }
    }

    fn decide(
        &self,
        command: &CreateCourse,
        state: &CreateCourseState,
    ) -> Decision<FacultyEvent, DecideError> {
        match state {
            CreateCourseState::NoCourse if command.capacity == 0 => Decision::Rejected {
                reason: DecideError::InvalidCapacity,
            },
            CreateCourseState::NoCourse => Decision::Accepted {
                events: vec![FacultyEvent::CourseCreated {
                    course_id: command.course_id.clone(),
                    name: command.name.clone(),
                    capacity: command.capacity,
                }],
            },
            CreateCourseState::Created => Decision::Rejected {
                reason: DecideError::CourseAlreadyExists,
            },
        }
    }
}
