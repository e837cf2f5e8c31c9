// Renaming a course. The decision depends on the course creation and every earlier rename.

use crate::modules::faculty::core::decide_error::DecideError;
use crate::modules::faculty::core::events::FacultyEvent;
use crate::modules::faculty::core::evolve::cannot_evolve;
use crate::modules::faculty::core::tags::{course_id_tag, of_type};
use crate::modules::faculty::use_cases::rename_course::command::RenameCourse;
use crate::shared::core::primitives::Criteria;
use crate::shared::infrastructure::command_bus::{CommandError, DcbCommandHandler, Decision};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameCourseState {
    NoCourse,
    Named { name: String },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenameCourseHandler;

impl DcbCommandHandler for RenameCourseHandler {
    type Command = RenameCourse;
    type State = RenameCourseState;
    type Event = FacultyEvent;
    type Rejection = DecideError;

    fn criteria(&self, command: &RenameCourse) -> Criteria {
        Criteria::any_of([
            of_type(FacultyEvent::COURSE_CREATED, course_id_tag(&command.course_id)),
            of_type(FacultyEvent::COURSE_RENAMED, course_id_tag(&command.course_id)),
        ])
    }

    fn initial_state(&self, _command: &RenameCourse) -> RenameCourseState {
        RenameCourseState::NoCourse
    }

    fn evolve(
        &self,
        state: RenameCourseState,
        event: FacultyEvent,
    ) -> Result<RenameCourseState, CommandError> {
        match (state, event) {
            (RenameCourseState::NoCourse, FacultyEvent::CourseCreated { name, .. })
            | (RenameCourseState::Named { .. }, FacultyEvent::CourseRenamed { name, .. }) => {
                Ok(RenameCourseState::Named { name })
            }
            (state, event) => Err(cannot_evolve(&state, &event)),
        }
    }

    fn decide(
        &self,
        command: &RenameCourse,
        state: &RenameCourseState,
    ) -> Decision<FacultyEvent, DecideError> {
        match state {
            RenameCourseState::NoCourse => Decision::Rejected {
                reason: DecideError::CourseNotFound,
            },
            RenameCourseState::Named { name } if *name == command.name => Decision::Rejected {
                reason: DecideError::AlreadyNamed(name.clone()),
            },
            RenameCourseState::Named { .. } => Decision::Accepted {
                events: vec![FacultyEvent::CourseRenamed {
                    course_id: command.course_id.clone(),
                    name: command.name.clone(),
                }],
            },
        }
    }
}
