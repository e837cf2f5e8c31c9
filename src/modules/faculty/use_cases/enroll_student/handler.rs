use crate::modules::faculty::core::decide_error::DecideError;
use crate::modules::faculty::core::events::FacultyEvent;
use crate::modules::faculty::core::evolve::cannot_evolve;
use crate::modules::faculty::core::tags::{of_type, student_id_tag};
use crate::modules::faculty::use_cases::enroll_student::command::EnrollStudent;
use crate::shared::core::primitives::Criteria;
use crate::shared::infrastructure::command_bus::{CommandError, DcbCommandHandler, Decision};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollStudentState {
    NotEnrolled,
    Enrolled,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnrollStudentHandler;

impl DcbCommandHandler for EnrollStudentHandler {
    type Command = EnrollStudent;
    type State = EnrollStudentState;
    type Event = FacultyEvent;
    type Rejection = DecideError;

    fn criteria(&self, command: &EnrollStudent) -> Criteria {
        Criteria::any_of([of_type(
            FacultyEvent::STUDENT_ENROLLED,
            student_id_tag(&command.student_id),
        )])
    }

    fn initial_state(&self, _command: &EnrollStudent) -> EnrollStudentState {
        EnrollStudentState::NotEnrolled
    }

    fn evolve(
        &self,
        state: EnrollStudentState,
        event: FacultyEvent,
    ) -> Result<EnrollStudentState, CommandError> {
        match (&state, &event) {
            (EnrollStudentState::NotEnrolled, FacultyEvent::StudentEnrolled { .. }) => {
                Ok(EnrollStudentState::Enrolled)
            }
            _ => Err(cannot_evolve(&state, &event)),
        }
    }

    fn decide(
        &self,
        command: &EnrollStudent,
        state: &EnrollStudentState,
    ) -> Decision<FacultyEvent, DecideError> {
        match state {
            EnrollStudentState::NotEnrolled => Decision::Accepted {
                events: vec![FacultyEvent::StudentEnrolled {
                    student_id: command.student_id.clone(),
                    name: command.name.clone(),
                }],
            },
            EnrollStudentState::Enrolled => Decision::Rejected {
                reason: DecideError::StudentAlreadyEnrolled,
            },
        }
    }
}
