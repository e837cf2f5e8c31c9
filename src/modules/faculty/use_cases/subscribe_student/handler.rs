// Subscribing a student to a course.
//
// Rules
// - The course exists and has a free seat.
// - The student is enrolled, not yet subscribed to the course, and below the course limit.
//
// The criteria span both the course and the student, so a concurrent subscription to the
// same course or by the same student invalidates the decision.

use crate::modules::faculty::core::decide_error::DecideError;
use crate::modules::faculty::core::events::FacultyEvent;
use crate::modules::faculty::core::evolve::cannot_evolve;
use crate::modules::faculty::core::tags::{course_id_tag, of_type, student_id_tag};
use crate::modules::faculty::use_cases::subscribe_student::command::SubscribeStudent;
use crate::shared::core::primitives::Criteria;
use crate::shared::infrastructure::command_bus::{CommandError, DcbCommandHandler, Decision};
use std::collections::BTreeSet;

pub const DEFAULT_MAX_COURSES_PER_STUDENT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionState {
    pub course_id: String,
    pub student_id: String,
    pub course_capacity: Option<u32>,
    pub student_enrolled: bool,
    pub course_subscribers: BTreeSet<String>,
    pub student_courses: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct SubscribeStudentHandler {
    max_courses_per_student: usize,
}

impl SubscribeStudentHandler {
    pub fn new(max_courses_per_student: usize) -> Self {
        Self {
            max_courses_per_student,
        }
    }
}

impl Default for SubscribeStudentHandler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COURSES_PER_STUDENT)
    }
}

impl DcbCommandHandler for SubscribeStudentHandler {
    type Command = SubscribeStudent;
    type State = SubscriptionState;
    type Event = FacultyEvent;
    type Rejection = DecideError;

    fn criteria(&self, command: &SubscribeStudent) -> Criteria {
        let course = || course_id_tag(&command.course_id);
        let student = || student_id_tag(&command.student_id);
        Criteria::any_of([
            of_type(FacultyEvent::COURSE_CREATED, course()),
            of_type(FacultyEvent::COURSE_CAPACITY_CHANGED, course()),
            of_type(FacultyEvent::STUDENT_ENROLLED, student()),
            of_type(FacultyEvent::STUDENT_SUBSCRIBED, course()),
            of_type(FacultyEvent::STUDENT_UNSUBSCRIBED, course()),
            of_type(FacultyEvent::STUDENT_SUBSCRIBED, student()),
            of_type(FacultyEvent::STUDENT_UNSUBSCRIBED, student()),
        ])
    }

    fn initial_state(&self, command: &SubscribeStudent) -> SubscriptionState {
        SubscriptionState {
            course_id: command.course_id.clone(),
            student_id: command.student_id.clone(),
            course_capacity: None,
            student_enrolled: false,
            course_subscribers: BTreeSet::new(),
            student_courses: BTreeSet::new(),
        }
    }

    fn evolve(
        &self,
        mut state: SubscriptionState,
        event: FacultyEvent,
    ) -> Result<SubscriptionState, CommandError> {
        match event {
            FacultyEvent::CourseCreated { capacity, .. }
            | FacultyEvent::CourseCapacityChanged { capacity, .. } => {
                state.course_capacity = Some(capacity);
            }
            FacultyEvent::StudentEnrolled { .. } => state.student_enrolled = true,
            FacultyEvent::StudentSubscribed {
                student_id,
                course_id,
            } => {
                if course_id == state.course_id {
                    state.course_subscribers.insert(student_id.clone());
                }
                if student_id == state.student_id {
                    state.student_courses.insert(course_id);
                }
            }
            FacultyEvent::StudentUnsubscribed {
                student_id,
                course_id,
            } => {
                if course_id == state.course_id {
                    state.course_subscribers.remove(&student_id);
                }
                if student_id == state.student_id {
                    state.student_courses.remove(&course_id);
                }
            }
            event @ FacultyEvent::CourseRenamed { .. } => {
                return Err(cannot_evolve(&state, &event));
            }
        }
        Ok(state)
    }

    fn decide(
        &self,
        command: &SubscribeStudent,
        state: &SubscriptionState,
    ) -> Decision<FacultyEvent, DecideError> {
        let reason = match state.course_capacity {
            None => Some(DecideError::CourseNotFound),
            Some(_) if !state.student_enrolled => Some(DecideError::StudentNotEnrolled),
            Some(_) if state.course_subscribers.contains(&command.student_id) => {
                Some(DecideError::AlreadySubscribed)
            }
            Some(capacity) if state.course_subscribers.len() >= capacity as usize => {
                Some(DecideError::CourseFull)
            }
            Some(_) if state.student_courses.len() >= self.max_courses_per_student => Some(
                DecideError::TooManyCourses(self.max_courses_per_student),
            ),
            Some(_) => None,
        };
        match reason {
            Some(reason) => Decision::Rejected { reason },
            None => Decision::Accepted {
                events: vec![FacultyEvent::StudentSubscribed {
                    student_id: command.student_id.clone(),
                    course_id: command.course_id.clone(),
                }],
            },
        }
    }
}
