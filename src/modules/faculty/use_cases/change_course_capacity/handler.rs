// Changing the capacity of a course.
//
// When the new capacity is below the number of subscribers, the most recent subscribers are
// unsubscribed until the course fits.

use crate::modules::faculty::core::decide_error::DecideError;
use crate::modules::faculty::core::events::FacultyEvent;
use crate::modules::faculty::core::evolve::cannot_evolve;
use crate::modules::faculty::core::tags::{course_id_tag, of_type};
use crate::modules::faculty::use_cases::change_course_capacity::command::ChangeCourseCapacity;
use crate::shared::core::primitives::Criteria;
use crate::shared::infrastructure::command_bus::{CommandError, DcbCommandHandler, Decision};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseCapacityState {
    NoCourse,
    Course {
        capacity: u32,
        /// In subscription order.
        subscribers: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeCourseCapacityHandler;

impl DcbCommandHandler for ChangeCourseCapacityHandler {
    type Command = ChangeCourseCapacity;
    type State = CourseCapacityState;
    type Event = FacultyEvent;
    type Rejection = DecideError;

    fn criteria(&self, command: &ChangeCourseCapacity) -> Criteria {
        let course = || course_id_tag(&command.course_id);
        Criteria::any_of([
            of_type(FacultyEvent::COURSE_CREATED, course()),
            of_type(FacultyEvent::COURSE_CAPACITY_CHANGED, course()),
            of_type(FacultyEvent::STUDENT_SUBSCRIBED, course()),
            of_type(FacultyEvent::STUDENT_UNSUBSCRIBED, course()),
        ])
    }

    fn initial_state(&self, _command: &ChangeCourseCapacity) -> CourseCapacityState {
        CourseCapacityState::NoCourse
    }

    fn evolve(
        &self,
        state: CourseCapacityState,
        event: FacultyEvent,
    ) -> Result<CourseCapacityState, CommandError> {
        match (state, event) {
            (CourseCapacityState::NoCourse, FacultyEvent::CourseCreated { capacity, .. }) => {
                Ok(CourseCapacityState::Course {
                    capacity,
                    subscribers: Vec::new(),
                })
            }
            (
                CourseCapacityState::Course { subscribers, .. },
                FacultyEvent::CourseCapacityChanged { capacity, .. },
            ) => Ok(CourseCapacityState::Course {
                capacity,
                subscribers,
            }),
            (
                CourseCapacityState::Course {
                    capacity,
                    mut subscribers,
                },
                FacultyEvent::StudentSubscribed { student_id, .. },
            ) => {
                subscribers.push(student_id);
                Ok(CourseCapacityState::Course {
                    capacity,
                    subscribers,
                })
            }
            (
                CourseCapacityState::Course {
                    capacity,
                    mut subscribers,
                },
                FacultyEvent::StudentUnsubscribed { student_id, .. },
            ) => {
                subscribers.retain(|subscriber| *subscriber != student_id);
                Ok(CourseCapacityState::Course {
                    capacity,
                    subscribers,
                })
            }
            (state, event) => Err(cannot_evolve(&state, &event)),
        }
    }

    fn decide(
        &self,
        command: &ChangeCourseCapacity,
        state: &CourseCapacityState,
    ) -> Decision<FacultyEvent, DecideError> {
        let CourseCapacityState::Course { subscribers, .. } = state else {
            return Decision::Rejected {
                reason: DecideError::CourseNotFound,
            };
        };
        if command.capacity == 0 {
            return Decision::Rejected {
                reason: DecideError::InvalidCapacity,
            };
        }
        let changed = FacultyEvent::CourseCapacityChanged {
            course_id: command.course_id.clone(),
            capacity: command.capacity,
        };
        let unsubscribed = subscribers
            .iter()
            .skip(command.capacity as usize)
            .map(|student_id| FacultyEvent::StudentUnsubscribed {
                student_id: student_id.clone(),
                course_id: command.course_id.clone(),
            });
        Decision::Accepted {
            events: std::iter::once(changed).chain(unsubscribed).collect(),
        }
    }
}
