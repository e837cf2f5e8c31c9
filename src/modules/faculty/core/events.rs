// Root event enumeration of the faculty context.
//
// Versioning and evolution
// - Prefer additive changes. Do not change the meaning of stored events.
// - The variant name is the value of the `type` tag and of the JSON `type` field.

use crate::modules::faculty::core::tags::{course_id_tag, student_id_tag};
use crate::shared::core::primitives::Tag;
use crate::shared::infrastructure::serializer::DomainEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum FacultyEvent {
    CourseCreated {
        course_id: String,
        name: String,
        capacity: u32,
    },
    CourseRenamed {
        course_id: String,
        name: String,
    },
    CourseCapacityChanged {
        course_id: String,
        capacity: u32,
    },
    StudentEnrolled {
        student_id: String,
        name: String,
    },
    StudentSubscribed {
        student_id: String,
        course_id: String,
    },
    StudentUnsubscribed {
        student_id: String,
        course_id: String,
    },
}

impl FacultyEvent {
    pub const COURSE_CREATED: &'static str = "CourseCreated";
    pub const COURSE_RENAMED: &'static str = "CourseRenamed";
    pub const COURSE_CAPACITY_CHANGED: &'static str = "CourseCapacityChanged";
    pub const STUDENT_ENROLLED: &'static str = "StudentEnrolled";
    pub const STUDENT_SUBSCRIBED: &'static str = "StudentSubscribed";
    pub const STUDENT_UNSUBSCRIBED: &'static str = "StudentUnsubscribed";
}

impl DomainEvent for FacultyEvent {
    fn name(&self) -> &'static str {
        match self {
            FacultyEvent::CourseCreated { .. } => Self::COURSE_CREATED,
            FacultyEvent::CourseRenamed { .. } => Self::COURSE_RENAMED,
            FacultyEvent::CourseCapacityChanged { .. } => Self::COURSE_CAPACITY_CHANGED,
            FacultyEvent::StudentEnrolled { .. } => Self::STUDENT_ENROLLED,
            FacultyEvent::StudentSubscribed { .. } => Self::STUDENT_SUBSCRIBED,
            FacultyEvent::StudentUnsubscribed { .. } => Self::STUDENT_UNSUBSCRIBED,
        }
    }

    fn tags(&self) -> Vec<Tag> {
        match self {
            FacultyEvent::CourseCreated { course_id, .. }
            | FacultyEvent::CourseRenamed { course_id, .. }
            | FacultyEvent::CourseCapacityChanged { course_id, .. } => {
                vec![course_id_tag(course_id)]
            }
            FacultyEvent::StudentEnrolled { student_id, .. } => vec![student_id_tag(student_id)],
            FacultyEvent::StudentSubscribed {
                student_id,
                course_id,
            }
            | FacultyEvent::StudentUnsubscribed {
                student_id,
                course_id,
            } => vec![student_id_tag(student_id), course_id_tag(course_id)],
        }
    }
}
