use crate::shared::core::primitives::{Criterion, Tag};
use crate::shared::infrastructure::serializer::type_tag;

pub const COURSE_ID: &str = "courseId";
pub const STUDENT_ID: &str = "studentId";

pub fn course_id_tag(course_id: &str) -> Tag {
    Tag::new(COURSE_ID, course_id)
}

pub fn student_id_tag(student_id: &str) -> Tag {
    Tag::new(STUDENT_ID, student_id)
}

/// Events named `event_type` that also carry `tag`.
pub fn of_type(event_type: &str, tag: Tag) -> Criterion {
    Criterion::from(type_tag(event_type)).and(tag)
}
